// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ports the fetch cycle talks through: a verse source (network) and a
//! verse view (the two display regions plus the refresh control).

use futures_util::future::LocalBoxFuture;

use crate::error::FetchError;
use crate::verse::DisplayedVerse;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text. Adapters may leave it empty for error statuses.
    pub body: String,
}

impl HttpReply {
    /// Reply with status 200.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// True for 2xx statuses (the `Response.ok` rule).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network port: issue one GET and return the raw reply.
///
/// Futures are `!Send`; the browser event loop is single-threaded.
pub trait VerseSource {
    /// GET `url`. Transport failures map to [`FetchError::Transport`].
    fn fetch(&self, url: String) -> LocalBoxFuture<'_, Result<HttpReply, FetchError>>;
}

/// Display port for the verse, the attribution, and the refresh control.
pub trait VerseView {
    /// Disable the refresh control and show `label` on it.
    fn set_loading(&self, label: &str);
    /// Re-enable the refresh control and restore `label`.
    fn set_idle(&self, label: &str);
    /// Write both display regions.
    fn show_verse(&self, verse: &DisplayedVerse);
    /// Write `message` into the verse region and clear the attribution.
    fn show_error(&self, message: &str);
    /// Text currently shown in the verse region.
    fn current_text(&self) -> String;
}
