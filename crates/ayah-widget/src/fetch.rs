// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `window.fetch` as a [`VerseSource`].

use ayah_core::{FetchError, HttpReply, VerseSource};
use futures_util::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::error::describe_js;

/// Issues GET requests through the page's `fetch`.
#[derive(Debug, Clone)]
pub struct WindowFetch {
    window: Window,
}

impl WindowFetch {
    /// Source bound to `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    async fn get(&self, url: String) -> Result<HttpReply, FetchError> {
        let value = JsFuture::from(self.window.fetch_with_str(&url))
            .await
            .map_err(|e| FetchError::Transport(describe_js(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| FetchError::Transport("fetch did not yield a Response".into()))?;
        let status = response.status();
        if !response.ok() {
            // body is never shown for error statuses
            return Ok(HttpReply {
                status,
                body: String::new(),
            });
        }
        let text = response
            .text()
            .map_err(|e| FetchError::Transport(describe_js(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Transport(describe_js(&e)))?
            .as_string()
            .unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}

impl VerseSource for WindowFetch {
    fn fetch(&self, url: String) -> LocalBoxFuture<'_, Result<HttpReply, FetchError>> {
        self.get(url).boxed_local()
    }
}
