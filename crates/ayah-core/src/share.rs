// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Share links for the two supported networks.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::OpenError;
use crate::ports::VerseView;

/// Browsing-context target for share links.
pub const SHARE_TARGET: &str = "_blank";

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` as a query component (UTF-8, `encodeURIComponent` rules).
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Supported share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    /// Tweet intent.
    Twitter,
    /// Facebook sharer.
    Facebook,
}

impl SharePlatform {
    /// Sharing URL for `text`. Facebook additionally carries `page_url`.
    pub fn share_url(self, text: &str, page_url: &str) -> String {
        let text = encode_uri_component(text);
        match self {
            Self::Twitter => format!("https://twitter.com/intent/tweet?text={text}"),
            Self::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={text}",
                encode_uri_component(page_url)
            ),
        }
    }

    /// Lowercase name used in config and the JS API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized platform name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown share platform `{0}`")]
pub struct UnknownPlatform(pub String);

impl FromStr for SharePlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Self::Twitter),
            "facebook" => Ok(Self::Facebook),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// Port for opening a URL in a new browsing context.
pub trait LinkOpener {
    /// Open `url` in `target`.
    fn open(&self, url: &str, target: &str) -> Result<(), OpenError>;
}

/// Build the share URL for the verse on screen and open it. Returns the URL.
pub fn share_current_verse<V, O>(
    view: &V,
    opener: &O,
    platform: SharePlatform,
    page_url: &str,
) -> Result<String, OpenError>
where
    V: VerseView + ?Sized,
    O: LinkOpener + ?Sized,
{
    let url = platform.share_url(&view.current_text(), page_url);
    match opener.open(&url, SHARE_TARGET) {
        Ok(()) => {
            debug!(%platform, "opened share link");
            Ok(url)
        }
        Err(err) => {
            warn!(%platform, error = %err, "failed to open share link");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("abc XYZ 019"), "abc%20XYZ%20019");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(
            encode_uri_component("a&b=c?d/e#f+g"),
            "a%26b%3Dc%3Fd%2Fe%23f%2Bg"
        );
        assert_eq!(encode_uri_component("آية"), "%D8%A2%D9%8A%D8%A9");
    }

    #[test]
    fn twitter_url_carries_text_only() {
        assert_eq!(
            SharePlatform::Twitter.share_url("قل هو", "https://example.org/"),
            "https://twitter.com/intent/tweet?text=%D9%82%D9%84%20%D9%87%D9%88"
        );
    }

    #[test]
    fn facebook_url_carries_page_and_quote() {
        assert_eq!(
            SharePlatform::Facebook.share_url("X & Y", "https://example.org/aya?x=1"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.org%2Faya%3Fx%3D1&quote=X%20%26%20Y"
        );
    }

    #[test]
    fn platform_names_round_trip() {
        for platform in [SharePlatform::Twitter, SharePlatform::Facebook] {
            assert_eq!(platform.as_str().parse::<SharePlatform>(), Ok(platform));
        }
        assert_eq!(" X ".parse::<SharePlatform>(), Ok(SharePlatform::Twitter));
        assert!("myspace".parse::<SharePlatform>().is_err());
    }
}
