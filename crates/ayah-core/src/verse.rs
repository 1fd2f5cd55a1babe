// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The displayed verse and the API payload it is read from.

use serde::Deserialize;

use crate::error::FetchError;
use crate::ports::HttpReply;

/// Verse text plus the name of the surah it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayedVerse {
    /// Verse text, verbatim from the API.
    pub text: String,
    /// Source-collection (surah) name; empty when the API omits it.
    pub source_name: String,
}

/// Top-level `GET /v1/ayah/{n}` body. Unknown fields (`code`, `status`,
/// edition metadata) are ignored.
#[derive(Debug, Deserialize)]
struct AyahEnvelope {
    data: Option<AyahRecord>,
}

#[derive(Debug, Deserialize)]
struct AyahRecord {
    text: Option<String>,
    surah: Option<SurahRef>,
}

#[derive(Debug, Deserialize)]
struct SurahRef {
    name: Option<String>,
}

impl DisplayedVerse {
    /// Build a verse from its parts.
    pub fn new(text: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_name: source_name.into(),
        }
    }

    /// Extract the verse from a JSON body.
    ///
    /// `data.text` must be a non-empty string; `data.surah.name` is optional.
    pub fn from_payload(body: &str) -> Result<Self, FetchError> {
        let envelope: AyahEnvelope =
            serde_json::from_str(body).map_err(|e| FetchError::Payload(e.to_string()))?;
        let record = envelope
            .data
            .ok_or_else(|| FetchError::Payload("missing verse data".into()))?;
        let text = record
            .text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| FetchError::Payload("missing verse text".into()))?;
        let source_name = record
            .surah
            .and_then(|surah| surah.name)
            .unwrap_or_default();
        Ok(Self { text, source_name })
    }
}

/// Check the status, then parse the body.
pub fn parse_reply(reply: &HttpReply) -> Result<DisplayedVerse, FetchError> {
    if !reply.is_success() {
        return Err(FetchError::Status(reply.status));
    }
    DisplayedVerse::from_payload(&reply.body)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn well_formed_payload_yields_text_and_surah() {
        let verse =
            DisplayedVerse::from_payload(r#"{"data":{"text":"T","surah":{"name":"S"}}}"#).unwrap();
        assert_eq!(verse, DisplayedVerse::new("T", "S"));
    }

    #[test]
    fn api_shaped_payload_ignores_extra_fields() {
        let body = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "number": 262,
                "text": "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ",
                "edition": {"identifier": "quran-uthmani"},
                "surah": {"number": 2, "name": "سُورَةُ البَقَرَةِ", "numberOfAyahs": 286},
                "numberInSurah": 255
            }
        }"#;
        let verse = DisplayedVerse::from_payload(body).unwrap();
        assert_eq!(verse.text, "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ");
        assert_eq!(verse.source_name, "سُورَةُ البَقَرَةِ");
    }

    #[test]
    fn missing_surah_leaves_attribution_empty() {
        let verse = DisplayedVerse::from_payload(r#"{"data":{"text":"T"}}"#).unwrap();
        assert_eq!(verse.source_name, "");
        let verse = DisplayedVerse::from_payload(r#"{"data":{"text":"T","surah":{}}}"#).unwrap();
        assert_eq!(verse.source_name, "");
    }

    #[test]
    fn missing_or_empty_text_is_a_payload_error() {
        for body in [
            r#"{"data":{"surah":{"name":"S"}}}"#,
            r#"{"data":{"text":"","surah":{"name":"S"}}}"#,
            r#"{"data":null}"#,
            r"{}",
        ] {
            assert!(
                matches!(DisplayedVerse::from_payload(body), Err(FetchError::Payload(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn wrong_shapes_are_payload_errors() {
        // the API reports lookup failures as a string in `data`
        for body in [
            r#"{"code":404,"status":"NOT FOUND","data":"Please specify an Ayah number"}"#,
            r#"{"data":{"text":42}}"#,
            "not json",
            "",
        ] {
            assert!(
                matches!(DisplayedVerse::from_payload(body), Err(FetchError::Payload(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn parse_reply_checks_status_before_body() {
        let reply = HttpReply {
            status: 500,
            body: r#"{"data":{"text":"T"}}"#.into(),
        };
        assert_eq!(parse_reply(&reply), Err(FetchError::Status(500)));
        assert_eq!(
            parse_reply(&HttpReply::ok(r#"{"data":{"text":"T"}}"#)),
            Ok(DisplayedVerse::new("T", ""))
        );
    }
}
