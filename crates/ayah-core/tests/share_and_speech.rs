// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Share links and read-aloud driven from the verse on screen.
#![allow(clippy::unwrap_used)]

use ayah_core::{
    encode_uri_component, read_aloud, share_current_verse, OpenError, SharePlatform, SpeechError,
    SHARE_TARGET,
};
use ayah_dry_tests::{RecordingOpener, RecordingSpeaker, RecordingView};

const PAGE: &str = "https://example.org/random-aya/";

#[test]
fn twitter_share_opens_encoded_verse_in_new_context() {
    let view = RecordingView::showing("بِسْمِ ٱللَّهِ");
    let opener = RecordingOpener::new();

    let url = share_current_verse(&view, &opener, SharePlatform::Twitter, PAGE).unwrap();

    let expected = format!(
        "https://twitter.com/intent/tweet?text={}",
        encode_uri_component("بِسْمِ ٱللَّهِ")
    );
    assert_eq!(url, expected);
    assert_eq!(opener.opened(), vec![(expected, SHARE_TARGET.to_string())]);
    assert_eq!(SHARE_TARGET, "_blank");
}

#[test]
fn facebook_share_carries_page_url_and_quote() {
    let view = RecordingView::showing("X Y");
    let opener = RecordingOpener::new();

    let url = share_current_verse(&view, &opener, SharePlatform::Facebook, PAGE).unwrap();

    assert_eq!(
        url,
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.org%2Frandom-aya%2F&quote=X%20Y"
    );
    assert_eq!(opener.opened().len(), 1);
}

#[test]
fn share_of_empty_verse_still_opens() {
    let view = RecordingView::new();
    let opener = RecordingOpener::new();
    let url = share_current_verse(&view, &opener, SharePlatform::Twitter, PAGE).unwrap();
    assert_eq!(url, "https://twitter.com/intent/tweet?text=");
}

#[test]
fn blocked_popup_is_reported() {
    let view = RecordingView::showing("X");
    let opener = RecordingOpener::new().blocked();
    assert_eq!(
        share_current_verse(&view, &opener, SharePlatform::Twitter, PAGE),
        Err(OpenError::Blocked)
    );
    assert_eq!(opener.opened().len(), 1);
}

#[test]
fn read_aloud_speaks_current_verse_in_configured_language() {
    let view = RecordingView::showing("T");
    let speaker = RecordingSpeaker::new();
    assert_eq!(read_aloud(&view, &speaker, "ar-SA"), Ok(true));
    assert_eq!(speaker.spoken(), vec![("T".to_string(), "ar-SA".to_string())]);
}

#[test]
fn read_aloud_skips_empty_verse() {
    let view = RecordingView::showing("  ");
    let speaker = RecordingSpeaker::new();
    assert_eq!(read_aloud(&view, &speaker, "ar-SA"), Ok(false));
    assert!(speaker.spoken().is_empty());
}

#[test]
fn read_aloud_surfaces_missing_synthesis() {
    let view = RecordingView::showing("T");
    let speaker = RecordingSpeaker::new().unavailable();
    assert!(matches!(
        read_aloud(&view, &speaker, "ar-SA"),
        Err(SpeechError::Unavailable(_))
    ));
}
