// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Widget configuration: endpoint, selectors, strings and feature flags.
//!
//! Every field has a default matching the stock page, so an empty JSON object
//! (or an omitted options argument on the JS side) yields a working widget.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::corpus::{AyahNumber, Corpus, QURAN_AYAT};

/// Default API endpoint (one ayah per request).
pub const DEFAULT_API_BASE_URL: &str = "https://api.alquran.cloud/v1/ayah";
/// Refresh control label while idle.
pub const DEFAULT_BUTTON_LABEL: &str = "آيَاتِ";
/// Refresh control label while a fetch is outstanding.
pub const DEFAULT_LOADING_LABEL: &str = "جار التحميل...";
/// Message shown in the verse region when a fetch fails.
pub const DEFAULT_ERROR_MESSAGE: &str = "حدث خطأ أثناء جلب الآية. يرجى المحاولة مرة أخرى.";

/// Error type for config parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON text could not be deserialized.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A field holds a value the widget cannot run with.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field path.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// Catch-all error variant (e.g. JS-side deserialization).
    #[error("other: {0}")]
    Other(String),
}

/// What to do when a refresh is triggered while another is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyPolicy {
    /// Start the new cycle; only the newest response is displayed.
    #[default]
    LatestWins,
    /// Drop triggers until the outstanding cycle completes.
    IgnoreWhileLoading,
}

/// CSS selectors for the widget's elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    /// Verse text region.
    pub verse: String,
    /// Attribution (surah name) region.
    pub attribution: String,
    /// Refresh button.
    pub refresh: String,
    /// Copy control.
    pub copy: String,
    /// Twitter share control.
    pub twitter: String,
    /// Facebook share control.
    pub facebook: String,
    /// Read-aloud control; only looked up when read-aloud is enabled.
    pub read_aloud: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            verse: ".quote".into(),
            attribution: ".name".into(),
            refresh: "button[type='button']".into(),
            copy: ".copy".into(),
            twitter: ".twitter".into(),
            facebook: ".facebook".into(),
            read_aloud: ".speech".into(),
        }
    }
}

/// Localized UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetStrings {
    /// Idle refresh label.
    pub button_label: String,
    /// Loading refresh label.
    pub loading_label: String,
    /// Fetch failure message.
    pub error_message: String,
}

impl Default for WidgetStrings {
    fn default() -> Self {
        Self {
            button_label: DEFAULT_BUTTON_LABEL.into(),
            loading_label: DEFAULT_LOADING_LABEL.into(),
            error_message: DEFAULT_ERROR_MESSAGE.into(),
        }
    }
}

/// Behavioral switches that distinguish page variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureFlags {
    /// Bind the read-aloud control.
    pub read_aloud: bool,
    /// Activate controls with Enter/Space as well as click.
    pub keyboard_activation: bool,
    /// Fetch a verse as soon as the widget initializes.
    pub load_on_init: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            read_aloud: false,
            keyboard_activation: true,
            load_on_init: true,
        }
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Base URL; the ayah number is appended as the last path segment.
    pub api_base_url: String,
    /// Number of ayat the endpoint serves.
    pub corpus_size: u16,
    /// Element selectors.
    pub selectors: Selectors,
    /// UI strings.
    pub strings: WidgetStrings,
    /// Feature switches.
    pub features: FeatureFlags,
    /// Re-entrancy policy for the refresh control.
    pub concurrency: ConcurrencyPolicy,
    /// How long the copy control keeps its `active` class.
    pub copy_feedback_ms: u32,
    /// BCP 47 language tag for read-aloud.
    pub speech_lang: String,
    /// Minimum level forwarded to the developer console.
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            corpus_size: QURAN_AYAT,
            selectors: Selectors::default(),
            strings: WidgetStrings::default(),
            features: FeatureFlags::default(),
            concurrency: ConcurrencyPolicy::default(),
            copy_feedback_ms: 500,
            speech_lang: "ar-SA".into(),
            log_level: "info".into(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widget cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(invalid("api_base_url", "must not be empty"));
        }
        if self.corpus_size == 0 {
            return Err(invalid("corpus_size", "must be at least 1"));
        }
        let selectors = [
            ("selectors.verse", &self.selectors.verse),
            ("selectors.attribution", &self.selectors.attribution),
            ("selectors.refresh", &self.selectors.refresh),
            ("selectors.copy", &self.selectors.copy),
            ("selectors.twitter", &self.selectors.twitter),
            ("selectors.facebook", &self.selectors.facebook),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        if self.features.read_aloud && self.selectors.read_aloud.trim().is_empty() {
            return Err(invalid(
                "selectors.read_aloud",
                "must not be empty when read-aloud is enabled",
            ));
        }
        self.log_filter()?;
        Ok(())
    }

    /// Corpus bounding the random draw.
    pub fn corpus(&self) -> Corpus {
        Corpus::new(self.corpus_size).unwrap_or_default()
    }

    /// `{api_base_url}/{ayah}` with exactly one separating slash.
    pub fn ayah_url(&self, ayah: AyahNumber) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), ayah)
    }

    /// Parsed [`Self::log_level`].
    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|e| invalid("log_level", &e.to_string()))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
