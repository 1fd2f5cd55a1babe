// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tracing` → developer console bridge.
//!
//! The core crates log through `tracing`; in the browser a registry with a
//! [`ConsoleLayer`] routes each event to `console.error`, `console.warn` or
//! `console.log` by level.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.log`
    Log,
}

impl ConsoleMethod {
    /// Method for `level`.
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }
}

/// Where formatted lines end up.
pub trait ConsoleSink: 'static {
    /// Write one formatted line.
    fn write_line(&self, method: ConsoleMethod, line: &str);
}

/// The browser's developer console.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    fn write_line(&self, method: ConsoleMethod, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);
        match method {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Log => web_sys::console::log_1(&line),
        }
    }
}

/// Layer formatting events as `[target] message key=value ...`.
#[derive(Debug, Clone, Default)]
pub struct ConsoleLayer<W> {
    sink: W,
}

impl<W: ConsoleSink> ConsoleLayer<W> {
    /// Layer writing to `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: ConsoleSink,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut line = EventLine::default();
        event.record(&mut line);
        self.sink.write_line(
            ConsoleMethod::for_level(*meta.level()),
            &line.finish(meta.target()),
        );
    }
}

#[derive(Default)]
struct EventLine {
    message: String,
    fields: String,
}

impl EventLine {
    fn finish(self, target: &str) -> String {
        format!("[{target}] {}{}", self.message, self.fields)
    }
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Install the console subscriber as the global default.
///
/// Returns `false` when a global subscriber was already set (a second widget
/// on the same page); the existing one keeps receiving events.
pub fn install(filter: LevelFilter) -> bool {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(BrowserConsole));
    tracing::subscriber::set_global_default(subscriber).is_ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::registry;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(ConsoleMethod, String)>>>);

    impl ConsoleSink for Captured {
        fn write_line(&self, method: ConsoleMethod, line: &str) {
            self.0
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push((method, line.to_string()));
        }
    }

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn events_are_formatted_with_target_and_fields() {
        let captured = Captured::default();
        let subscriber = registry().with(ConsoleLayer::new(captured.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "ayah", ayah = 255, error = %"http error status 500", "error fetching verse");
            tracing::info!(target: "ayah", "plain");
        });
        let lines = captured.0.lock().unwrap().clone();
        assert_eq!(
            lines,
            vec![
                (
                    ConsoleMethod::Warn,
                    "[ayah] error fetching verse ayah=255 error=http error status 500".to_string()
                ),
                (ConsoleMethod::Log, "[ayah] plain".to_string()),
            ]
        );
    }

    #[test]
    fn level_filter_drops_quieter_events() {
        let captured = Captured::default();
        let subscriber = registry()
            .with(LevelFilter::WARN)
            .with(ConsoleLayer::new(captured.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("dropped");
            tracing::error!("kept");
        });
        let lines = captured.0.lock().unwrap().clone();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, ConsoleMethod::Error);
    }
}
