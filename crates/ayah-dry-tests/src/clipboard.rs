// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fake system clipboard with a primary (async API) and a legacy
//! (temporary element + copy command) strategy writing to it.

use ayah_core::{ClipboardError, ClipboardStrategy};
use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ClipboardState {
    contents: Option<String>,
    live_elements: usize,
    created_elements: usize,
    writers: Vec<&'static str>,
}

/// Shared clipboard contents plus a count of temporary elements the legacy
/// strategy has attached to the fake document.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardState>>,
}

impl SystemClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard contents, if anything was written.
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// Names of the strategies that wrote successfully, oldest first.
    pub fn writers(&self) -> Vec<&'static str> {
        self.lock().writers.clone()
    }

    /// Temporary elements still attached to the fake document.
    pub fn live_temp_elements(&self) -> usize {
        self.lock().live_elements
    }

    /// Temporary elements ever created.
    pub fn created_temp_elements(&self) -> usize {
        self.lock().created_elements
    }

    /// Primary strategy backed by this clipboard (available, accepting).
    pub fn async_api(&self) -> FakeAsyncClipboard {
        FakeAsyncClipboard {
            system: self.clone(),
            mode: AsyncMode::Accepts,
        }
    }

    /// Legacy strategy backed by this clipboard (copy command succeeds).
    pub fn legacy(&self) -> FakeLegacyClipboard {
        FakeLegacyClipboard {
            system: self.clone(),
            command_succeeds: true,
        }
    }

    fn write(&self, writer: &'static str, text: &str) {
        let mut state = self.lock();
        state.contents = Some(text.to_string());
        state.writers.push(writer);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClipboardState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Clone)]
enum AsyncMode {
    Accepts,
    Missing,
    Rejects(String),
}

/// Stand-in for `navigator.clipboard.writeText`.
#[derive(Clone)]
pub struct FakeAsyncClipboard {
    system: SystemClipboard,
    mode: AsyncMode,
}

impl FakeAsyncClipboard {
    /// Report the API as missing (insecure context, old browser).
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.mode = AsyncMode::Missing;
        self
    }

    /// Expose the API but reject every write with `reason`.
    #[must_use]
    pub fn rejecting(mut self, reason: &str) -> Self {
        self.mode = AsyncMode::Rejects(reason.to_string());
        self
    }
}

impl ClipboardStrategy for FakeAsyncClipboard {
    fn name(&self) -> &'static str {
        "navigator.clipboard"
    }

    fn is_available(&self) -> bool {
        !matches!(self.mode, AsyncMode::Missing)
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
        let result = match &self.mode {
            AsyncMode::Accepts => {
                self.system.write(self.name(), text);
                Ok(())
            }
            AsyncMode::Missing => Err(ClipboardError::Unavailable),
            AsyncMode::Rejects(reason) => Err(ClipboardError::Rejected(reason.clone())),
        };
        ready(result).boxed_local()
    }
}

/// Stand-in for the off-screen textarea + `execCommand("copy")` fallback.
///
/// Every write attaches one temporary element and detaches it again on both
/// the success and the failure path.
#[derive(Clone)]
pub struct FakeLegacyClipboard {
    system: SystemClipboard,
    command_succeeds: bool,
}

impl FakeLegacyClipboard {
    /// Make the copy command report failure.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.command_succeeds = false;
        self
    }
}

impl ClipboardStrategy for FakeLegacyClipboard {
    fn name(&self) -> &'static str {
        "exec-command"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
        {
            let mut state = self.system.lock();
            state.live_elements += 1;
            state.created_elements += 1;
        }
        let result = if self.command_succeeds {
            self.system.write(self.name(), text);
            Ok(())
        } else {
            Err(ClipboardError::Rejected("copy command returned false".into()))
        };
        self.system.lock().live_elements -= 1;
        ready(result).boxed_local()
    }
}
