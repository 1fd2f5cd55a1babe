// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered clipboard strategies.
//!
//! Each strategy reports whether it exists in the current environment and
//! returns a `Result` from its write; the chain walks them in order and stops
//! at the first success.

use futures_util::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::error::{ClipboardAttempt, ClipboardError};
use crate::ports::VerseView;

/// One way of writing text to the system clipboard.
pub trait ClipboardStrategy {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
    /// Capability probe; unavailable strategies are skipped without a write.
    fn is_available(&self) -> bool;
    /// Write `text`.
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>>;
}

/// Which strategy performed a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReceipt {
    /// Name of the strategy that succeeded.
    pub strategy: &'static str,
    /// Strategies tried (and failed or skipped) before it.
    pub fallbacks: Vec<ClipboardAttempt>,
}

/// Strategies tried in insertion order.
#[derive(Default)]
pub struct ClipboardChain {
    strategies: Vec<Box<dyn ClipboardStrategy>>,
}

impl ClipboardChain {
    /// Empty chain; every copy fails with [`ClipboardError::Exhausted`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy (builder form).
    #[must_use]
    pub fn with(mut self, strategy: impl ClipboardStrategy + 'static) -> Self {
        self.push(strategy);
        self
    }

    /// Append a strategy.
    pub fn push(&mut self, strategy: impl ClipboardStrategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }

    /// Strategy names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Copy `text` with the first strategy that is available and succeeds.
    pub async fn copy(&self, text: &str) -> Result<CopyReceipt, ClipboardError> {
        let mut attempts = Vec::new();
        for strategy in &self.strategies {
            let name = strategy.name();
            if !strategy.is_available() {
                debug!(strategy = name, "clipboard strategy unavailable");
                attempts.push(ClipboardAttempt {
                    strategy: name,
                    reason: ClipboardError::Unavailable.to_string(),
                });
                continue;
            }
            match strategy.write_text(text).await {
                Ok(()) => {
                    debug!(strategy = name, fallbacks = attempts.len(), "copied verse");
                    return Ok(CopyReceipt {
                        strategy: name,
                        fallbacks: attempts,
                    });
                }
                Err(err) => {
                    warn!(strategy = name, error = %err, "error copying to clipboard");
                    attempts.push(ClipboardAttempt {
                        strategy: name,
                        reason: err.to_string(),
                    });
                }
            }
        }
        Err(ClipboardError::Exhausted(attempts))
    }
}

/// Copy whatever the verse region currently shows.
pub async fn copy_current_verse<V>(
    view: &V,
    chain: &ClipboardChain,
) -> Result<CopyReceipt, ClipboardError>
where
    V: VerseView + ?Sized,
{
    let text = view.current_text();
    chain.copy(&text).await
}
