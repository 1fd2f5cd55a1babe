// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The verse fetch cycle: idle → loading → idle, one request per trigger.
//!
//! Overlapping triggers are resolved by a generation counter. Every trigger
//! takes a [`Ticket`]; only the newest ticket may write the display or return
//! the control to idle, so responses that resolve out of order never clobber a
//! newer verse.

use std::cell::{Cell, RefCell};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{ConcurrencyPolicy, WidgetConfig, WidgetStrings};
use crate::error::FetchError;
use crate::ports::{VerseSource, VerseView};
use crate::verse::{parse_reply, DisplayedVerse};

/// Generation handle for one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Monotonic generation, starting at 1.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Loading/idle state plus the generation counter.
#[derive(Debug, Default)]
pub struct FetchCycle {
    latest: Cell<u64>,
    loading: Cell<bool>,
}

impl FetchCycle {
    /// Fresh, idle cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cycle. Returns `None` when `policy` forbids overlapping cycles
    /// and one is outstanding.
    pub fn begin(&self, policy: ConcurrencyPolicy) -> Option<Ticket> {
        if policy == ConcurrencyPolicy::IgnoreWhileLoading && self.loading.get() {
            return None;
        }
        let next = self.latest.get() + 1;
        self.latest.set(next);
        self.loading.set(true);
        Some(Ticket(next))
    }

    /// Complete `ticket`. Returns `true` when it is the newest ticket, in which
    /// case the cycle is idle again; stale tickets change nothing.
    pub fn finish(&self, ticket: Ticket) -> bool {
        if ticket.0 != self.latest.get() {
            return false;
        }
        self.loading.set(false);
        true
    }

    /// Whether the newest cycle is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Generation of the newest ticket (0 before the first trigger).
    pub fn generation(&self) -> u64 {
        self.latest.get()
    }
}

/// How a call to [`RefreshController::refresh`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The verse was written to the display.
    Displayed(DisplayedVerse),
    /// The error message was displayed.
    Failed(FetchError),
    /// A newer cycle started before this one resolved; nothing was written.
    Superseded,
    /// The trigger was dropped because a cycle was outstanding.
    Ignored,
}

/// Runs fetch cycles against a [`VerseSource`] and renders them on a [`VerseView`].
pub struct RefreshController<S, V, R> {
    config: WidgetConfig,
    cycle: FetchCycle,
    source: S,
    view: V,
    rng: RefCell<R>,
}

impl<S, V, R> RefreshController<S, V, R>
where
    S: VerseSource,
    V: VerseView,
    R: Rng,
{
    /// Controller over `source` and `view`, drawing ayah numbers from `rng`.
    pub fn new(config: WidgetConfig, source: S, view: V, rng: R) -> Self {
        Self {
            config,
            cycle: FetchCycle::new(),
            source,
            view,
            rng: RefCell::new(rng),
        }
    }

    /// Run one cycle to completion.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(ticket) = self.cycle.begin(self.config.concurrency) else {
            debug!("refresh ignored: a fetch is already outstanding");
            return RefreshOutcome::Ignored;
        };
        let strings = &self.config.strings;
        self.view.set_loading(&strings.loading_label);

        let ayah = self.config.corpus().draw(&mut *self.rng.borrow_mut());
        let url = self.config.ayah_url(ayah);
        debug!(ayah = ayah.get(), generation = ticket.generation(), %url, "fetching ayah");

        let result = match self.source.fetch(url).await {
            Ok(reply) => parse_reply(&reply),
            Err(err) => Err(err),
        };

        if !self.cycle.finish(ticket) {
            info!(
                ayah = ayah.get(),
                generation = ticket.generation(),
                latest = self.cycle.generation(),
                ok = result.is_ok(),
                "discarding superseded ayah response"
            );
            return RefreshOutcome::Superseded;
        }

        let outcome = self.render(result, strings);
        if let RefreshOutcome::Failed(err) = &outcome {
            warn!(ayah = ayah.get(), error = %err, "error fetching verse");
        }
        self.view.set_idle(&strings.button_label);
        outcome
    }

    fn render(
        &self,
        result: Result<DisplayedVerse, FetchError>,
        strings: &WidgetStrings,
    ) -> RefreshOutcome {
        match result {
            Ok(verse) => {
                self.view.show_verse(&verse);
                RefreshOutcome::Displayed(verse)
            }
            Err(err) => {
                self.view.show_error(&strings.error_message);
                RefreshOutcome::Failed(err)
            }
        }
    }

    /// Whether a cycle is outstanding.
    pub fn is_loading(&self) -> bool {
        self.cycle.is_loading()
    }

    /// The view this controller renders to.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Active configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn latest_wins_issues_increasing_tickets() {
        let cycle = FetchCycle::new();
        assert!(!cycle.is_loading());
        let first = cycle.begin(ConcurrencyPolicy::LatestWins).unwrap();
        let second = cycle.begin(ConcurrencyPolicy::LatestWins).unwrap();
        assert_eq!((first.generation(), second.generation()), (1, 2));
        assert!(cycle.is_loading());

        assert!(!cycle.finish(first));
        assert!(cycle.is_loading());
        assert!(cycle.finish(second));
        assert!(!cycle.is_loading());
    }

    #[test]
    fn stale_ticket_after_newest_finished_stays_idle() {
        let cycle = FetchCycle::new();
        let first = cycle.begin(ConcurrencyPolicy::LatestWins).unwrap();
        let second = cycle.begin(ConcurrencyPolicy::LatestWins).unwrap();
        assert!(cycle.finish(second));
        assert!(!cycle.finish(first));
        assert!(!cycle.is_loading());
    }

    #[test]
    fn ignore_while_loading_rejects_overlap() {
        let cycle = FetchCycle::new();
        let ticket = cycle.begin(ConcurrencyPolicy::IgnoreWhileLoading).unwrap();
        assert_eq!(cycle.begin(ConcurrencyPolicy::IgnoreWhileLoading), None);
        assert_eq!(cycle.generation(), 1);
        assert!(cycle.finish(ticket));
        assert!(cycle.begin(ConcurrencyPolicy::IgnoreWhileLoading).is_some());
    }
}
