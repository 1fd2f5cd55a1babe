// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted [`VerseSource`] fake.

use ayah_core::{FetchError, HttpReply, VerseSource};
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type ReplyResult = Result<HttpReply, FetchError>;

enum Scripted {
    Ready(ReplyResult),
    Pending(oneshot::Receiver<ReplyResult>),
}

#[derive(Default)]
struct SourceInner {
    script: VecDeque<Scripted>,
    requests: Vec<String>,
}

/// Verse source that answers requests from a queue of scripted replies.
///
/// Requests are recorded when `fetch` is called, before the reply resolves.
/// When the queue runs dry the fetch fails with a transport error.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    inner: Arc<Mutex<SourceInner>>,
}

/// Sender half of a deferred reply created by [`ScriptedSource::push_pending`].
pub struct PendingReply {
    tx: oneshot::Sender<ReplyResult>,
}

impl PendingReply {
    /// Resolve the outstanding fetch with `reply`.
    pub fn resolve(self, reply: HttpReply) {
        let _ = self.tx.send(Ok(reply));
    }

    /// Fail the outstanding fetch with `err`.
    pub fn fail(self, err: FetchError) {
        let _ = self.tx.send(Err(err));
    }
}

impl ScriptedSource {
    /// Create a source with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 reply with `body`.
    pub fn push_ok(&self, body: impl Into<String>) -> &Self {
        self.push_reply(HttpReply::ok(body))
    }

    /// Queue a reply with an explicit status.
    pub fn push_status(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push_reply(HttpReply {
            status,
            body: body.into(),
        })
    }

    /// Queue an arbitrary reply.
    pub fn push_reply(&self, reply: HttpReply) -> &Self {
        self.push(Scripted::Ready(Ok(reply)));
        self
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, err: FetchError) -> &Self {
        self.push(Scripted::Ready(Err(err)));
        self
    }

    /// Queue a reply the test resolves later through the returned handle.
    pub fn push_pending(&self) -> PendingReply {
        let (tx, rx) = oneshot::channel();
        self.push(Scripted::Pending(rx));
        PendingReply { tx }
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .clone()
    }

    fn push(&self, scripted: Scripted) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .script
            .push_back(scripted);
    }
}

impl VerseSource for ScriptedSource {
    fn fetch(&self, url: String) -> LocalBoxFuture<'_, Result<HttpReply, FetchError>> {
        let next = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.requests.push(url);
            inner.script.pop_front()
        };
        async move {
            match next {
                Some(Scripted::Ready(result)) => result,
                Some(Scripted::Pending(rx)) => rx.await.unwrap_or_else(|_| {
                    Err(FetchError::Transport("pending reply dropped".into()))
                }),
                None => Err(FetchError::Transport("no scripted reply".into())),
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_script_order_and_records_urls() {
        let source = ScriptedSource::new();
        source.push_ok("a").push_status(404, "");
        assert_eq!(source.fetch("u1".into()).await, Ok(HttpReply::ok("a")));
        assert_eq!(source.fetch("u2".into()).await.map(|r| r.status), Ok(404));
        assert!(matches!(
            source.fetch("u3".into()).await,
            Err(FetchError::Transport(_))
        ));
        assert_eq!(source.requests(), vec!["u1", "u2", "u3"]);
    }

    #[tokio::test]
    async fn pending_reply_resolves_later() {
        let source = ScriptedSource::new();
        let pending = source.push_pending();
        let fetch = source.fetch("u".into());
        pending.resolve(HttpReply::ok("late"));
        assert_eq!(fetch.await, Ok(HttpReply::ok("late")));
    }

    #[tokio::test]
    async fn dropped_pending_reply_is_a_transport_error() {
        let source = ScriptedSource::new();
        drop(source.push_pending());
        assert!(matches!(
            source.fetch("u".into()).await,
            Err(FetchError::Transport(_))
        ));
    }
}
