//! Presence poller
//!
//! Keeps a best-effort snapshot of one user's presence. A poll either replaces the
//! snapshot or, on any failure, leaves it exactly as it was.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, trace};

use pulse_core::{PresenceSnapshot, PresenceSource, SourceResult};

use super::context::ServiceContext;

/// Result of a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A well-formed report replaced the snapshot
    Updated,
    /// The poll failed; the snapshot is untouched
    Unchanged,
}

/// Presence poller for a single user
///
/// Not `Clone`: the poller is the only writer of its snapshot channel, and
/// [`start`](Self::start) hands it to the poll task.
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<pulse_service::PresencePoller>();
/// ```
pub struct PresencePoller {
    source: Arc<dyn PresenceSource>,
    user_id: String,
    interval: Duration,
    state: watch::Sender<PresenceSnapshot>,
    token: CancellationToken,
}

impl PresencePoller {
    /// Create an unstarted poller; the snapshot starts offline
    pub fn new(ctx: &ServiceContext, user_id: impl Into<String>) -> Self {
        let (state, _) = watch::channel(PresenceSnapshot::default());

        Self {
            source: Arc::clone(ctx.presence_source()),
            user_id: user_id.into(),
            interval: ctx.poll_interval(),
            state,
            token: CancellationToken::new(),
        }
    }

    /// Receive snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<PresenceSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> PresenceSnapshot {
        self.state.borrow().clone()
    }

    /// Poll once and apply the result
    #[instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn poll_once(&self) -> PollOutcome {
        let result = self.fetch().await;
        self.apply(result)
    }

    async fn fetch(&self) -> SourceResult<PresenceSnapshot> {
        self.source.fetch_presence(&self.user_id).await
    }

    /// Receivers are only woken when the snapshot actually differs
    ///
    /// The stop check runs under the channel lock, so nothing is written once
    /// [`PresenceHandle::stop`] has returned.
    fn apply(&self, result: SourceResult<PresenceSnapshot>) -> PollOutcome {
        match result {
            Ok(snapshot) => {
                trace!(status = %snapshot.status, "Presence polled");
                let mut stopped = false;
                self.state.send_if_modified(|current| {
                    if self.token.is_cancelled() {
                        stopped = true;
                        return false;
                    }
                    if *current == snapshot {
                        false
                    } else {
                        *current = snapshot;
                        true
                    }
                });
                if stopped {
                    PollOutcome::Unchanged
                } else {
                    PollOutcome::Updated
                }
            }
            Err(e) => {
                debug!(error = %e, code = e.code(), "Presence poll failed, keeping snapshot");
                PollOutcome::Unchanged
            }
        }
    }

    /// Poll now and then on every interval tick until the handle is stopped or dropped
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(self) -> PresenceHandle {
        let token = self.token.clone();
        let state = self.subscribe();
        let task = tokio::spawn(self.run());

        info!("Presence poller started");

        PresenceHandle {
            token,
            task: Some(task),
            state,
        }
    }

    async fn run(self) {
        let token = self.token.clone();
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                biased;
                () = token.cancelled() => break,
                result = self.fetch() => result,
            };

            if token.is_cancelled() {
                break;
            }
            self.apply(result);
        }

        debug!("Presence poll loop ended");
    }
}

impl std::fmt::Debug for PresencePoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresencePoller")
            .field("user_id", &self.user_id)
            .field("interval", &self.interval)
            .finish()
    }
}

/// Running poller
///
/// Stopping, or dropping the handle, cancels the timer and any in-flight request.
#[derive(Debug)]
pub struct PresenceHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
    state: watch::Receiver<PresenceSnapshot>,
}

impl PresenceHandle {
    /// Receive snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<PresenceSnapshot> {
        self.state.clone()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> PresenceSnapshot {
        self.state.borrow().clone()
    }

    /// Whether the poll loop is still running
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop polling; no snapshot is published afterwards
    pub fn stop(&mut self) {
        self.token.cancel();
        // A read waits for any write already holding the channel lock
        drop(self.state.borrow());
        if let Some(task) = self.task.take() {
            task.abort();
            info!("Presence poller stopped");
        }
    }
}

impl Drop for PresenceHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
