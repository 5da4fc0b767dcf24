//! Cancellable deferred events tied to an owner's lifetime

use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// How long the success banner stays up
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Sends one event after a delay. At most one send is pending: scheduling
/// again aborts the previous task, and dropping the owner aborts it too.
#[derive(Debug)]
pub struct DeferredEvent {
    tx: UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl DeferredEvent {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx, pending: None }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, delay: Duration, event: AppEvent) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app was torn down.
            let _ = tx.send(event);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DeferredEvent {
    fn drop(&mut self) {
        self.cancel();
    }
}
