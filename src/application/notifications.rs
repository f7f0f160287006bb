//! Transient notifications: a message slot that clears itself after a delay.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    notice: Option<Notice>,
}

/// Holds at most one notice and resets it `ttl` after it was shown.
///
/// Showing a new notice cancels the pending reset of the previous one. Outside
/// a tokio runtime the notice simply stays until replaced or dismissed.
#[derive(Debug)]
pub struct TransientNotice {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
    timer: Option<JoinHandle<()>>,
}

impl TransientNotice {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
            timer: None,
        }
    }

    pub fn show(&mut self, notice: Notice) {
        self.cancel_timer();

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.notice = Some(notice);
            slot.generation
        };

        let Ok(handle) = Handle::try_current() else {
            debug!("no runtime available; notice will not auto-dismiss");
            return;
        };

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.notice = None;
            }
        }));
    }

    pub fn current(&self) -> Option<Notice> {
        lock(&self.slot).notice.clone()
    }

    pub fn dismiss(&mut self) {
        self.cancel_timer();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.notice = None;
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for TransientNotice {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
