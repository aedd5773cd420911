//! The "Casey is thinking" pause between submitting a query and showing results
//!
//! Results are computed synchronously; the pause only drives the processing
//! indicator. Each run carries a `Ticket` so a completion that arrives after
//! the run was cancelled or superseded can be recognised and dropped.

use crate::core::config::CaseyConfig;
use derive_more::Display;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};

/// Identifier of one processing run
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

/// Why processing was started; decides the length of the pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingKind {
    /// Query typed into the search line
    Submit,
    /// Chip, frequent action or quick button
    QuickAction,
}

impl ProcessingKind {
    pub fn delay(self, config: &CaseyConfig) -> Duration {
        match self {
            ProcessingKind::Submit => config.submit_delay(),
            ProcessingKind::QuickAction => config.quick_action_delay(),
        }
    }
}

/// How a processing run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Completed(Ticket),
    Cancelled(Ticket),
}

/// A running pause on the tokio runtime
#[derive(Debug)]
pub struct ProcessingTask {
    ticket: Ticket,
    handle: JoinHandle<()>,
}

impl ProcessingTask {
    /// Start the pause; must be called from within a tokio runtime
    pub fn spawn(ticket: Ticket, delay: Duration) -> Self {
        tracing::debug!("Processing ticket {} for {:?}", ticket, delay);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
        });
        Self { ticket, handle }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Handle that cancels this run from elsewhere (e.g. a Ctrl-C watcher)
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for the pause to elapse or be cancelled
    pub async fn wait(self) -> ProcessingOutcome {
        match self.handle.await {
            Ok(()) => ProcessingOutcome::Completed(self.ticket),
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::warn!("Processing ticket {} failed: {}", self.ticket, e);
                }
                ProcessingOutcome::Cancelled(self.ticket)
            }
        }
    }
}
