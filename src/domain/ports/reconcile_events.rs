//! Reconcile Event Port
//!
//! Provides an observable interface for reconciliation runs.
//! Enables progress reporting, JSON event streams, and dry-run previews.

use serde::Serialize;

use crate::domain::entities::{Stage, TaskReport};

/// Event emitted during a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReconcileEvent {
    /// Run started
    Started { manifest: String, dry_run: bool },

    /// Manifest read and expanded
    Loaded { chaincodes: usize, targets: usize },

    /// Plan computed
    Planned {
        compile: usize,
        install: usize,
        instantiate: usize,
    },

    /// A batch is about to run
    StageStarted { stage: Stage, tasks: usize },

    /// One task of the running batch finished (completion order)
    TaskFinished { stage: Stage, report: TaskReport },

    /// Every task of the batch finished
    StageFinished {
        stage: Stage,
        changed: usize,
        unchanged: usize,
    },

    /// Dry run: an external command that would have been executed
    CommandSkipped { command: String },

    /// Run completed successfully
    Completed { changed: usize, unchanged: usize },
}

/// Trait for receiving reconcile events
///
/// Implementations:
/// - console sink: human progress output
/// - JSON sink: NDJSON event stream for CI
/// - [`NoopEventSink`]: silent operation
///
/// Events may arrive from worker threads.
pub trait ReconcileEventSink: Send + Sync {
    fn on_event(&self, event: ReconcileEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ReconcileEventSink for NoopEventSink {
    fn on_event(&self, _event: ReconcileEvent) {}
}
