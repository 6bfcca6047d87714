//! Reconcile result types

use crate::domain::entities::{ActionPlan, Stage, TaskReport};

/// Reports of one executed batch, in completion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub reports: Vec<TaskReport>,
}

impl StageReport {
    pub fn changed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_change()).count()
    }

    pub fn unchanged(&self) -> usize {
        self.reports.len() - self.changed()
    }
}

/// Result of a successful reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileResult {
    /// Manifest entries read
    pub chaincodes: usize,
    /// The plan that was executed
    pub plan: ActionPlan,
    /// One entry per stage, in execution order
    pub stages: Vec<StageReport>,
}

impl ReconcileResult {
    pub fn changed(&self) -> usize {
        self.stages.iter().map(StageReport::changed).sum()
    }

    pub fn unchanged(&self) -> usize {
        self.stages.iter().map(StageReport::unchanged).sum()
    }

    /// Reports of one stage (empty if it did not run)
    pub fn stage(&self, stage: Stage) -> &[TaskReport] {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.reports.as_slice())
            .unwrap_or(&[])
    }
}
