//! Action plan - the three batches a reconciliation run executes in order

use std::fmt;

use serde::Serialize;

use super::target::DeploymentTarget;

/// Execution stage; stages run strictly one after another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Compile,
    Install,
    Instantiate,
}

impl Stage {
    /// All stages in execution order
    pub const ORDER: [Stage; 3] = [Stage::Compile, Stage::Install, Stage::Instantiate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Compile => "compile",
            Stage::Install => "install",
            Stage::Instantiate => "instantiate",
        }
    }

    /// Progress label ("COMPILING", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Compile => "COMPILING",
            Stage::Install => "INSTALLING",
            Stage::Instantiate => "INSTANTIATING",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of planning a reconciliation
///
/// - `compile`: at most one target per chaincode path
/// - `install`: exactly one target per (chaincode, peer)
/// - `instantiate`: at most one target per (chaincode, channel), the initiating peer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionPlan {
    pub compile: Vec<DeploymentTarget>,
    pub install: Vec<DeploymentTarget>,
    pub instantiate: Vec<DeploymentTarget>,
}

impl ActionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets of one stage
    pub fn batch(&self, stage: Stage) -> &[DeploymentTarget] {
        match stage {
            Stage::Compile => &self.compile,
            Stage::Install => &self.install,
            Stage::Instantiate => &self.instantiate,
        }
    }

    /// Total number of scheduled tasks
    pub fn total_tasks(&self) -> usize {
        self.compile.len() + self.install.len() + self.instantiate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_tasks() == 0
    }
}
