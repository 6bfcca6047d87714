//! Outcomes of the mutating action primitives

use std::fmt;

use serde::Serialize;

use super::target::DeploymentTarget;

/// What an action primitive ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    Compiled,
    DependenciesInstalled,
    DependencyInstallSkipped,
    Installed,
    AlreadyInstalled,
    Instantiated,
    Upgraded,
    AlreadyInstantiated,
}

impl ActionOutcome {
    /// True when the primitive changed something on a peer or on disk
    pub fn is_change(&self) -> bool {
        !matches!(
            self,
            ActionOutcome::DependencyInstallSkipped
                | ActionOutcome::AlreadyInstalled
                | ActionOutcome::AlreadyInstantiated
        )
    }
}

/// Outcome of one task, with enough context to render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    pub outcome: ActionOutcome,
    pub target: DeploymentTarget,
    /// Version that was active on the channel before an upgrade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<String>,
    /// Nothing was executed; the outcome is what a real run would do
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}

impl TaskReport {
    pub fn new(outcome: ActionOutcome, target: &DeploymentTarget) -> Self {
        Self {
            outcome,
            target: target.clone(),
            previous_version: None,
            dry_run: false,
        }
    }

    pub fn with_previous_version(mut self, version: Option<String>) -> Self {
        self.previous_version = version;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl fmt::Display for TaskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.target.info();
        let peer = &self.target.peer;
        let with_policy = match &self.target.policy {
            Some(policy) => format!("{info} with policy {policy}"),
            None => info.clone(),
        };
        match (self.outcome, self.dry_run) {
            (ActionOutcome::Compiled, false) => write!(f, "Compiled {info}"),
            (ActionOutcome::Compiled, true) => write!(f, "Would compile {info}"),
            (ActionOutcome::DependenciesInstalled, false) => write!(f, "Installed NPM for {info}"),
            (ActionOutcome::DependenciesInstalled, true) => {
                write!(f, "Would install NPM for {info}")
            }
            (ActionOutcome::DependencyInstallSkipped, _) => {
                write!(f, "Skipped NPM install for {info}")
            }
            (ActionOutcome::Installed, false) => write!(f, "Installed {info} on {peer}"),
            (ActionOutcome::Installed, true) => write!(f, "Would install {info} on {peer}"),
            (ActionOutcome::AlreadyInstalled, _) => {
                write!(f, "{info} is already installed on {peer}")
            }
            (ActionOutcome::Instantiated, false) => {
                write!(f, "Instantiated {with_policy} on {peer}")
            }
            (ActionOutcome::Instantiated, true) => {
                write!(f, "Would instantiate {with_policy} on {peer}")
            }
            (ActionOutcome::Upgraded, dry_run) => {
                let verb = if dry_run { "Would upgrade" } else { "Upgraded" };
                write!(f, "{verb} {with_policy} on {peer}")?;
                match &self.previous_version {
                    Some(previous) => write!(f, " (was {previous})"),
                    None => Ok(()),
                }
            }
            (ActionOutcome::AlreadyInstantiated, _) => {
                write!(f, "{info} is already instantiated on {peer}")
            }
        }
    }
}
