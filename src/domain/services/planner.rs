//! Action planning service
//!
//! Splits the desired targets into the three batches of a run:
//!
//! - compile: first target of every chaincode path not yet installed somewhere
//! - install: every (chaincode, peer) once; the install primitive re-checks state
//! - instantiate: the last peer listed for each (chaincode, channel)
//!
//! Whether an instantiation becomes an upgrade is decided at execution time.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::domain::entities::{ActionPlan, DeploymentTarget};
use crate::error::CcsyncResult;

use super::prober::StateProber;

/// Computes an [`ActionPlan`] from desired targets and probed state
pub struct ActionPlanner<'a> {
    prober: StateProber<'a>,
}

impl<'a> ActionPlanner<'a> {
    pub fn new(prober: StateProber<'a>) -> Self {
        Self { prober }
    }

    /// Plan targets in manifest order. Fails on the first probe error.
    pub fn plan(&self, targets: &[DeploymentTarget]) -> CcsyncResult<ActionPlan> {
        let mut plan = ActionPlan::new();
        let mut compile_paths: HashSet<&str> = HashSet::new();
        let mut install_keys: HashSet<(&str, &str)> = HashSet::new();
        let mut initiators: IndexMap<(&str, &str), &DeploymentTarget> = IndexMap::new();

        for target in targets {
            let installed = self.prober.is_installed(target)?;
            if !installed && compile_paths.insert(target.path.as_str()) {
                tracing::debug!(path = %target.path, "scheduling compile");
                plan.compile.push(target.clone());
            }

            if install_keys.insert((target.name.as_str(), target.peer.as_str())) {
                plan.install.push(target.clone());
            }

            // Later peers of the same channel replace earlier ones; the key keeps
            // its first-seen position.
            initiators.insert((target.name.as_str(), target.channel.as_str()), target);
        }

        plan.instantiate = initiators.into_values().cloned().collect();

        tracing::info!(
            compile = plan.compile.len(),
            install = plan.install.len(),
            instantiate = plan.instantiate.len(),
            "plan ready"
        );
        Ok(plan)
    }
}
