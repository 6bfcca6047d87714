//! Mutating action primitives
//!
//! Compile, install and instantiate/upgrade. Each primitive re-checks deployed
//! state immediately before acting and turns into a no-op when the peer already
//! matches, so running a batch twice is harmless.

use crate::domain::entities::{ActionOutcome, DeploymentTarget, Stage, TaskReport};
use crate::domain::ports::{ChaincodeBuilder, PeerGateway};
use crate::domain::value_objects::{Language, Verb};
use crate::error::{CcsyncError, CcsyncResult};

use super::prober::StateProber;

/// The three primitives, bound to one gateway and one builder
#[derive(Clone, Copy)]
pub struct ActionPrimitives<'a> {
    gateway: &'a dyn PeerGateway,
    builder: &'a dyn ChaincodeBuilder,
    force_dependency_install: bool,
    dry_run: bool,
}

impl<'a> ActionPrimitives<'a> {
    pub fn new(gateway: &'a dyn PeerGateway, builder: &'a dyn ChaincodeBuilder) -> Self {
        Self {
            gateway,
            builder,
            force_dependency_install: false,
            dry_run: false,
        }
    }

    /// Reinstall node dependencies even when they are already present
    pub fn with_force_dependency_install(mut self, force: bool) -> Self {
        self.force_dependency_install = force;
        self
    }

    /// Mark reports as previews; the gateway and builder are expected to skip execution
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn report(&self, outcome: ActionOutcome, target: &DeploymentTarget) -> TaskReport {
        TaskReport::new(outcome, target).with_dry_run(self.dry_run)
    }

    fn prober(&self) -> StateProber<'a> {
        StateProber::new(self.gateway)
    }

    /// Dispatch to the primitive of `stage`
    pub fn run(&self, stage: Stage, target: &DeploymentTarget) -> CcsyncResult<TaskReport> {
        match stage {
            Stage::Compile => self.compile(target),
            Stage::Install => self.install(target),
            Stage::Instantiate => self.instantiate_or_upgrade(target),
        }
    }

    /// Build the target's artifact.
    ///
    /// Golang sources are compiled. Node sources get their dependencies installed,
    /// unless a previous install is present and no reinstall was forced.
    pub fn compile(&self, target: &DeploymentTarget) -> CcsyncResult<TaskReport> {
        let outcome = match target.language {
            Language::Golang => {
                self.builder
                    .compile(target)
                    .map_err(|e| CcsyncError::action("compile", target.info(), e))?;
                ActionOutcome::Compiled
            }
            Language::Node => {
                if self.force_dependency_install || !self.builder.has_dependencies(target) {
                    self.builder
                        .install_dependencies(target)
                        .map_err(|e| CcsyncError::action("npm install", target.info(), e))?;
                    ActionOutcome::DependenciesInstalled
                } else {
                    ActionOutcome::DependencyInstallSkipped
                }
            }
        };
        Ok(self.report(outcome, target))
    }

    /// Install the target on its peer unless that exact version is already there
    pub fn install(&self, target: &DeploymentTarget) -> CcsyncResult<TaskReport> {
        if self.prober().is_installed(target)? {
            return Ok(self.report(ActionOutcome::AlreadyInstalled, target));
        }

        self.invoke(target, Verb::Install)?;
        Ok(self.report(ActionOutcome::Installed, target))
    }

    /// Activate the target's version on its channel.
    ///
    /// No-op when already active. Upgrades when any other version is active,
    /// instantiates otherwise; the two are not interchangeable on the peer.
    pub fn instantiate_or_upgrade(&self, target: &DeploymentTarget) -> CcsyncResult<TaskReport> {
        let state = self.prober().probe_state(target)?;
        if state.instantiated {
            return Ok(self.report(ActionOutcome::AlreadyInstantiated, target));
        }

        match state.deployed_version {
            Some(previous) => {
                self.invoke(target, Verb::Upgrade)?;
                Ok(self
                    .report(ActionOutcome::Upgraded, target)
                    .with_previous_version(Some(previous)))
            }
            None => {
                self.invoke(target, Verb::Instantiate)?;
                Ok(self.report(ActionOutcome::Instantiated, target))
            }
        }
    }

    fn invoke(&self, target: &DeploymentTarget, verb: Verb) -> CcsyncResult<()> {
        tracing::info!(
            chaincode = %target.name,
            peer = %target.peer,
            channel = %target.channel,
            %verb,
            "invoking"
        );
        self.gateway.invoke(target, verb).map_err(|e| {
            let subject = format!("{} on {}", target.info(), target.peer);
            CcsyncError::action(verb.as_str(), subject, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::target::fixtures::target;
    use crate::domain::services::testing::{FakeBuilder, FakePeers};
    use crate::error::ErrorKind;

    fn node_target() -> DeploymentTarget {
        let mut t = target("wallet", "1.0", "ch1", "peer0");
        t.language = Language::Node;
        t.path = "/go/src/build/wallet".to_string();
        t
    }

    #[test]
    fn golang_compiles() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);

        let report = actions.compile(&target("cc1", "1.0", "ch1", "peer0")).unwrap();

        assert_eq!(report.outcome, ActionOutcome::Compiled);
        assert_eq!(*builder.compiled.lock().unwrap(), ["chaincodes/cc1"]);
    }

    #[test]
    fn node_dependency_install_skipped_when_present() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);
        let t = node_target();

        assert_eq!(
            actions.compile(&t).unwrap().outcome,
            ActionOutcome::DependenciesInstalled
        );
        assert_eq!(
            actions.compile(&t).unwrap().outcome,
            ActionOutcome::DependencyInstallSkipped
        );
        assert_eq!(builder.npm_installs.lock().unwrap().len(), 1);
    }

    #[test]
    fn forced_dependency_install_always_runs() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder).with_force_dependency_install(true);
        let t = node_target();

        actions.compile(&t).unwrap();
        let report = actions.compile(&t).unwrap();

        assert_eq!(report.outcome, ActionOutcome::DependenciesInstalled);
        assert_eq!(builder.npm_installs.lock().unwrap().len(), 2);
    }

    #[test]
    fn build_failure_is_an_action_error() {
        let peers = FakePeers::new();
        let builder = FakeBuilder {
            fail: true,
            ..FakeBuilder::default()
        };
        let actions = ActionPrimitives::new(&peers, &builder);

        let err = actions.compile(&target("cc1", "1.0", "ch1", "peer0")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Action);
        assert!(err.to_string().starts_with("compile failed for chaincode cc1"));
    }

    #[test]
    fn install_is_idempotent() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);
        let t = target("cc1", "1.0", "ch1", "peer0");

        assert_eq!(actions.install(&t).unwrap().outcome, ActionOutcome::Installed);
        assert_eq!(
            actions.install(&t).unwrap().outcome,
            ActionOutcome::AlreadyInstalled
        );
        assert_eq!(peers.verbs(), [Verb::Install]);
    }

    #[test]
    fn install_failure_is_not_retried() {
        let peers = FakePeers::new();
        peers.fail_on("peer0", Verb::Install);
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);

        let err = actions
            .install(&target("cc1", "1.0", "ch1", "peer0"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Action);
        assert_eq!(peers.verbs(), [Verb::Install]);
    }

    #[test]
    fn fresh_channel_gets_instantiate() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);

        let report = actions
            .instantiate_or_upgrade(&target("cc1", "1.0", "ch1", "peer1"))
            .unwrap();

        assert_eq!(report.outcome, ActionOutcome::Instantiated);
        assert_eq!(peers.verbs(), [Verb::Instantiate]);
    }

    #[test]
    fn other_active_version_gets_upgrade() {
        let peers = FakePeers::new();
        peers.instantiate(&target("cc1", "1.0", "ch1", "peer1"));
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);

        let report = actions
            .instantiate_or_upgrade(&target("cc1", "2.0", "ch1", "peer1"))
            .unwrap();

        assert_eq!(report.outcome, ActionOutcome::Upgraded);
        assert_eq!(report.previous_version.as_deref(), Some("1.0"));
        assert_eq!(peers.verbs(), [Verb::Upgrade]);
    }

    #[test]
    fn active_version_is_left_alone() {
        let peers = FakePeers::new();
        let t = target("cc1", "1.0", "ch1", "peer1");
        peers.instantiate(&t);
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);

        let report = actions.instantiate_or_upgrade(&t).unwrap();

        assert_eq!(report.outcome, ActionOutcome::AlreadyInstantiated);
        assert!(peers.verbs().is_empty());
    }

    #[test]
    fn dry_run_reports_are_previews() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder).with_dry_run(true);
        let t = target("cc1", "1.0", "ch1", "peer0");

        let report = actions.install(&t).unwrap();

        assert!(report.dry_run);
        assert!(report.to_string().starts_with("Would install chaincode cc1"));
    }

    #[test]
    fn run_dispatches_by_stage() {
        let peers = FakePeers::new();
        let builder = FakeBuilder::default();
        let actions = ActionPrimitives::new(&peers, &builder);
        let t = target("cc1", "1.0", "ch1", "peer0");

        assert_eq!(
            actions.run(Stage::Compile, &t).unwrap().outcome,
            ActionOutcome::Compiled
        );
        assert_eq!(
            actions.run(Stage::Install, &t).unwrap().outcome,
            ActionOutcome::Installed
        );
        assert_eq!(
            actions.run(Stage::Instantiate, &t).unwrap().outcome,
            ActionOutcome::Instantiated
        );
    }
}
