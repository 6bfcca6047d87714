//! In-memory peer network and builder used by unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::entities::{DeploymentTarget, InventoryRecord};
use crate::domain::ports::{BuildError, ChaincodeBuilder, GatewayError, PeerGateway};
use crate::domain::value_objects::{Listing, Verb};

#[derive(Default)]
pub struct FakePeers {
    installed: Mutex<HashMap<String, Vec<InventoryRecord>>>,
    instantiated: Mutex<HashMap<String, Vec<InventoryRecord>>>,
    unreachable: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<(String, Verb)>>,
    pub invocations: Mutex<Vec<(Verb, String, String)>>,
    /// When each install invocation began
    pub install_starts: Mutex<Vec<Instant>>,
}

impl FakePeers {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(target: &DeploymentTarget) -> InventoryRecord {
        InventoryRecord::new(&target.name, &target.version, &target.path)
    }

    pub fn install(&self, target: &DeploymentTarget) {
        self.installed
            .lock()
            .unwrap()
            .entry(target.peer.clone())
            .or_default()
            .push(Self::record(target));
    }

    pub fn instantiate(&self, target: &DeploymentTarget) {
        let mut channels = self.instantiated.lock().unwrap();
        let records = channels.entry(target.channel.clone()).or_default();
        records.retain(|r| r.name != target.name);
        records.push(Self::record(target));
    }

    pub fn make_unreachable(&self, peer: &str) {
        self.unreachable.lock().unwrap().insert(peer.to_string());
    }

    pub fn fail_on(&self, peer: &str, verb: Verb) {
        self.failing.lock().unwrap().insert((peer.to_string(), verb));
    }

    pub fn verbs(&self) -> Vec<Verb> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|(verb, _, _)| *verb)
            .collect()
    }
}

impl PeerGateway for FakePeers {
    fn query_inventory(
        &self,
        target: &DeploymentTarget,
        listing: Listing,
    ) -> Result<Vec<InventoryRecord>, GatewayError> {
        if self.unreachable.lock().unwrap().contains(&target.peer) {
            return Err(GatewayError::Unreachable(target.peer.clone()));
        }
        let records = match listing {
            Listing::Installed => self.installed.lock().unwrap().get(&target.peer).cloned(),
            Listing::Instantiated => self
                .instantiated
                .lock()
                .unwrap()
                .get(&target.channel)
                .cloned(),
        };
        Ok(records.unwrap_or_default())
    }

    fn invoke(&self, target: &DeploymentTarget, verb: Verb) -> Result<(), GatewayError> {
        if verb == Verb::Install {
            self.install_starts.lock().unwrap().push(Instant::now());
        }
        self.invocations.lock().unwrap().push((
            verb,
            target.peer.clone(),
            target.channel.clone(),
        ));
        if self
            .failing
            .lock()
            .unwrap()
            .contains(&(target.peer.clone(), verb))
        {
            return Err(GatewayError::CommandFailed {
                command: format!("peer chaincode {verb}"),
                stderr: "endorsement failure".to_string(),
            });
        }
        match verb {
            Verb::Install => self.install(target),
            Verb::Instantiate | Verb::Upgrade => self.instantiate(target),
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeBuilder {
    pub with_dependencies: Mutex<HashSet<String>>,
    pub compiled: Mutex<Vec<String>>,
    pub npm_installs: Mutex<Vec<String>>,
    pub fail: bool,
    /// Time each compile takes
    pub delay: Duration,
    /// Start and end of every compile
    pub compile_spans: Mutex<Vec<(Instant, Instant)>>,
}

impl ChaincodeBuilder for FakeBuilder {
    fn compile(&self, target: &DeploymentTarget) -> Result<(), BuildError> {
        let started = Instant::now();
        std::thread::sleep(self.delay);
        self.compile_spans
            .lock()
            .unwrap()
            .push((started, Instant::now()));
        if self.fail {
            return Err(BuildError::Failed {
                command: "compile_chaincode.sh".to_string(),
                status: "exit status: 2".to_string(),
                stderr: "syntax error".to_string(),
            });
        }
        self.compiled.lock().unwrap().push(target.path.clone());
        Ok(())
    }

    fn install_dependencies(&self, target: &DeploymentTarget) -> Result<(), BuildError> {
        self.npm_installs.lock().unwrap().push(target.path.clone());
        self.with_dependencies
            .lock()
            .unwrap()
            .insert(target.path.clone());
        Ok(())
    }

    fn has_dependencies(&self, target: &DeploymentTarget) -> bool {
        self.with_dependencies.lock().unwrap().contains(&target.path)
    }
}
