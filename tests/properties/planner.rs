//! Property tests for action planning.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use ccsync::domain::entities::{DeploymentTarget, InventoryRecord, OrdererEndpoint};
use ccsync::domain::ports::{GatewayError, PeerGateway};
use ccsync::domain::services::{ActionPlanner, StateProber};
use ccsync::domain::value_objects::{Language, Listing, Verb};

/// Peers where every chaincode in `installed` is present at version 1.0
struct StaticPeers {
    installed: HashSet<String>,
}

impl PeerGateway for StaticPeers {
    fn query_inventory(
        &self,
        target: &DeploymentTarget,
        listing: Listing,
    ) -> Result<Vec<InventoryRecord>, GatewayError> {
        match listing {
            Listing::Installed if self.installed.contains(&target.name) => Ok(vec![
                InventoryRecord::new(&target.name, "1.0", &target.path),
            ]),
            _ => Ok(Vec::new()),
        }
    }

    fn invoke(&self, _target: &DeploymentTarget, _verb: Verb) -> Result<(), GatewayError> {
        Ok(())
    }
}

fn target(chaincode: usize, channel: usize, peer: usize) -> DeploymentTarget {
    DeploymentTarget {
        name: format!("cc{chaincode}"),
        version: "1.0".to_string(),
        path: format!("chaincodes/cc{chaincode}"),
        language: Language::Golang,
        channel: format!("ch{channel}"),
        peer: format!("peer{peer}"),
        policy: None,
        instantiate_args: Vec::new(),
        orderer: OrdererEndpoint {
            host: "orderer0".to_string(),
            port: 7050,
            org: "ordererOrg".to_string(),
        },
    }
}

fn targets() -> impl Strategy<Value = Vec<DeploymentTarget>> {
    proptest::collection::vec((0..4usize, 0..3usize, 0..5usize), 0..24).prop_map(|triples| {
        triples
            .into_iter()
            .map(|(cc, ch, peer)| target(cc, ch, peer))
            .collect()
    })
}

fn installed_set() -> impl Strategy<Value = HashSet<String>> {
    proptest::collection::hash_set((0..4usize).prop_map(|cc| format!("cc{cc}")), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a chaincode path is compiled at most once, and only when missing somewhere.
    #[test]
    fn property_compile_is_deduplicated_per_path(
        targets in targets(),
        installed in installed_set(),
    ) {
        let peers = StaticPeers { installed: installed.clone() };
        let plan = ActionPlanner::new(StateProber::new(&peers)).plan(&targets).unwrap();

        let mut paths = HashSet::new();
        for t in &plan.compile {
            prop_assert!(paths.insert(t.path.clone()), "{} compiled twice", t.path);
            prop_assert!(!installed.contains(&t.name));
        }
        for t in &targets {
            if !installed.contains(&t.name) {
                prop_assert!(paths.contains(&t.path));
            }
        }
    }

    /// PROPERTY: every (chaincode, peer) is installed exactly once.
    #[test]
    fn property_install_once_per_chaincode_and_peer(targets in targets()) {
        let peers = StaticPeers { installed: HashSet::new() };
        let plan = ActionPlanner::new(StateProber::new(&peers)).plan(&targets).unwrap();

        let planned: Vec<(String, String)> = plan
            .install
            .iter()
            .map(|t| (t.name.clone(), t.peer.clone()))
            .collect();
        let unique: HashSet<_> = planned.iter().cloned().collect();
        let wanted: HashSet<_> = targets
            .iter()
            .map(|t| (t.name.clone(), t.peer.clone()))
            .collect();
        prop_assert_eq!(planned.len(), unique.len());
        prop_assert_eq!(unique, wanted);
    }

    /// PROPERTY: the initiating peer of each (chaincode, channel) is the last one listed.
    #[test]
    fn property_initiator_is_last_peer(targets in targets()) {
        let peers = StaticPeers { installed: HashSet::new() };
        let plan = ActionPlanner::new(StateProber::new(&peers)).plan(&targets).unwrap();

        let mut last: HashMap<(String, String), String> = HashMap::new();
        for t in &targets {
            last.insert((t.name.clone(), t.channel.clone()), t.peer.clone());
        }

        prop_assert_eq!(plan.instantiate.len(), last.len());
        for t in &plan.instantiate {
            let key = (t.name.clone(), t.channel.clone());
            prop_assert_eq!(Some(&t.peer), last.get(&key));
        }
    }
}
