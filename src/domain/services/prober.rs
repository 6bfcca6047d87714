//! State prober
//!
//! Answers "is this chaincode installed / instantiated?" from a fresh peer
//! query every time. Nothing is cached: the action primitives re-probe right
//! before mutating so concurrent tasks never act on a stale view.

use crate::domain::entities::{DeploymentTarget, InventoryRecord, ProbeResult};
use crate::domain::ports::{GatewayError, PeerGateway};
use crate::domain::value_objects::Listing;
use crate::error::{CcsyncError, CcsyncResult};

/// Read-only view of deployed state
#[derive(Clone, Copy)]
pub struct StateProber<'a> {
    gateway: &'a dyn PeerGateway,
}

impl<'a> StateProber<'a> {
    pub fn new(gateway: &'a dyn PeerGateway) -> Self {
        Self { gateway }
    }

    /// Query one inventory of the target's peer/channel and look for the target.
    ///
    /// Returns `Ok(false)` when the peer answers without a matching record; any
    /// failure to obtain the inventory is a probe error.
    pub fn probe(
        &self,
        target: &DeploymentTarget,
        want_installed: bool,
        ignore_version: bool,
    ) -> CcsyncResult<bool> {
        let listing = if want_installed {
            Listing::Installed
        } else {
            Listing::Instantiated
        };
        let version = (!ignore_version).then_some(target.version.as_str());
        let records = self.inventory(target, listing)?;
        let found = records
            .iter()
            .any(|r| r.matches(&target.name, &target.path, version));

        tracing::debug!(
            chaincode = %target.name,
            version = %target.version,
            peer = %target.peer,
            channel = %target.channel,
            %listing,
            ignore_version,
            found,
            "probed"
        );
        Ok(found)
    }

    /// Installed on the target's peer at exactly the desired version
    pub fn is_installed(&self, target: &DeploymentTarget) -> CcsyncResult<bool> {
        self.probe(target, true, false)
    }

    /// Instantiated on the target's channel, optionally at any version
    pub fn is_instantiated(
        &self,
        target: &DeploymentTarget,
        ignore_version: bool,
    ) -> CcsyncResult<bool> {
        self.probe(target, false, ignore_version)
    }

    /// Installed flag plus what is active on the target's channel, from one
    /// query of each listing
    pub fn probe_state(&self, target: &DeploymentTarget) -> CcsyncResult<ProbeResult> {
        let installed = self.is_installed(target)?;
        let instantiated_records = self.inventory(target, Listing::Instantiated)?;
        let deployed = instantiated_records
            .iter()
            .find(|r| r.matches(&target.name, &target.path, None));

        Ok(ProbeResult {
            installed,
            instantiated: deployed
                .is_some_and(|r| r.version.eq_ignore_ascii_case(&target.version)),
            deployed_version: deployed.map(|r| r.version.clone()),
        })
    }

    fn inventory(
        &self,
        target: &DeploymentTarget,
        listing: Listing,
    ) -> CcsyncResult<Vec<InventoryRecord>> {
        self.gateway
            .query_inventory(target, listing)
            .map_err(|e: GatewayError| CcsyncError::Probe {
                peer: target.peer.clone(),
                channel: target.channel.clone(),
                listing: listing.to_string(),
                message: e.to_string(),
            })
    }
}
