//! `peer` CLI binding of the PeerGateway port
//!
//! Each call sources the peer's environment script from the crypto-config
//! tree, then runs `peer chaincode ...` against the target's orderer over TLS.

use std::path::PathBuf;

use crate::domain::entities::{DeploymentTarget, InventoryRecord};
use crate::domain::ports::{GatewayError, PeerGateway};
use crate::domain::value_objects::{Listing, Verb};
use crate::infrastructure::shell::{shell_quote, ShellError, ShellRunner};

use super::listing::parse_listing;

/// Peer gateway backed by the `peer` command line tool
pub struct PeerCli {
    runner: ShellRunner,
    crypto_config: PathBuf,
    binary: String,
    logging_level: String,
}

impl PeerCli {
    pub fn new(runner: ShellRunner, crypto_config: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            crypto_config: crypto_config.into(),
            binary: "peer".to_string(),
            logging_level: "debug".to_string(),
        }
    }

    /// Use a different `peer` executable
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// `--logging-level` for instantiate and upgrade
    pub fn with_logging_level(mut self, level: impl Into<String>) -> Self {
        self.logging_level = level.into();
        self
    }

    /// TLS CA bundle of the target's orderer
    fn orderer_ca(&self, target: &DeploymentTarget) -> PathBuf {
        let host = &target.orderer.host;
        self.crypto_config
            .join(&target.orderer.org)
            .join("orderers")
            .join(host)
            .join(format!("tlsca.combined.{host}-cert.pem"))
    }

    /// `source <env> && peer chaincode --cafile .. --orderer ..`
    fn prefix(&self, target: &DeploymentTarget) -> String {
        let env_script = self
            .crypto_config
            .join("tools")
            .join(format!("set_env.{}.sh", target.peer));
        format!(
            "source {} && {} chaincode --cafile {} --orderer {}",
            arg(&env_script.to_string_lossy()),
            arg(&self.binary),
            arg(&self.orderer_ca(target).to_string_lossy()),
            arg(&target.orderer.address()),
        )
    }

    pub fn list_command(&self, target: &DeploymentTarget, listing: Listing) -> String {
        format!(
            "{} list --{} --channelID {} --tls true",
            self.prefix(target),
            listing,
            arg(&target.channel),
        )
    }

    pub fn invoke_command(&self, target: &DeploymentTarget, verb: Verb) -> String {
        match verb {
            Verb::Install => format!(
                "{} install --name {} --version {} --path {} --lang {}",
                self.prefix(target),
                arg(&target.name),
                arg(&target.version),
                arg(&target.path),
                target.language,
            ),
            Verb::Instantiate | Verb::Upgrade => {
                let mut command = format!(
                    "{} --logging-level {} {} --name {} --version {} --ctor {} --channelID {}",
                    self.prefix(target),
                    arg(&self.logging_level),
                    verb,
                    arg(&target.name),
                    arg(&target.version),
                    shell_quote(&constructor(&target.instantiate_args)),
                    arg(&target.channel),
                );
                if let Some(policy) = &target.policy {
                    command.push_str(" --policy ");
                    command.push_str(&shell_quote(policy));
                }
                command.push_str(" --tls true --lang ");
                command.push_str(target.language.as_str());
                command
            }
        }
    }
}

impl PeerGateway for PeerCli {
    fn query_inventory(
        &self,
        target: &DeploymentTarget,
        listing: Listing,
    ) -> Result<Vec<InventoryRecord>, GatewayError> {
        let output = self
            .runner
            .run(&self.list_command(target, listing))
            .map_err(gateway_error)?;
        parse_listing(&output)
    }

    fn invoke(&self, target: &DeploymentTarget, verb: Verb) -> Result<(), GatewayError> {
        self.runner
            .run(&self.invoke_command(target, verb))
            .map(|_| ())
            .map_err(gateway_error)
    }
}

fn gateway_error(err: ShellError) -> GatewayError {
    match err {
        ShellError::Spawn { message, .. } => GatewayError::Unreachable(message),
        ShellError::Failed {
            command, stderr, ..
        } => GatewayError::CommandFailed { command, stderr },
    }
}

/// Init invocation: `{"Args":["Init", <args>...]}`
fn constructor(args: &[String]) -> String {
    let mut all = Vec::with_capacity(args.len() + 1);
    all.push("Init");
    all.extend(args.iter().map(String::as_str));
    serde_json::json!({ "Args": all }).to_string()
}

/// Quote an argument unless it is made of characters the shell leaves alone
fn arg(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@,=+".contains(c));
    if plain {
        value.to_string()
    } else {
        shell_quote(value)
    }
}
