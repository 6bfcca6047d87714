//! Test environment builder for isolated ccsync testing.
//!
//! Provides `TestEnv` - a temp working directory plus a fake Fabric host:
//! a GOPATH holding the chaincode manifest, a crypto-config directory with
//! per-peer env scripts, chaincode tools, and stand-ins for `peer` and
//! `docker` that record their calls.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a ccsync CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Fake `peer` binary.
///
/// Installed chaincodes are kept per peer (`installed.<peer>`), instantiated
/// ones per channel (`instantiated.<channel>`), in `peer chaincode list` format.
const FAKE_PEER: &str = r#"#!/usr/bin/env bash
state="$FAKE_STATE"
echo "$CORE_PEER_ID $*" >> "$state/peer.log"

get() {
  local flag="$1"; shift
  while [ $# -gt 0 ]; do
    if [ "$1" = "$flag" ]; then echo "$2"; return; fi
    shift
  done
}

name="$(get --name "$@")"
version="$(get --version "$@")"
path="$(get --path "$@")"
channel="$(get --channelID "$@")"

case " $* " in
  *" list --installed "*)
    echo "Get installed chaincodes on peer:"
    cat "$state/installed.$CORE_PEER_ID" 2>/dev/null
    ;;
  *" list --instantiated "*)
    echo "Get instantiated chaincodes on channel $channel:"
    cat "$state/instantiated.$channel" 2>/dev/null
    ;;
  *" install "*)
    echo "Name: $name, Version: $version, Path: $path, Id: 0" >> "$state/installed.$CORE_PEER_ID"
    ;;
  *" instantiate "*|*" upgrade "*)
    grep -v "^Name: $name," "$state/instantiated.$channel" > "$state/next" 2>/dev/null
    grep "^Name: $name, Version: $version," "$state/installed.$CORE_PEER_ID" >> "$state/next"
    mv "$state/next" "$state/instantiated.$channel"
    ;;
esac
exit 0
"#;

/// Fake `docker`: lists the names in `containers` / `images`, logs removals
const FAKE_DOCKER: &str = r#"#!/usr/bin/env bash
state="$FAKE_STATE"
case "$1" in
  ps) cat "$state/containers" 2>/dev/null ;;
  images) cat "$state/images" 2>/dev/null ;;
  *) echo "$*" >> "$state/docker.log" ;;
esac
exit 0
"#;

const FAKE_COMPILE: &str = r#"#!/usr/bin/env bash
echo "$1" >> "$FAKE_STATE/compile.log"
"#;

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the binary runs in
    pub project_root: TempDir,
    /// Fake host: GOPATH, crypto-config, tools, fake binaries and their state
    pub host: TempDir,
    ccsync_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            host: tempfile::tempdir().expect("Failed to create host dir"),
            ccsync_bin: PathBuf::from(env!("CARGO_BIN_EXE_ccsync")),
        };
        for dir in ["go/src/build", "crypto/tools", "tools", "bin", "state"] {
            fs::create_dir_all(env.host_path(dir)).expect("Failed to create host layout");
        }
        env.write_script("bin/peer", FAKE_PEER);
        env.write_script("bin/docker", FAKE_DOCKER);
        env.write_script("tools/compile_chaincode.sh", FAKE_COMPILE);
        env
    }

    pub fn host_path(&self, relative: &str) -> PathBuf {
        self.host.path().join(relative)
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn gopath(&self) -> PathBuf {
        self.host_path("go")
    }

    /// Write `ccsync.toml` in the working directory pointing at the fake host
    pub fn write_host_config(&self) {
        let config = format!(
            "[paths]\ngopath = \"{}\"\ncrypto_config = \"{}\"\nchaincode_tools = \"{}\"\n\n\
             [peer]\nbinary = \"{}\"\n",
            self.gopath().display(),
            self.host_path("crypto").display(),
            self.host_path("tools").display(),
            self.host_path("bin/peer").display(),
        );
        self.write_project_file("ccsync.toml", &config);
    }

    /// Declare peers by writing their env scripts
    pub fn add_peers(&self, peers: &[&str]) {
        for peer in peers {
            self.write_host_file(
                &format!("crypto/tools/set_env.{peer}.sh"),
                &format!("export CORE_PEER_ID={peer}\n"),
            );
        }
    }

    /// Write the chaincode index and one golang chaincode per entry
    pub fn write_manifest(&self, chaincodes: &[(&str, &str, &str, &[&str])]) {
        let dirs: Vec<&str> = chaincodes.iter().map(|(name, ..)| *name).collect();
        self.write_host_file(
            "go/src/build/chaincodes.json",
            &serde_json::to_string(&dirs).unwrap(),
        );
        for (name, version, channel, peers) in chaincodes {
            let package = serde_json::json!({
                "name": name,
                "version": version,
                "hf-language": "golang",
                "hf-network": [{
                    "channelId": channel,
                    "instantiateArgs": [],
                    "orderer": {"host": "orderer0", "port": 7050, "org": "ordererOrg"},
                    "peers": peers,
                }],
            });
            self.write_host_file(&format!("go/src/{name}/package.json"), &package.to_string());
        }
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }

    pub fn write_host_file(&self, relative: &str, content: &str) {
        write_file(&self.host_path(relative), content);
    }

    /// Contents of a fake-host log (`peer.log`, `docker.log`, `compile.log`), empty if absent
    pub fn log(&self, name: &str) -> String {
        fs::read_to_string(self.host_path(&format!("state/{name}"))).unwrap_or_default()
    }

    fn write_script(&self, relative: &str, content: &str) {
        let path = self.host_path(relative);
        write_file(&path, content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to make script executable");
        }
    }

    /// Run ccsync in the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run ccsync with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = format!(
            "{}:{}",
            self.host_path("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::new(&self.ccsync_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env("HOME", self.host.path())
            .env("XDG_CONFIG_HOME", self.host_path("config"))
            .env("FAKE_STATE", self.host_path("state"))
            .env("NO_COLOR", "1")
            .env_remove("GOPATH")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("RUST_LOG")
            .env_remove("CCSYNC_CONCURRENCY")
            .env_remove("CCSYNC_CRYPTO_CONFIG")
            .env_remove("CCSYNC_CHAINCODE_TOOLS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ccsync");
        output_to_result(output)
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
