//! Shell-backed build toolchain
//!
//! Golang chaincodes are compiled by the host's `compile_chaincode.sh`; node
//! chaincodes only need `npm install` in their source directory. Sources are
//! fetched with `pull_chaincode.sh`.

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentTarget;
use crate::domain::ports::{BuildError, ChaincodeBuilder, SourceFetcher};

use super::shell::{shell_quote, ShellError, ShellRunner};

const COMPILE_SCRIPT: &str = "compile_chaincode.sh";
const PULL_SCRIPT: &str = "pull_chaincode.sh";
const DEPENDENCY_MARKER: &str = "node_modules";

/// [`ChaincodeBuilder`] and [`SourceFetcher`] running the host's chaincode tools
#[derive(Clone)]
pub struct ShellBuilder {
    runner: ShellRunner,
    tools_dir: PathBuf,
    base_path: PathBuf,
}

impl ShellBuilder {
    /// `tools_dir` holds the compile and pull scripts; `base_path` is where
    /// fetched sources land.
    pub fn new(
        runner: ShellRunner,
        tools_dir: impl Into<PathBuf>,
        base_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            tools_dir: tools_dir.into(),
            base_path: base_path.into(),
        }
    }

    fn tool(&self, script: &str) -> String {
        shell_quote(&self.tools_dir.join(script).to_string_lossy())
    }

    fn run(&self, command: String) -> Result<(), BuildError> {
        self.runner.run(&command).map(|_| ()).map_err(build_error)
    }

    pub fn compile_command(&self, target: &DeploymentTarget) -> String {
        format!("{} {}", self.tool(COMPILE_SCRIPT), shell_quote(&target.path))
    }

    pub fn npm_install_command(&self, target: &DeploymentTarget) -> String {
        format!("npm install --prefix {}", shell_quote(&target.path))
    }

    /// Commands run by [`SourceFetcher::fetch`], in order
    pub fn fetch_commands(&self, repository: &str, build: bool) -> Vec<String> {
        let base = shell_quote(&self.base_path.to_string_lossy());
        let mut commands = vec![
            format!("{} {}", self.tool(PULL_SCRIPT), shell_quote(repository)),
            format!("npm install --production --prefix {base}"),
        ];
        if build {
            commands.push(format!("npm run build --prefix {base}"));
        }
        commands
    }
}

impl ChaincodeBuilder for ShellBuilder {
    fn compile(&self, target: &DeploymentTarget) -> Result<(), BuildError> {
        self.run(self.compile_command(target))
    }

    fn install_dependencies(&self, target: &DeploymentTarget) -> Result<(), BuildError> {
        self.run(self.npm_install_command(target))
    }

    fn has_dependencies(&self, target: &DeploymentTarget) -> bool {
        Path::new(&target.path).join(DEPENDENCY_MARKER).is_dir()
    }
}

impl SourceFetcher for ShellBuilder {
    fn fetch(&self, repository: &str, build: bool) -> Result<(), BuildError> {
        for command in self.fetch_commands(repository, build) {
            self.run(command)?;
        }
        Ok(())
    }
}

fn build_error(err: ShellError) -> BuildError {
    match err {
        ShellError::Spawn { command, message } => BuildError::Spawn { command, message },
        ShellError::Failed {
            command,
            status,
            stderr,
        } => BuildError::Failed {
            command,
            status,
            stderr,
        },
    }
}
