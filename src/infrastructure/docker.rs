//! Docker CLI binding of the ContainerRuntime port

use crate::domain::ports::{ArtifactKind, ContainerRuntime, RuntimeError};

use super::shell::{shell_quote, ShellError, ShellRunner};

/// Container runtime driven through the `docker` command
pub struct DockerCli {
    runner: ShellRunner,
}

impl DockerCli {
    pub fn new(runner: ShellRunner) -> Self {
        Self { runner }
    }

    pub fn list_command(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Container => "docker ps --format '{{.Names}}'",
            ArtifactKind::Image => "docker images --format '{{.Repository}}'",
        }
    }

    pub fn remove_command(kind: ArtifactKind, name: &str) -> String {
        match kind {
            ArtifactKind::Container => format!("docker rm -f {}", shell_quote(name)),
            ArtifactKind::Image => format!("docker rmi {}", shell_quote(name)),
        }
    }
}

impl ContainerRuntime for DockerCli {
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, RuntimeError> {
        let output = self
            .runner
            .run(Self::list_command(kind))
            .map_err(runtime_error)?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn remove(&self, kind: ArtifactKind, name: &str) -> Result<(), RuntimeError> {
        self.runner
            .run(&Self::remove_command(kind, name))
            .map(|_| ())
            .map_err(runtime_error)
    }
}

fn runtime_error(err: ShellError) -> RuntimeError {
    match err {
        ShellError::Spawn { command, message } => RuntimeError { command, message },
        ShellError::Failed {
            command, stderr, ..
        } => RuntimeError {
            command,
            message: stderr,
        },
    }
}
