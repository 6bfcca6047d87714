//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::application::{CleanUseCase, ReconcileUseCase};
use crate::config::Config;
use crate::domain::ports::ReconcileEventSink;
use crate::domain::services::DesiredStateLoader;
use crate::error::CcsyncResult;
use crate::infrastructure::{
    DockerCli, JsonManifestRepository, PeerCli, ShellBuilder, ShellRunner,
};

/// Type alias for the concrete ReconcileUseCase with all dependencies
pub type ConcreteReconcileUseCase =
    ReconcileUseCase<JsonManifestRepository, PeerCli, ShellBuilder>;

/// Type alias for the concrete CleanUseCase
pub type ConcreteCleanUseCase = CleanUseCase<DockerCli>;

/// Where chaincode sources live for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    /// `$GOPATH/src/<base-path>`: holds the index and receives fetched sources
    pub base: PathBuf,
    /// Directory the index's chaincode entries are relative to
    pub chaincode_root: PathBuf,
}

impl SourceLayout {
    /// Resolve `base_path` under `$GOPATH/src`. Built sources live in `build/`.
    pub fn resolve(gopath: &Path, base_path: &Path, build: bool) -> Self {
        let base = normalize(&gopath.join("src").join(base_path));
        let chaincode_root = if build {
            base.join("build")
        } else {
            base.clone()
        };
        Self {
            base,
            chaincode_root,
        }
    }
}

/// Lexically collapse `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Create a reconcile use case with all dependencies wired up.
///
/// `sink` receives the commands skipped in dry-run mode.
pub fn create_reconcile_use_case(
    config: &Config,
    base_path: &Path,
    build: bool,
    dry_run: bool,
    sink: Arc<dyn ReconcileEventSink>,
) -> CcsyncResult<ConcreteReconcileUseCase> {
    let layout = SourceLayout::resolve(&config.gopath()?, base_path, build);
    tracing::debug!(
        base = %layout.base.display(),
        root = %layout.chaincode_root.display(),
        "source layout"
    );

    let runner = ShellRunner::new(dry_run, sink);
    let manifest_repo = JsonManifestRepository::new(&layout.base, &layout.chaincode_root)
        .with_package_section(&config.manifest.package_section);
    let gateway = PeerCli::new(runner.clone(), &config.paths.crypto_config)
        .with_binary(&config.peer.binary)
        .with_logging_level(&config.peer.logging_level);
    let builder = ShellBuilder::new(runner, &config.paths.chaincode_tools, &layout.base);
    let loader = DesiredStateLoader::new(&layout.chaincode_root);

    Ok(
        ReconcileUseCase::new(manifest_repo, gateway, builder.clone(), loader)
            .with_fetcher(Box::new(builder)),
    )
}

/// Create a clean use case.
///
/// Listing always runs; in dry-run mode the use case skips removals itself.
pub fn create_clean_use_case() -> ConcreteCleanUseCase {
    CleanUseCase::new(DockerCli::new(ShellRunner::default()))
}
