//! Reconcile Use Case
//!
//! Orchestrates a reconciliation run:
//! 1. Fetch sources (when a repository is given, never in dry run)
//! 2. Load the manifest and expand it into deployment targets
//! 3. Probe deployed state and compute the action plan
//! 4. Run the compile, install and instantiate batches, strictly in that order
//!
//! Any error aborts the run: the current batch stops dispatching, running tasks
//! drain, and no later batch starts.

use std::sync::Arc;

use crate::domain::entities::Stage;
use crate::domain::ports::{
    ChaincodeBuilder, ManifestRepository, NoopEventSink, PeerGateway, ReconcileEvent,
    ReconcileEventSink, SourceFetcher,
};
use crate::domain::services::{
    ActionPlanner, ActionPrimitives, BoundedExecutor, DesiredStateLoader, StateProber,
};
use crate::error::{CcsyncError, CcsyncResult};

use super::options::ReconcileOptions;
use super::result::{ReconcileResult, StageReport};

/// Reconcile use case
///
/// Parameterized by its ports so tests can run it against in-memory peers.
pub struct ReconcileUseCase<MR, PG, CB>
where
    MR: ManifestRepository,
    PG: PeerGateway,
    CB: ChaincodeBuilder,
{
    manifest_repo: MR,
    gateway: PG,
    builder: CB,
    loader: DesiredStateLoader,
    fetcher: Option<Box<dyn SourceFetcher>>,
}

impl<MR, PG, CB> ReconcileUseCase<MR, PG, CB>
where
    MR: ManifestRepository,
    PG: PeerGateway,
    CB: ChaincodeBuilder,
{
    pub fn new(manifest_repo: MR, gateway: PG, builder: CB, loader: DesiredStateLoader) -> Self {
        Self {
            manifest_repo,
            gateway,
            builder,
            loader,
            fetcher: None,
        }
    }

    /// Source fetcher used when a repository is requested
    pub fn with_fetcher(mut self, fetcher: Box<dyn SourceFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn gateway(&self) -> &PG {
        &self.gateway
    }

    pub fn builder(&self) -> &CB {
        &self.builder
    }

    /// Run without event reporting
    pub fn execute(&self, options: &ReconcileOptions) -> CcsyncResult<ReconcileResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Run, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &ReconcileOptions,
        event_sink: Arc<dyn ReconcileEventSink>,
    ) -> CcsyncResult<ReconcileResult> {
        event_sink.on_event(ReconcileEvent::Started {
            manifest: self.manifest_repo.describe(),
            dry_run: options.dry_run,
        });

        if let Some(repository) = &options.repository {
            self.fetch_sources(repository, options)?;
        }

        let entries = self.manifest_repo.load()?;
        let targets = self.loader.expand(&entries)?;
        tracing::info!(
            chaincodes = entries.len(),
            targets = targets.len(),
            "manifest loaded"
        );
        event_sink.on_event(ReconcileEvent::Loaded {
            chaincodes: entries.len(),
            targets: targets.len(),
        });

        let prober = StateProber::new(&self.gateway);
        let plan = ActionPlanner::new(prober).plan(&targets)?;
        event_sink.on_event(ReconcileEvent::Planned {
            compile: plan.compile.len(),
            install: plan.install.len(),
            instantiate: plan.instantiate.len(),
        });

        let actions = ActionPrimitives::new(&self.gateway, &self.builder)
            .with_force_dependency_install(options.force_npm_install)
            .with_dry_run(options.dry_run);
        let executor = BoundedExecutor::new(options.concurrency);

        let mut result = ReconcileResult {
            chaincodes: entries.len(),
            plan: plan.clone(),
            stages: Vec::with_capacity(Stage::ORDER.len()),
        };

        for stage in Stage::ORDER {
            let batch = plan.batch(stage);
            event_sink.on_event(ReconcileEvent::StageStarted {
                stage,
                tasks: batch.len(),
            });

            let reports = executor.run(
                batch,
                |target| actions.run(stage, target),
                |report| {
                    event_sink.on_event(ReconcileEvent::TaskFinished {
                        stage,
                        report: report.clone(),
                    })
                },
            )?;

            let stage_report = StageReport { stage, reports };
            event_sink.on_event(ReconcileEvent::StageFinished {
                stage,
                changed: stage_report.changed(),
                unchanged: stage_report.unchanged(),
            });
            result.stages.push(stage_report);
        }

        event_sink.on_event(ReconcileEvent::Completed {
            changed: result.changed(),
            unchanged: result.unchanged(),
        });
        Ok(result)
    }

    fn fetch_sources(&self, repository: &str, options: &ReconcileOptions) -> CcsyncResult<()> {
        if options.dry_run {
            tracing::info!(%repository, "dry run: not fetching sources");
            return Ok(());
        }
        let Some(fetcher) = &self.fetcher else {
            tracing::warn!(%repository, "no source fetcher configured, skipping fetch");
            return Ok(());
        };
        tracing::info!(%repository, build = options.build, "fetching sources");
        fetcher
            .fetch(repository, options.build)
            .map_err(|e| CcsyncError::action("fetch", repository, e))
    }
}
