//! Reconcile options

use crate::domain::services::DEFAULT_CONCURRENCY;

/// Options for a reconciliation run
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Report commands instead of running them
    pub dry_run: bool,
    /// Repository to pull sources from before reading the manifest
    pub repository: Option<String>,
    /// Run `npm run build` after fetching
    pub build: bool,
    /// Reinstall node dependencies even when present
    pub force_npm_install: bool,
    /// Worker threads per batch
    pub concurrency: usize,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            repository: None,
            build: false,
            force_npm_install: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_repository(mut self, repository: Option<String>) -> Self {
        self.repository = repository;
        self
    }

    pub fn with_build(mut self, build: bool) -> Self {
        self.build = build;
        self
    }

    pub fn with_force_npm_install(mut self, force: bool) -> Self {
        self.force_npm_install = force;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}
