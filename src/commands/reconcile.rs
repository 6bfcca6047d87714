//! Reconcile command handler

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use ccsync::application::ReconcileOptions;
use ccsync::domain::ports::ReconcileEventSink;
use ccsync::infrastructure::JsonEventSink;
use ccsync::presentation::{factory, ColorWhen};

use crate::ui::console::ConsoleSink;

/// Arguments of `ccsync reconcile`
#[derive(Debug, Clone)]
pub struct ReconcileArgs {
    pub dry_run: bool,
    pub repository: Option<String>,
    pub base_path: PathBuf,
    pub force_npm_install: bool,
    pub build: bool,
    pub concurrency: Option<usize>,
}

/// Execute the reconcile command
pub fn cmd_reconcile(
    args: ReconcileArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config(json)?;

    let concurrency = args.concurrency.unwrap_or(config.reconcile.concurrency);
    if concurrency == 0 {
        anyhow::bail!("--concurrency must be at least 1");
    }

    let sink: Arc<dyn ReconcileEventSink> = if json {
        Arc::new(JsonEventSink::stdout("reconcile"))
    } else {
        let caps = crate::ui::terminal::detect_capabilities().with_color_choice(color);
        Arc::new(ConsoleSink::stdout(caps.supports_color, verbose))
    };

    let use_case = factory::create_reconcile_use_case(
        &config,
        &args.base_path,
        args.build,
        args.dry_run,
        sink.clone(),
    )?;

    let options = ReconcileOptions::new()
        .with_dry_run(args.dry_run)
        .with_repository(args.repository)
        .with_build(args.build)
        .with_force_npm_install(args.force_npm_install)
        .with_concurrency(concurrency);

    let result = use_case.execute_with_events(&options, sink)?;
    tracing::info!(
        chaincodes = result.chaincodes,
        changed = result.changed(),
        unchanged = result.unchanged(),
        "reconcile finished"
    );
    Ok(())
}
