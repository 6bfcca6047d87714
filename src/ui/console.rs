//! Human-readable reconcile progress
//!
//! ```text
//! ==> COMPILING...
//! Compiled chaincode cc1 version 1.0 at chaincodes/cc1
//! ==> COMPILING...DONE !
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use ccsync::domain::ports::{ReconcileEvent, ReconcileEventSink};
use crossterm::style::Stylize;

/// Prints reconcile events as progress lines
pub struct ConsoleSink {
    color: bool,
    verbose: u8,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout(color: bool, verbose: u8) -> Self {
        Self::with_writer(color, verbose, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(color: bool, verbose: u8, writer: W) -> Self {
        Self {
            color,
            verbose,
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn render(&self, event: &ReconcileEvent) -> Option<String> {
        match event {
            ReconcileEvent::Started { manifest, dry_run } => {
                let mode = if *dry_run { " (dry run)" } else { "" };
                Some(format!("Reading {manifest}{mode}"))
            }
            ReconcileEvent::Loaded { chaincodes, targets } if self.verbose > 0 => Some(format!(
                "{chaincodes} chaincode(s), {targets} deployment target(s)"
            )),
            ReconcileEvent::Planned {
                compile,
                install,
                instantiate,
            } if self.verbose > 0 => Some(format!(
                "Plan: {compile} compile, {install} install, {instantiate} instantiate"
            )),
            ReconcileEvent::StageStarted { stage, .. } => {
                Some(self.heading(&format!("==> {}...", stage.label())))
            }
            ReconcileEvent::TaskFinished { report, .. } => {
                let line = report.to_string();
                if report.outcome.is_change() && self.color {
                    Some(line.green().to_string())
                } else {
                    Some(line)
                }
            }
            ReconcileEvent::StageFinished { stage, .. } => {
                Some(self.heading(&format!("==> {}...DONE !", stage.label())))
            }
            ReconcileEvent::CommandSkipped { command } => Some(if self.color {
                command.as_str().dark_grey().to_string()
            } else {
                command.clone()
            }),
            ReconcileEvent::Completed { changed, unchanged } => Some(format!(
                "{changed} change(s), {unchanged} already up to date"
            )),
            _ => None,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl ReconcileEventSink for ConsoleSink {
    fn on_event(&self, event: ReconcileEvent) {
        let Some(line) = self.render(&event) else {
            return;
        };
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }
}
