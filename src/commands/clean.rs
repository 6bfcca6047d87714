//! Clean command handler
//!
//! Removes containers and images of superseded chaincode versions.

use anyhow::Result;

use ccsync::application::{CleanOptions, CleanResult};
use ccsync::infrastructure::DockerCli;
use ccsync::presentation::{factory, ColorWhen};
use crossterm::style::Stylize;

/// Execute the clean command
pub fn cmd_clean(dry_run: bool, json: bool, color: Option<ColorWhen>) -> Result<()> {
    let use_case = factory::create_clean_use_case();
    let options = CleanOptions::new().with_dry_run(dry_run);

    let result = use_case.execute(&options)?;

    if json {
        emit_json(&result, dry_run);
    } else {
        let caps = crate::ui::terminal::detect_capabilities().with_color_choice(color);
        render_text(&result, dry_run, caps.supports_color);
    }

    if !result.is_success() {
        anyhow::bail!("{} artifact(s) could not be removed", result.errors.len());
    }
    Ok(())
}

fn emit_json(result: &CleanResult, dry_run: bool) {
    let event = if dry_run { "would_remove" } else { "removed" };
    for artifact in &result.removed {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": event,
            "command": "clean",
            "kind": artifact.kind.to_string(),
            "name": artifact.name,
        }));
    }
    for failure in &result.errors {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "remove_failed",
            "command": "clean",
            "kind": failure.artifact.kind.to_string(),
            "name": failure.artifact.name,
            "message": failure.message,
        }));
    }
    let _ = crate::ui::json::emit(serde_json::json!({
        "event": "clean_complete",
        "command": "clean",
        "dry_run": dry_run,
        "removed": result.removed.len(),
        "kept": result.kept,
        "failed": result.errors.len(),
    }));
}

fn render_text(result: &CleanResult, dry_run: bool, color: bool) {
    for artifact in &result.removed {
        if dry_run {
            println!("{}", DockerCli::remove_command(artifact.kind, &artifact.name));
        } else {
            println!("Removed {} {}", artifact.kind, artifact.name);
        }
    }
    for failure in &result.errors {
        let line = format!(
            "Could not remove {} {}: {}",
            failure.artifact.kind, failure.artifact.name, failure.message
        );
        if color {
            eprintln!("{}", line.red());
        } else {
            eprintln!("{line}");
        }
    }

    if result.removed.is_empty() && result.errors.is_empty() {
        println!("Nothing to clean ({} current artifact(s) kept)", result.kept);
    } else if !dry_run {
        println!("{} removed, {} kept", result.removed.len(), result.kept);
    }
}
