use std::path::Path;

use ccsync::{CcsyncError, ErrorKind};
use crossterm::style::Stylize;

pub fn format_ccsync_error(err: &CcsyncError) -> String {
    let caps = crate::ui::terminal::detect_stderr_capabilities();
    format_ccsync_error_with(err, caps.supports_color)
}

fn format_ccsync_error_with(err: &CcsyncError, supports_color: bool) -> String {
    let header = match err.kind() {
        ErrorKind::Config => "[ERROR] configuration",
        ErrorKind::Probe => "[ERROR] peer query",
        ErrorKind::Action => "[ERROR] action",
    };
    let header = if supports_color {
        header.red().bold().to_string()
    } else {
        header.to_string()
    };

    let mut out = format!("{header}: {err}\n");
    if let Some(fix) = fix_hint(err) {
        out.push_str("  fix: ");
        out.push_str(&fix);
        out.push('\n');
    }
    out
}

fn fix_hint(err: &CcsyncError) -> Option<String> {
    match err {
        CcsyncError::ManifestNotFound { .. } => Some(
            "check --base-path, or pass --repository to fetch the chaincode sources".to_string(),
        ),
        CcsyncError::MissingField { field, .. } => {
            Some(format!("add '{field}' to the chaincode's package.json"))
        }
        CcsyncError::UnknownLanguage { .. } => {
            Some("set 'hf-language' to \"golang\" or \"node\"".to_string())
        }
        CcsyncError::InvalidSetting { key, .. } if key == "paths.gopath" => {
            Some("export GOPATH or set paths.gopath in ccsync.toml".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(ccsync) = err.downcast_ref::<CcsyncError>() {
        return format_ccsync_error(ccsync);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let code = err
            .downcast_ref::<CcsyncError>()
            .map(CcsyncError::code)
            .unwrap_or("error");
        let output = serde_json::json!({
            "event": "error",
            "code": code,
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_stderr_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        let file = err.downcast_ref::<CcsyncError>().and_then(error_file);
        let file_str = file.map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            crate::ui::ci::github_actions_annotation(
                crate::ui::ci::AnnotationLevel::Error,
                &err.to_string(),
                file_str.as_deref(),
                Some("ccsync"),
            )
        );
    }

    eprint!("{}", format_error(err));
}

fn error_file(err: &CcsyncError) -> Option<&Path> {
    match err {
        CcsyncError::ManifestNotFound { primary, .. } => Some(primary.as_path()),
        CcsyncError::InvalidConfig { file, .. } | CcsyncError::MissingField { file, .. } => {
            Some(file.as_path())
        }
        _ => None,
    }
}
