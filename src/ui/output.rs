use ccsync::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    let github = crate::ui::terminal::detect_stderr_capabilities().is_ci
        && std::env::var("GITHUB_ACTIONS").is_ok();

    for w in warnings {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
            continue;
        }

        if github {
            println!(
                "{}",
                crate::ui::ci::github_actions_annotation(
                    crate::ui::ci::AnnotationLevel::Warning,
                    &format!("Unknown config key '{}'", w.key),
                    Some(&w.file.to_string_lossy()),
                    Some("ccsync"),
                )
            );
        }

        if let Some(line) = w.line {
            eprintln!(
                "[WARN] Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            );
        } else {
            eprintln!("[WARN] Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
