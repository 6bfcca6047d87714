//! Merge-deps command handler

use std::path::Path;

use anyhow::{Context, Result};

use ccsync::application::merge_dependencies;

/// Execute the merge-deps command
pub fn cmd_merge_deps(first: &Path, second: &Path, json: bool) -> Result<()> {
    let result = merge_dependencies(first, second)
        .with_context(|| format!("merging {} into {}", second.display(), first.display()))?;

    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "merge_complete",
            "command": "merge-deps",
            "file": first.display().to_string(),
            "added": result.added,
            "updated": result.updated,
        }));
        return Ok(());
    }

    if result.is_empty() {
        println!("{} already has every dependency", first.display());
        return Ok(());
    }
    for name in &result.added {
        println!("+ {name}");
    }
    for name in &result.updated {
        println!("~ {name}");
    }
    println!(
        "Updated {} ({} added, {} changed)",
        first.display(),
        result.added.len(),
        result.updated.len()
    );
    Ok(())
}
