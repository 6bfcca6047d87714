//! Dependency merge helper
//!
//! Copies every `dependencies` entry of one `package.json` into another,
//! overwriting versions already present. The target is rewritten atomically
//! with 4-space indentation and its key order preserved.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{CcsyncError, CcsyncResult};

const DEPENDENCIES: &str = "dependencies";

/// Outcome of a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// Dependencies not previously present in the target
    pub added: Vec<String>,
    /// Dependencies whose version changed
    pub updated: Vec<String>,
}

impl MergeResult {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

/// Merge `source`'s dependencies into `target` and rewrite `target`.
///
/// A target without a `dependencies` object gets one.
pub fn merge_dependencies(target: &Path, source: &Path) -> CcsyncResult<MergeResult> {
    let mut first = read_object(target)?;
    let second = read_object(source)?;

    let incoming = match second.get(DEPENDENCIES) {
        Some(Value::Object(deps)) => deps,
        Some(_) => {
            return Err(CcsyncError::InvalidConfig {
                file: source.to_path_buf(),
                message: format!("'{DEPENDENCIES}' is not an object"),
            })
        }
        None => {
            return Err(CcsyncError::MissingField {
                field: DEPENDENCIES.to_string(),
                file: source.to_path_buf(),
            })
        }
    };

    let existing = first
        .entry(DEPENDENCIES)
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(existing) = existing else {
        return Err(CcsyncError::InvalidConfig {
            file: target.to_path_buf(),
            message: format!("'{DEPENDENCIES}' is not an object"),
        });
    };

    let mut result = MergeResult::default();
    for (name, version) in incoming {
        match existing.insert(name.clone(), version.clone()) {
            None => result.added.push(name.clone()),
            Some(previous) if previous != *version => result.updated.push(name.clone()),
            Some(_) => {}
        }
    }

    write_pretty(target, &Value::Object(first))?;
    tracing::debug!(
        target = %target.display(),
        added = result.added.len(),
        updated = result.updated.len(),
        "merged dependencies"
    );
    Ok(result)
}

fn read_object(path: &Path) -> CcsyncResult<Map<String, Value>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CcsyncError::InvalidConfig {
            file: path.to_path_buf(),
            message: "top level is not an object".to_string(),
        }),
        Err(e) => Err(CcsyncError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

fn write_pretty(path: &Path, value: &Value) -> CcsyncResult<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| CcsyncError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&buf)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
