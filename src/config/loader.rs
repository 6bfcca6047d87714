//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CcsyncError, CcsyncResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "ccsync.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CcsyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CcsyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the working directory config, user config, or defaults.
///
/// Unlike a missing file, an unreadable or malformed one is an error.
pub fn load_or_default(project_root: Option<&Path>) -> CcsyncResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    let (config, warnings) = match candidates.into_iter().find(|p| p.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    let config = with_env_overrides(config)?;
    config.validate()?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (CCSYNC_* prefix)
pub fn with_env_overrides(config: Config) -> CcsyncResult<Config> {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(super) fn apply_overrides<F>(mut config: Config, lookup: F) -> CcsyncResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // CCSYNC_CONCURRENCY
    if let Some(value) = lookup("CCSYNC_CONCURRENCY").filter(|v| !v.trim().is_empty()) {
        config.reconcile.concurrency =
            value
                .trim()
                .parse()
                .map_err(|_| CcsyncError::InvalidSetting {
                    key: "CCSYNC_CONCURRENCY".to_string(),
                    message: format!("expected a positive integer, got '{}'", value),
                })?;
    }

    // CCSYNC_CRYPTO_CONFIG
    if let Some(value) = lookup("CCSYNC_CRYPTO_CONFIG").filter(|v| !v.is_empty()) {
        config.paths.crypto_config = PathBuf::from(value);
    }

    // CCSYNC_CHAINCODE_TOOLS
    if let Some(value) = lookup("CCSYNC_CHAINCODE_TOOLS").filter(|v| !v.is_empty()) {
        config.paths.chaincode_tools = PathBuf::from(value);
    }

    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ccsync").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "reconcile",
        "concurrency",
        "paths",
        "gopath",
        "crypto_config",
        "chaincode_tools",
        "manifest",
        "package_section",
        "peer",
        "binary",
        "logging_level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
