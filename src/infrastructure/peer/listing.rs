//! Parser for `peer chaincode list` output
//!
//! The peer prints a header line followed by one line per chaincode:
//!
//! ```text
//! Get installed chaincodes on peer:
//! Name: marbles, Version: 1.0, Path: chaincodes/marbles, Id: 7b4f...
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::InventoryRecord;
use crate::domain::ports::GatewayError;

fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?i)name:\s*"?([^,"\s]+)"?,?\s*version:\s*"?([^,"\s]+)"?,?\s*path:\s*"?([^,"]+?)"?\s*(?:,|$)"#,
        )
        .expect("listing regex is valid")
    })
}

/// Extract inventory records from raw listing output.
///
/// Lines that do not describe a chaincode are skipped. A line that starts like
/// a record but cannot be parsed is a protocol error, so a changed output
/// format is never mistaken for an empty inventory.
pub fn parse_listing(output: &str) -> Result<Vec<InventoryRecord>, GatewayError> {
    let mut records = Vec::new();
    for line in output.lines() {
        let line = line.trim();
        if !line.to_ascii_lowercase().starts_with("name:") {
            continue;
        }
        let caps = record_pattern()
            .captures(line)
            .ok_or_else(|| GatewayError::Protocol(format!("unrecognised listing line: {line}")))?;
        records.push(InventoryRecord::new(&caps[1], &caps[2], &caps[3]));
    }
    Ok(records)
}
