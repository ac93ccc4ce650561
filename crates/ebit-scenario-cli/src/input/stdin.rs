use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io::{self, Read};

/// Attempt to read a target-price mapping as JSON from stdin if data is
/// being piped. Returns None if stdin is a TTY (interactive).
pub fn read_targets() -> Result<Option<BTreeMap<String, Decimal>>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let targets: BTreeMap<String, Decimal> = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse targets from stdin: {e}"))?;
    Ok(Some(targets))
}
