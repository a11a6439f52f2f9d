//! Custom assertions for trendlens JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `json.content.<field>` is an array of `expected` items.
pub fn assert_content_len(json: &Value, field: &str, expected: usize) -> Result<()> {
    let items = json["content"][field]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", field))?;

    if items.len() != expected {
        anyhow::bail!(
            "Expected {} items in content.{}, got {}",
            expected,
            field,
            items.len()
        );
    }

    Ok(())
}

/// Assert the stats block of a trends view.
pub fn assert_stats(json: &Value, peak: u64, current: u64) -> Result<()> {
    let stats = &json["content"]["stats"];
    let actual_peak = stats["peak"]
        .as_u64()
        .context("Expected 'content.stats.peak' in JSON")?;
    let actual_current = stats["current"]
        .as_u64()
        .context("Expected 'content.stats.current' in JSON")?;

    if actual_peak != peak || actual_current != current {
        anyhow::bail!(
            "Expected peak {} / current {}, got {} / {}",
            peak,
            current,
            actual_peak,
            actual_current
        );
    }

    Ok(())
}
