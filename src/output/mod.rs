//! Result formatting for the CLI.
//!
//! Plain output prints one aligned line per address; JSON output prints one
//! object per address so that results can be piped into other tools.

use colored::*;
use strum::IntoEnumIterator;

use crate::config::OutputFormat;
use crate::error_handling::ErrorType;
use crate::prober::{ProbeResult, SweepSummary};

/// Formats a single result.
pub fn format_result(result: &ProbeResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format_plain(result),
        OutputFormat::Json => {
            serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

fn format_plain(result: &ProbeResult) -> String {
    let address = result.address.to_string();
    if result.is_success() {
        format!(
            "✅ {:<39} {:<40} {} {} ({} ms)",
            address,
            result.reverse_name,
            result.display_url.cyan(),
            result.status_line.green(),
            result.elapsed_ms
        )
    } else {
        format!(
            "❌ {:<39} {:<40} {} {} ({} ms)",
            address,
            result.reverse_name,
            result.display_url.cyan(),
            result.error.red(),
            result.elapsed_ms
        )
    }
}

/// Formats the fastest responder line.
pub fn format_fastest(fastest: Option<&ProbeResult>) -> String {
    match fastest {
        Some(result) => format!(
            "Fastest: {} ({}) in {} ms",
            result.address, result.display_url, result.elapsed_ms
        ),
        None => "Fastest: none (every probe failed)".to_string(),
    }
}

/// Formats the sweep summary.
pub fn format_summary(summary: &SweepSummary) -> String {
    let mut line = format!(
        "Probed {} address{} ({} succeeded, {} failed)",
        summary.total,
        if summary.total == 1 { "" } else { "es" },
        summary.succeeded,
        summary.failed
    );

    let breakdown: Vec<String> = ErrorType::iter()
        .filter_map(|t| match summary.error_count(t) {
            0 => None,
            n => Some(format!("{t}: {n}")),
        })
        .collect();
    if !breakdown.is_empty() {
        line.push_str(&format!(" [{}]", breakdown.join(", ")));
    }

    if let (Some(fastest), Some(slowest)) = (summary.fastest_ms, summary.slowest_ms) {
        line.push_str(&format!(" - fastest {fastest} ms, slowest {slowest} ms"));
    }
    line
}
