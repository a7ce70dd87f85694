//! Console rendering of provisioning results.

use std::fmt::Write as _;

use dawala_models::{AccountSummary, BatchSummary, OperationOutcome, SeedReport};

pub fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "📊 Summary:\n   Total: {}\n   Created: {}\n   Skipped: {}\n   Failed: {}\n",
        summary.total, summary.created, summary.skipped, summary.failed
    )
}

/// Numbered per-account lines, with the message or error indented below.
pub fn format_results(results: &[OperationOutcome]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut out = String::from("📋 Detailed Results:\n");
    for (index, item) in results.iter().enumerate() {
        let status = if item.success { "✅" } else { "❌" };
        let _ = writeln!(out, "   {}. {} {} - {}", index + 1, status, item.email, item.action);
        if let Some(message) = &item.message {
            let _ = writeln!(out, "      {message}");
        }
        if let Some(error) = &item.error {
            let _ = writeln!(out, "      Error: {error}");
        }
    }
    out
}

pub fn format_report(report: &SeedReport) -> String {
    format!(
        "{}\n{}",
        format_summary(&report.summary),
        format_results(&report.results)
    )
}

pub fn format_account_row(account: &AccountSummary) -> String {
    let last_sign_in = account
        .last_sign_in_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "{:<36}  {:<32}  {:<8}  {}  {}",
        account.id,
        account.email.as_deref().unwrap_or("-"),
        account.role,
        account.created_at.format("%Y-%m-%d %H:%M"),
        last_sign_in
    )
}

/// Process exit code for a seeding run: 1 if any account failed.
pub fn seed_exit_code(report: &SeedReport) -> i32 {
    if report.has_failures() { 1 } else { 0 }
}
