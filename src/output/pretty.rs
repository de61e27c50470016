//! Human-readable colored text formatter.
//!
//! Renders the whole run in one report, after validation has finished:
//! per-skill progress lines, a delimiter, the `Warnings:` block, the
//! `Errors:` block, and a final status line. Nothing is interleaved
//! mid-scan, so earlier results are never scrolled away by later ones.

use crate::finding::{RunReport, Severity};
use colored::Colorize;

/// Formats a [`RunReport`] as human-readable, ANSI-colored text.
pub fn format(report: &RunReport) -> String {
    if report.skills.is_empty() {
        return "No skill directories found\n".to_string();
    }

    let mut out = String::new();

    // Per-skill progress lines.
    for skill in &report.skills {
        out.push_str(&format!("Checking {skill}/\n"));
        if report.skill_has_errors(skill) {
            out.push_str(&format!("  {}\n", "✗ invalid structure".red()));
        } else {
            out.push_str(&format!("  {}\n", "✓ valid structure".green()));
        }
    }

    out.push_str(&format!("\n{}\n", "─".repeat(60).dimmed()));

    // Warnings block, then errors block, both in collection order.
    let warnings: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .collect();
    if !warnings.is_empty() {
        out.push_str(&format!("\n{}\n", "Warnings:".bold()));
        for finding in warnings {
            out.push_str(&format!(
                "  {} {}\n",
                "⚠".yellow().bold(),
                subject_line(finding.skill.as_deref(), &finding.message)
            ));
        }
    }

    let errors: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    if !errors.is_empty() {
        out.push_str(&format!("\n{}\n", "Errors:".bold()));
        for finding in errors {
            out.push_str(&format!(
                "  {} {}\n",
                "✗".red().bold(),
                subject_line(finding.skill.as_deref(), &finding.message)
            ));
        }
    }

    // Final status line.
    if report.passed {
        out.push_str(&format!(
            "\n{}\n",
            "✓ All skills validated successfully".green().bold()
        ));
    } else {
        out.push_str(&format!(
            "\n{}\n",
            format!("✗ Validation failed with {} error(s)", report.error_count())
                .red()
                .bold()
        ));
    }

    out
}

fn subject_line(skill: Option<&str>, message: &str) -> String {
    match skill {
        Some(skill) => format!("{skill}/: {message}"),
        None => message.to_string(),
    }
}
