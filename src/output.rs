//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every release is its semantic identity (version, build, date) with the
//! source filename shown as secondary context via an indented `Source:`
//! line.
//!
//! ```text
//! Dev channel (2 releases)
//! 001 v1.1.70 c101 2025-10-10 [latest]
//!     Source: app_dev_20251010_c101_v1.1.70_release.apk
//! 002 v1.1.69 c100 2025-10-09
//!     Source: app_dev_20251009_c100_v1.1.69_release.apk
//!
//! Stg channel (0 releases)
//!
//! Skipped (1)
//!     app_dev_badname.apk
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::naming::{self, Channel, ReleaseRecord};
use crate::scan::Manifest;
use crate::update::UpdateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header + release lines for one channel.
fn channel_lines(channel: Channel, releases: &[ReleaseRecord]) -> Vec<String> {
    let title = match channel {
        Channel::Dev => "Dev",
        Channel::Stg => "Stg",
    };
    let mut lines = vec![format!("{} channel ({} releases)", title, releases.len())];
    for (idx, release) in releases.iter().enumerate() {
        let latest = if idx == 0 { " [latest]" } else { "" };
        lines.push(format!(
            "{} v{} c{} {}{}",
            format_index(idx + 1),
            release.version,
            release.build,
            naming::format_date(&release.date),
            latest
        ));
        lines.push(format!("    Source: {}", release.filename));
    }
    lines
}

/// Format the scan stage summary.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = channel_lines(Channel::Dev, manifest.releases(Channel::Dev));
    lines.push(String::new());
    lines.extend(channel_lines(Channel::Stg, manifest.releases(Channel::Stg)));

    if !manifest.skipped.is_empty() {
        lines.push(String::new());
        lines.push(format!("Skipped ({})", manifest.skipped.len()));
        for name in &manifest.skipped {
            lines.push(format!("    {}", name));
        }
    }
    lines
}

/// Format the update stage summary.
pub fn format_update_output(report: &UpdateReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Updated {} ({} dev, {} stg)",
        report.page.display(),
        report.dev_count,
        report.stg_count
    )];
    if !report.title_rebranded {
        lines.push("Note: <title> branding pattern not found, left as-is".to_string());
    }
    if !report.heading_rebranded {
        lines.push("Note: <h1> branding pattern not found, left as-is".to_string());
    }
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

pub fn print_update_output(report: &UpdateReport) {
    for line in format_update_output(report) {
        println!("{}", line);
    }
}
