//! Per-file outcomes, batch totals, and their console rendering.

use crate::processing::ImageStats;
use std::path::{Path, PathBuf};
use std::time::Duration;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// A successfully optimized file.
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    pub source: PathBuf,
    pub output: PathBuf,
    pub stats: ImageStats,
}

impl JobResult {
    pub fn savings_percent(&self) -> f64 {
        savings_percent(self.stats.original_size, self.stats.optimized_size)
    }

    /// `✅ hero.jpg: 2.35 MB → 312.4 KB (87.0% saved) → hero.webp`
    pub fn status_line(&self) -> String {
        format!(
            "{} {}: {} → {} ({:.1}% saved) → {}",
            crate::constants::SUCCESS_PREFIX,
            display_name(&self.source),
            format_megabytes(self.stats.original_size),
            format_kilobytes(self.stats.optimized_size),
            self.savings_percent(),
            display_name(&self.output)
        )
    }
}

/// A file that was skipped after an error. It has no output on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFailure {
    pub source: PathBuf,
    pub message: String,
}

impl JobFailure {
    pub fn status_line(&self) -> String {
        format!(
            "Failed to process {}: {}",
            display_name(&self.source),
            self.message
        )
    }
}

/// Outcome of one batch run, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub files_found: usize,
    pub results: Vec<JobResult>,
    pub failures: Vec<JobFailure>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn total_original_size(&self) -> u64 {
        self.results.iter().map(|r| r.stats.original_size).sum()
    }

    pub fn total_optimized_size(&self) -> u64 {
        self.results.iter().map(|r| r.stats.optimized_size).sum()
    }

    /// Savings over successful files only; failures never enter the totals.
    pub fn total_savings_percent(&self) -> f64 {
        savings_percent(self.total_original_size(), self.total_optimized_size())
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} Optimization Summary:", crate::constants::SUMMARY_PREFIX),
            format!("  📁 Files found: {}", self.files_found),
            format!("  ✅ Optimized: {}", self.results.len()),
        ];
        if !self.failures.is_empty() {
            lines.push(format!("  ⚠️  Failed: {}", self.failures.len()));
        }
        lines.push(format!(
            "  📦 Total original size: {}",
            format_file_size(self.total_original_size())
        ));
        lines.push(format!(
            "  📦 Total optimized size: {}",
            format_file_size(self.total_optimized_size())
        ));
        lines.push(format!(
            "  🎯 Total savings: {:.1}%",
            self.total_savings_percent()
        ));
        lines.push(format!("  ⏱️  Total time: {:.2?}", self.elapsed));
        lines
    }

    /// One quoted, comma-terminated public path per output, ready to paste
    /// into an array literal.
    pub fn generated_paths(&self, public_prefix: &str) -> Vec<String> {
        let prefix = public_prefix.trim_end_matches('/');
        self.results
            .iter()
            .map(|r| format!("\"{}/{}\",", prefix, display_name(&r.output)))
            .collect()
    }
}

/// `(1 - new/original) * 100`, or 0 when there is nothing to compare against.
pub fn savings_percent(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - new_size as f64 / original_size as f64) * 100.0
}

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / KIB)
}

/// Human-readable size (e.g. "1.2 MB", "512 B").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= KIB && unit_index < UNITS.len() - 1 {
        size /= KIB;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
