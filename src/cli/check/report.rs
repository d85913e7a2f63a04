//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single check finding.
#[derive(Debug, Clone)]
pub struct CheckError {
    /// The value that failed (link, id, field path).
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified check report for all finding types.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Data document findings, grouped by field path prefix.
    pub data: BTreeMap<String, Vec<CheckError>>,
    /// Template findings, grouped by template file.
    pub templates: BTreeMap<String, Vec<CheckError>>,
}

impl CheckReport {
    /// Add a data document finding.
    pub fn add_data(&mut self, source: impl Into<String>, target: String, reason: String) {
        self.data
            .entry(source.into())
            .or_default()
            .push(CheckError { target, reason });
    }

    /// Add a template finding.
    pub fn add_template(&mut self, source: impl Into<String>, target: String, reason: String) {
        self.templates
            .entry(source.into())
            .or_default()
            .push(CheckError { target, reason });
    }

    /// Total data finding count.
    pub fn data_error_count(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }

    /// Total template finding count.
    pub fn template_error_count(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    pub fn error_count(&self) -> usize {
        self.data_error_count() + self.template_error_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.templates.is_empty()
    }

    /// Print the full report to stderr (data -> templates).
    pub fn print(&self) {
        self.print_section("data", &self.data);
        self.print_section("templates", &self.templates);
    }

    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<CheckError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let file_count = errors.len();
        let error_count: usize = errors.values().map(Vec::len).sum();

        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({file_count} source{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, errs) in errors {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason);
                }
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}
