//! User-facing progress output.
//!
//! The pipeline narrates its progress through a [`Reporter`]: numbered
//! section headers, indented descriptions, and error blocks. Reporting never
//! ends the process; that is left to `main`.

use crate::error::ChainError;
use std::io::Write;

/// Sink for progress output.
pub trait Reporter {
    /// Start a numbered section, e.g. `-- 2. Convert args to full branch names`.
    fn header(&mut self, ordinal: usize, title: &str);

    /// A step inside the current section.
    fn description(&mut self, text: &str);

    /// A failure, with free-form context describing where it happened.
    fn error(&mut self, err: &ChainError, context: &str);
}

/// Writes progress to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn header(&mut self, ordinal: usize, title: &str) {
        println!("\n-- {}. {}", ordinal, title);
    }

    fn description(&mut self, text: &str) {
        println!("---- {}", text);
    }

    fn error(&mut self, err: &ChainError, context: &str) {
        let _ = std::io::stdout().flush();
        eprint!("{}", format_error(err, context));
    }
}

/// Render an error block the way `ConsoleReporter` prints it.
pub fn format_error(err: &ChainError, context: &str) -> String {
    let rule = "=".repeat(39);
    if context.is_empty() {
        format!("\n{rule}\nERROR: {err}\n{rule}\n")
    } else {
        format!("\n{rule}\nERROR: {err}\nDescription: {context}\n{rule}\n")
    }
}

/// One line of output captured by [`RecordingReporter`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Header(usize, String),
    Description(String),
    Error(String, String),
}

/// Keeps every report in memory for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub reports: Vec<Report>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn headers(&self) -> Vec<(usize, String)> {
        self.reports
            .iter()
            .filter_map(|report| match report {
                Report::Header(ordinal, title) => Some((*ordinal, title.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.reports
            .iter()
            .filter_map(|report| match report {
                Report::Description(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.reports
            .iter()
            .filter_map(|report| match report {
                Report::Error(err, context) => Some((err.clone(), context.clone())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn header(&mut self, ordinal: usize, title: &str) {
        self.reports.push(Report::Header(ordinal, title.to_string()));
    }

    fn description(&mut self, text: &str) {
        self.reports.push(Report::Description(text.to_string()));
    }

    fn error(&mut self, err: &ChainError, context: &str) {
        self.reports
            .push(Report::Error(err.to_string(), context.to_string()));
    }
}
