//! Report generation for run results.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use eztest_core::RunSummary;

/// A run report: title, time and the runner's summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Runner summary.
    pub summary: RunSummary,
}

impl RunReport {
    #[must_use]
    pub fn new(title: impl Into<String>, summary: RunSummary) -> Self {
        Self {
            title: title.into(),
            timestamp: crate::structured_log::now_utc(),
            summary,
        }
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Suite: {}\n", self.summary.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| # | Test | Status | Message |\n");
        out.push_str("|---|------|--------|---------|\n");
        for r in &self.summary.results {
            let status = if r.passed() { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                r.index,
                escape_cell(&r.name),
                status,
                escape_cell(r.outcome.message().unwrap_or(""))
            ));
        }
        out
    }

    /// Render the report as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Make `text` safe inside a markdown table cell: pipes are escaped and line
/// breaks become `<br>`.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}

/// Where the JSON twin of a markdown report at `markdown` goes.
///
/// Normally the extension is swapped for `.json`. A path that already ends in
/// `.json` gets a second `.json` appended so the two files never collide.
#[must_use]
pub fn json_path_for(markdown: &Path) -> PathBuf {
    let is_json = markdown
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let mut name = markdown.as_os_str().to_owned();
        name.push(".json");
        PathBuf::from(name)
    } else {
        markdown.with_extension("json")
    }
}
