//! Audit report aggregation and output files.

use crate::audit::{Finding, FindingKind};
use crate::email::Flow;
use crate::error::AuditError;
use crate::i18n::{Locale, MetricsReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Counts per locale and per flow, plus the overall verdict.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub passed: bool,
    pub total_findings: usize,
    pub checked_texts: usize,
    pub by_locale: BTreeMap<String, usize>,
    pub by_flow: BTreeMap<String, usize>,
    pub metrics: MetricsReport,
}

/// Full result of one audit run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub summary: AuditSummary,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn new(
        generated_at: DateTime<Utc>,
        findings: Vec<Finding>,
        checked_texts: usize,
        metrics: MetricsReport,
    ) -> Self {
        // Every locale and flow is listed, even with zero findings
        let mut by_locale: BTreeMap<String, usize> = Locale::ALL
            .iter()
            .map(|locale| (locale.code().to_string(), 0))
            .collect();
        let mut by_flow: BTreeMap<String, usize> = Flow::ALL
            .iter()
            .map(|flow| (flow.as_str().to_string(), 0))
            .collect();

        for finding in &findings {
            *by_locale.entry(finding.locale.code().to_string()).or_default() += 1;
            *by_flow.entry(finding.group().to_string()).or_default() += 1;
        }

        Self {
            generated_at,
            summary: AuditSummary {
                passed: findings.is_empty(),
                total_findings: findings.len(),
                checked_texts,
                by_locale,
                by_flow,
                metrics,
            },
            findings,
        }
    }

    pub fn passed(&self) -> bool {
        self.summary.passed
    }

    /// Timestamp used in output file names, safe on every filesystem.
    fn file_stamp(&self) -> String {
        self.generated_at.format("%Y-%m-%dT%H-%M-%SZ").to_string()
    }

    pub fn json_file_name(&self) -> String {
        format!("language-integrity-{}.json", self.file_stamp())
    }

    pub fn tasklist_file_name(&self) -> String {
        format!("language-integrity-tasks-{}.md", self.file_stamp())
    }

    /// Markdown task list with one unchecked item per finding.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        let _ = writeln!(md, "# Language integrity tasks");
        let _ = writeln!(md);
        let _ = writeln!(md, "Generated: {}", self.generated_at.to_rfc3339());
        let _ = writeln!(
            md,
            "Status: {} ({} findings in {} checked texts)",
            if self.passed() { "PASSED" } else { "FAILED" },
            self.summary.total_findings,
            self.summary.checked_texts
        );
        let _ = writeln!(md);

        if self.findings.is_empty() {
            let _ = writeln!(md, "No findings. Every locale renders in its expected script.");
            return md;
        }

        for locale in Locale::ALL {
            let findings: Vec<&Finding> =
                self.findings.iter().filter(|f| f.locale == locale).collect();
            if findings.is_empty() {
                continue;
            }

            let _ = writeln!(md, "## {} ({})", locale.name(), locale.code());
            let _ = writeln!(md);
            for finding in findings {
                let _ = writeln!(
                    md,
                    "- [ ] `{}` {}: {}",
                    finding.label,
                    describe(&finding.error_kind),
                    finding.snippet.replace('`', "'")
                );
            }
            let _ = writeln!(md);
        }

        md
    }

    /// Write the pretty-printed JSON report into `dir`.
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf, AuditError> {
        let json = serde_json::to_string_pretty(self)?;
        let path = dir.join(self.json_file_name());
        write_file(dir, &path, &json)?;

        info!("Wrote audit report to {}", path.display());
        Ok(path)
    }

    /// Write the Markdown task list into `dir`.
    pub fn write_tasklist(&self, dir: &Path) -> Result<PathBuf, AuditError> {
        let path = dir.join(self.tasklist_file_name());
        write_file(dir, &path, &self.to_markdown())?;

        info!("Wrote audit task list to {}", path.display());
        Ok(path)
    }
}

fn describe(kind: &FindingKind) -> String {
    match kind {
        FindingKind::ForeignScript { script } => format!("{} text", script),
        FindingKind::Untranslated => "identical to English".to_string(),
        FindingKind::PlaceholderMismatch { expected, found } => format!(
            "placeholders {{{}}} expected, found {{{}}}",
            expected.join(", "),
            found.join(", ")
        ),
    }
}

fn write_file(dir: &Path, path: &Path, contents: &str) -> Result<(), AuditError> {
    fs::create_dir_all(dir).map_err(|source| AuditError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(path, contents).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })
}
