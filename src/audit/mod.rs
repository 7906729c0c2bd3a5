//! Language integrity audit.
//!
//! Renders every flow for every locale with synthetic data, scans the output
//! for letters outside the locale's script and compares the bundles against
//! English. The audit is advisory: findings end up in the report, never in
//! an error.

mod checker;
pub mod fixtures;
mod report;

pub use checker::{audit_bundles, Finding, FindingKind, LanguageIntegrityChecker};
pub use report::{AuditReport, AuditSummary};

use crate::config::EmailConfig;
use crate::email::Flow;
use crate::error::AuditError;
use crate::i18n::{Locale, RenderMetrics};
use chrono::Utc;
use tracing::{info, warn};

/// Run the full audit over all locales and flows.
pub fn run_audit(config: &EmailConfig) -> Result<AuditReport, AuditError> {
    let checker = LanguageIntegrityChecker::new(fixtures::exempt_tokens(config));
    let mut findings = Vec::new();
    let mut checked_texts = 0;

    info!(
        "Auditing {} locales across {} flows",
        Locale::ALL.len(),
        Flow::ALL.len()
    );

    for locale in Locale::ALL {
        let before = findings.len();

        for flow in Flow::ALL {
            let sample =
                fixtures::render_sample(flow, locale, config).map_err(|source| AuditError::Render {
                    label: flow.to_string(),
                    locale: locale.to_string(),
                    source,
                })?;

            for (label, text) in sample.texts() {
                checked_texts += 1;
                findings.extend(checker.check(locale, &label, text));
            }
        }

        info!(
            "Checked {} ({}): {} findings",
            locale.name(),
            locale.code(),
            findings.len() - before
        );
    }

    let bundle_findings = audit_bundles();
    info!("Bundle audit: {} findings", bundle_findings.len());
    findings.extend(bundle_findings);

    for finding in &findings {
        warn!(
            locale = %finding.locale,
            label = %finding.label,
            kind = finding.error_kind.as_str(),
            "Language integrity finding: {}",
            finding.snippet
        );
    }

    let report = AuditReport::new(
        Utc::now(),
        findings,
        checked_texts,
        RenderMetrics::global().report(),
    );

    if report.passed() {
        info!("Language integrity audit passed");
    } else {
        warn!(
            "Language integrity audit found {} issues",
            report.summary.total_findings
        );
    }

    Ok(report)
}
