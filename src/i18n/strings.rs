use crate::i18n::Direction;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// All localized strings used by the email renderer for one locale
///
/// Strings are stored as plain text. They never contain markup: the renderer
/// escapes them together with the caller's data. Interpolated values use
/// named placeholders (`{name}`, `{course}`, `{days}`, `{day}`, `{email}`)
/// that are filled with [`fill`].
#[derive(Debug, Clone)]
pub struct MessageBundle {
    /// Overrides the registry's default text direction
    pub direction: Option<Direction>,

    /// Overrides the BCP-47 tag used for the HTML `lang` attribute
    pub language_tag: Option<&'static str>,

    // ==================== Shared ====================
    /// Salutation at the top of every email
    /// Placeholders: {name}
    pub greeting: &'static str,

    /// Sign-off line at the bottom of every email
    pub team_signature: &'static str,

    // ==================== Welcome ====================
    /// Placeholders: {course}
    pub welcome_subject: &'static str,
    pub welcome_heading: &'static str,
    /// Placeholders: {course}, {days}
    pub welcome_intro: &'static str,
    pub welcome_tip: &'static str,
    pub welcome_cta: &'static str,

    // ==================== Completion ====================
    /// Placeholders: {course}
    pub completion_subject: &'static str,
    /// Placeholders: {name}
    pub completion_heading: &'static str,
    /// Placeholders: {course}
    pub completion_body: &'static str,
    pub completion_recommended_heading: &'static str,
    pub completion_cta: &'static str,

    /// Upsell intros, keyed by learner segment. Only rendered when present.
    pub upsell_beginner: Option<&'static str>,
    pub upsell_intermediate: Option<&'static str>,
    pub upsell_advanced: Option<&'static str>,

    // ==================== Reminder ====================
    /// Placeholders: {day}, {course}
    pub reminder_subject: &'static str,
    /// Placeholders: {day}
    pub reminder_heading: &'static str,
    /// Placeholders: {course}
    pub reminder_body: &'static str,
    /// Placeholders: {day}
    pub reminder_cta: &'static str,

    // ==================== Payment ====================
    /// Placeholders: {course}
    pub payment_subject: &'static str,
    pub payment_heading: &'static str,
    /// Placeholders: {course}
    pub payment_body: &'static str,
    pub payment_amount_label: &'static str,
    pub payment_expiry_label: &'static str,
    pub payment_transaction_label: &'static str,
    pub payment_cta_course: &'static str,
    pub payment_cta_browse: &'static str,
    /// Placeholders: {email}
    pub payment_support: &'static str,

    // ==================== Unsubscribe footers ====================
    /// Placeholders: {course}
    pub footer_lesson_reason: &'static str,
    pub footer_payment_reason: &'static str,
    pub footer_unsubscribe: &'static str,
}

impl MessageBundle {
    /// Every text entry of the bundle as `(key, text)` pairs.
    ///
    /// Optional entries are only listed when present.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries = vec![
            ("greeting", self.greeting),
            ("team_signature", self.team_signature),
            ("welcome_subject", self.welcome_subject),
            ("welcome_heading", self.welcome_heading),
            ("welcome_intro", self.welcome_intro),
            ("welcome_tip", self.welcome_tip),
            ("welcome_cta", self.welcome_cta),
            ("completion_subject", self.completion_subject),
            ("completion_heading", self.completion_heading),
            ("completion_body", self.completion_body),
            ("completion_recommended_heading", self.completion_recommended_heading),
            ("completion_cta", self.completion_cta),
            ("reminder_subject", self.reminder_subject),
            ("reminder_heading", self.reminder_heading),
            ("reminder_body", self.reminder_body),
            ("reminder_cta", self.reminder_cta),
            ("payment_subject", self.payment_subject),
            ("payment_heading", self.payment_heading),
            ("payment_body", self.payment_body),
            ("payment_amount_label", self.payment_amount_label),
            ("payment_expiry_label", self.payment_expiry_label),
            ("payment_transaction_label", self.payment_transaction_label),
            ("payment_cta_course", self.payment_cta_course),
            ("payment_cta_browse", self.payment_cta_browse),
            ("payment_support", self.payment_support),
            ("footer_lesson_reason", self.footer_lesson_reason),
            ("footer_payment_reason", self.footer_payment_reason),
            ("footer_unsubscribe", self.footer_unsubscribe),
        ];

        let optional = [
            ("upsell_beginner", self.upsell_beginner),
            ("upsell_intermediate", self.upsell_intermediate),
            ("upsell_advanced", self.upsell_advanced),
        ];
        entries.extend(
            optional
                .into_iter()
                .filter_map(|(key, text)| text.map(|text| (key, text))),
        );

        entries
    }
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap())
}

/// Substitute named placeholders in a bundle string.
///
/// Placeholders without a matching value are left untouched, so a missing
/// argument is visible in the output instead of producing an empty gap.
///
/// # Example
/// ```
/// use amanoba_email::i18n::fill;
///
/// let text = fill("Day {day} of {course}", &[("day", "3"), ("course", "Focus")]);
/// assert_eq!(text, "Day 3 of Focus");
/// ```
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &regex::Captures| {
            let key = &caps[1];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Names of the placeholders used in a bundle string.
pub fn placeholders(template: &str) -> BTreeSet<&str> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}
