//! Script consistency checks for rendered emails and message bundles.
//!
//! Rendered text is first reduced to the words a reader actually sees:
//! markup, entities, URLs, email addresses and exempt tokens are removed.
//! Whatever letters remain must belong to the locale's expected script.

use crate::email::escape_html;
use crate::i18n::{placeholders, Locale, Script};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Characters of context kept on each side of a flagged run.
const CONTEXT_CHARS: usize = 24;

/// What kind of problem a finding describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FindingKind {
    /// Letters from a script the locale does not use
    ForeignScript { script: Script },

    /// Bundle entry identical to the English one
    Untranslated,

    /// Bundle entry whose placeholders differ from the English one
    PlaceholderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::ForeignScript { .. } => "foreign_script",
            FindingKind::Untranslated => "untranslated",
            FindingKind::PlaceholderMismatch { .. } => "placeholder_mismatch",
        }
    }
}

/// One detected inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Where the text came from, e.g. `reminder.html` or `bundle.welcome_cta`
    pub label: String,
    pub snippet: String,
    pub locale: Locale,
    pub error_kind: FindingKind,
}

impl Finding {
    /// Prefix of the label before the first dot (`reminder`, `bundle`, ...).
    pub fn group(&self) -> &str {
        self.label.split('.').next().unwrap_or(&self.label)
    }
}

static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static FOREIGN_REGEXES: OnceLock<Vec<(Script, Regex)>> = OnceLock::new();
static SCRIPT_REGEXES: OnceLock<Vec<(Script, Regex)>> = OnceLock::new();

/// Letters (with their combining marks) that do not belong to `script`.
fn foreign_letters(script: &str) -> String {
    format!(r"[[\p{{L}}\p{{M}}]--[\p{{{}}}\p{{Common}}\p{{Inherited}}]]", script)
}

fn foreign_regex(expected: Script) -> Option<&'static Regex> {
    let regexes = FOREIGN_REGEXES.get_or_init(|| {
        [
            (Script::Latin, "Latin"),
            (Script::Cyrillic, "Cyrillic"),
            (Script::Arabic, "Arabic"),
            (Script::Devanagari, "Devanagari"),
        ]
        .into_iter()
        .map(|(script, name)| {
            let letters = foreign_letters(name);
            let pattern = format!(r"{letters}+(?:\s+{letters}+)*");
            (script, Regex::new(&pattern).unwrap())
        })
        .collect()
    });

    regexes
        .iter()
        .find(|(script, _)| *script == expected)
        .map(|(_, regex)| regex)
}

/// Best guess at the script of a flagged run, from its first letter.
fn detect_script(run: &str) -> Script {
    let regexes = SCRIPT_REGEXES.get_or_init(|| {
        [
            (Script::Latin, r"\p{Latin}"),
            (Script::Cyrillic, r"\p{Cyrillic}"),
            (Script::Arabic, r"\p{Arabic}"),
            (Script::Devanagari, r"\p{Devanagari}"),
        ]
        .into_iter()
        .map(|(script, pattern)| (script, Regex::new(pattern).unwrap()))
        .collect()
    });

    regexes
        .iter()
        .filter_map(|(script, regex)| regex.find(run).map(|m| (m.start(), *script)))
        .min()
        .map(|(_, script)| script)
        .unwrap_or(Script::Other)
}

/// Flags letters outside each locale's expected script.
#[derive(Debug, Clone, Default)]
pub struct LanguageIntegrityChecker {
    /// Sorted longest first so overlapping tokens are removed whole
    exempt_tokens: Vec<String>,

    /// Exempt tokens plus their HTML-escaped forms, longest first
    removals: Vec<String>,
}

impl LanguageIntegrityChecker {
    pub fn new<I, S>(exempt_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut exempt_tokens: Vec<String> = exempt_tokens
            .into_iter()
            .map(Into::into)
            .filter(|token: &String| !token.trim().is_empty())
            .collect();
        exempt_tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        exempt_tokens.dedup();

        // Rendered HTML carries caller data escaped, subjects carry it raw
        let mut removals: Vec<String> = exempt_tokens
            .iter()
            .flat_map(|token| [escape_html(token), token.clone()])
            .collect();
        removals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        removals.dedup();

        Self {
            exempt_tokens,
            removals,
        }
    }

    pub fn exempt_tokens(&self) -> &[String] {
        &self.exempt_tokens
    }

    /// Reduce rendered text to visible words, without exempt tokens.
    pub fn clean(&self, text: &str) -> String {
        let comment = COMMENT_REGEX.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
        let block = BLOCK_REGEX.get_or_init(|| {
            Regex::new(r"(?is)<style\b.*?</style\s*>|<head\b.*?</head\s*>").unwrap()
        });
        let tag = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
        let entity = ENTITY_REGEX
            .get_or_init(|| Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").unwrap());
        let url = URL_REGEX.get_or_init(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").unwrap());
        let email = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").unwrap());
        let whitespace = WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());

        let mut cleaned = comment.replace_all(text, " ").into_owned();
        cleaned = block.replace_all(&cleaned, " ").into_owned();

        // Exempt tokens go before tags and entities, which would split names
        // containing markup characters
        for token in &self.removals {
            cleaned = cleaned.replace(token.as_str(), " ");
        }

        cleaned = tag.replace_all(&cleaned, " ").into_owned();
        cleaned = entity.replace_all(&cleaned, " ").into_owned();
        cleaned = url.replace_all(&cleaned, " ").into_owned();
        cleaned = email.replace_all(&cleaned, " ").into_owned();

        whitespace.replace_all(&cleaned, " ").trim().to_string()
    }

    /// Scan `text` for runs of foreign-script words.
    ///
    /// Every maximal run yields one finding. Locales whose expected script
    /// is [`Script::Other`] are not checked.
    pub fn check(&self, locale: Locale, label: &str, text: &str) -> Vec<Finding> {
        let Some(regex) = foreign_regex(locale.script()) else {
            return Vec::new();
        };

        let cleaned = self.clean(text);

        regex
            .find_iter(&cleaned)
            .map(|m| Finding {
                label: label.to_string(),
                snippet: snippet(&cleaned, m.start(), m.end()),
                locale,
                error_kind: FindingKind::ForeignScript {
                    script: detect_script(m.as_str()),
                },
            })
            .collect()
    }
}

/// The flagged run with up to [`CONTEXT_CHARS`] characters on each side.
fn snippet(text: &str, start: usize, end: usize) -> String {
    let before: Vec<char> = text[..start].chars().rev().take(CONTEXT_CHARS).collect();
    let before: String = before.into_iter().rev().collect();
    let after: String = text[end..].chars().take(CONTEXT_CHARS).collect();

    format!("{}{}{}", before, &text[start..end], after)
        .trim()
        .to_string()
}

/// Compare every non-canonical bundle against English.
///
/// Flags entries that are identical to English (untranslated) and entries
/// whose placeholder set differs from English.
pub fn audit_bundles() -> Vec<Finding> {
    let canonical = Locale::CANONICAL.bundle().entries();
    let mut findings = Vec::new();

    for locale in Locale::ALL.into_iter().filter(|locale| !locale.is_canonical()) {
        for (key, text) in locale.bundle().entries() {
            let Some((_, english)) = canonical.iter().find(|(english_key, _)| *english_key == key)
            else {
                continue;
            };

            let label = format!("bundle.{}", key);

            if text == *english {
                findings.push(Finding {
                    label: label.clone(),
                    snippet: text.to_string(),
                    locale,
                    error_kind: FindingKind::Untranslated,
                });
            }

            let expected = placeholders(english);
            let found = placeholders(text);
            if expected != found {
                findings.push(Finding {
                    label,
                    snippet: text.to_string(),
                    locale,
                    error_kind: FindingKind::PlaceholderMismatch {
                        expected: expected.iter().map(|p| p.to_string()).collect(),
                        found: found.iter().map(|p| p.to_string()).collect(),
                    },
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> LanguageIntegrityChecker {
        LanguageIntegrityChecker::new(["Amanoba", "Test User", "Productivity 2026"])
    }

    // ==================== Cleaning Tests ====================

    #[test]
    fn test_clean_strips_markup() {
        let html = r#"<!DOCTYPE html><html><head><title>Kurzus</title><style>p { color: red; }</style></head>
<body><!-- Привет --><p class="x">Szia &amp; üdv</p></body></html>"#;
        assert_eq!(checker().clean(html), "Szia üdv");
    }

    #[test]
    fn test_clean_strips_urls_and_emails() {
        let text = "Írj nekünk: support@amanoba.com vagy https://www.amanoba.com/courses?x=1";
        assert_eq!(checker().clean(text), "Írj nekünk: vagy");
    }

    #[test]
    fn test_clean_removes_longest_token_first() {
        let checker = LanguageIntegrityChecker::new(["Test", "Test User"]);
        assert_eq!(checker.exempt_tokens(), ["Test User", "Test"]);
        assert_eq!(checker.clean("Hi Test User and Test"), "Hi and");
    }

    #[test]
    fn test_escaped_exempt_token_removed_from_html() {
        let name = "R&D \"Labs\"";
        let checker = LanguageIntegrityChecker::new(["Amanoba", name]);
        let html = format!("<p>Продолжайте курс {} сегодня.</p>", escape_html(name));

        assert!(checker.check(Locale::Ru, "reminder.html", &html).is_empty());
        assert_eq!(checker.clean(&html), "Продолжайте курс сегодня.");
    }

    #[test]
    fn test_raw_exempt_token_removed_from_subject() {
        let name = "R&D \"Labs\" <2026>";
        let checker = LanguageIntegrityChecker::new([name]);
        let subject = format!("День 3 курса {} ждёт вас", name);

        assert!(checker.check(Locale::Ru, "reminder.subject", &subject).is_empty());
    }

    #[test]
    fn test_blank_exempt_tokens_ignored() {
        let checker = LanguageIntegrityChecker::new(["", "  ", "Amanoba"]);
        assert_eq!(checker.exempt_tokens(), ["Amanoba"]);
    }

    // ==================== Script Tests ====================

    #[test]
    fn test_clean_hungarian_has_no_findings() {
        let text = "<p>Szia Test User, a(z) Productivity 2026 kurzus 3. napja vár rád!</p>";
        assert!(checker().check(Locale::Hu, "reminder.html", text).is_empty());
    }

    #[test]
    fn test_cyrillic_in_hungarian_is_flagged() {
        let text = "<p>Folytasd a sorozatot, Привет мир, ma is.</p>";
        let findings = checker().check(Locale::Hu, "reminder.html", text);

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.label, "reminder.html");
        assert_eq!(finding.locale, Locale::Hu);
        assert!(finding.snippet.contains("Привет мир"));
        assert!(finding.snippet.contains("sorozatot"));
        assert_eq!(
            finding.error_kind,
            FindingKind::ForeignScript {
                script: Script::Cyrillic
            }
        );
    }

    #[test]
    fn test_separate_runs_give_separate_findings() {
        let text = "Урок готов. Lesson ready. Ден добър. Day two.";
        let findings = checker().check(Locale::Ru, "x.subject", text);

        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| matches!(
            f.error_kind,
            FindingKind::ForeignScript { script: Script::Latin }
        )));
    }

    #[test]
    fn test_brand_is_exempt_in_cyrillic() {
        let text = "Команда Amanoba";
        assert!(checker().check(Locale::Ru, "welcome.html", text).is_empty());
        assert_eq!(LanguageIntegrityChecker::default().check(Locale::Ru, "welcome.html", text).len(), 1);
    }

    #[test]
    fn test_arabic_and_devanagari_marks_allowed() {
        assert!(checker().check(Locale::Ar, "a", "مرحبًا بك، لقد سجّلت").is_empty());
        assert!(checker().check(Locale::Hi, "a", "नमस्ते, आपका स्वागत है।").is_empty());
    }

    #[test]
    fn test_latin_in_arabic_is_flagged() {
        let findings = checker().check(Locale::Ar, "welcome.html", "مرحبًا Welcome back");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].snippet.contains("Welcome back"));
    }

    #[test]
    fn test_vietnamese_diacritics_are_latin() {
        let text = "Bài học ngày 3 của bạn đã sẵn sàng";
        assert!(checker().check(Locale::Vi, "reminder.html", text).is_empty());
    }

    #[test]
    fn test_digits_and_punctuation_allowed() {
        assert!(checker().check(Locale::Bg, "x", "Ден 3: 100% (готово)!").is_empty());
    }

    #[test]
    fn test_snippet_context_is_bounded() {
        let prefix = "a".repeat(100);
        let text = format!("{} Привет {}", prefix, prefix);
        let findings = checker().check(Locale::Hu, "x", &text);

        assert_eq!(findings.len(), 1);
        assert!(findings[0].snippet.chars().count() <= "Привет".chars().count() + 2 * CONTEXT_CHARS);
    }

    #[test]
    fn test_finding_group() {
        let finding = Finding {
            label: "payment_footer.html".to_string(),
            snippet: String::new(),
            locale: Locale::En,
            error_kind: FindingKind::Untranslated,
        };
        assert_eq!(finding.group(), "payment_footer");
    }

    #[test]
    fn test_finding_serializes_kind() {
        let finding = Finding {
            label: "welcome.html".to_string(),
            snippet: "Привет".to_string(),
            locale: Locale::Hu,
            error_kind: FindingKind::ForeignScript {
                script: Script::Cyrillic,
            },
        };

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["locale"], "hu");
        assert_eq!(json["error_kind"]["type"], "foreign_script");
        assert_eq!(json["error_kind"]["script"], "cyrillic");
    }

    // ==================== Bundle Audit Tests ====================

    #[test]
    fn test_shipped_bundles_pass_audit() {
        let findings = audit_bundles();
        assert!(findings.is_empty(), "{:#?}", findings);
    }
}
