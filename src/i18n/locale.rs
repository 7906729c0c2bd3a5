//! Locale type: the closed set of locales Amanoba emails are written in.
//!
//! Every locale maps to exactly one [`MessageBundle`] through an exhaustive
//! `match`, so adding a variant without a bundle does not compile.

use crate::error::EmailError;
use crate::i18n::{bundles, LocaleConfig, LocaleRegistry, MessageBundle, RenderMetrics};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Text direction declared on rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing system a locale's text is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    Other,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
            Script::Arabic => "arabic",
            Script::Devanagari => "devanagari",
            Script::Other => "other",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Hu,
    Ar,
    Hi,
    Id,
    Pt,
    Vi,
    Tr,
    Bg,
    Pl,
    Ru,
    Sw,
}

impl Locale {
    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 12] = [
        Locale::En,
        Locale::Hu,
        Locale::Ar,
        Locale::Hi,
        Locale::Id,
        Locale::Pt,
        Locale::Vi,
        Locale::Tr,
        Locale::Bg,
        Locale::Pl,
        Locale::Ru,
        Locale::Sw,
    ];

    /// The locale every unknown tag falls back to.
    pub const CANONICAL: Locale = Locale::En;

    /// Short locale code (e.g., "en", "hu").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hu => "hu",
            Locale::Ar => "ar",
            Locale::Hi => "hi",
            Locale::Id => "id",
            Locale::Pt => "pt",
            Locale::Vi => "vi",
            Locale::Tr => "tr",
            Locale::Bg => "bg",
            Locale::Pl => "pl",
            Locale::Ru => "ru",
            Locale::Sw => "sw",
        }
    }

    /// Parse a locale tag.
    ///
    /// Matching is case-insensitive and only looks at the primary subtag, so
    /// `"pt-BR"` and `"HU_hu"` both parse.
    ///
    /// # Returns
    /// * `Some(Locale)` if the primary subtag is supported
    /// * `None` otherwise
    pub fn parse(tag: &str) -> Option<Locale> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.code() == primary)
    }

    /// Resolve a tag to a locale, falling back to English.
    ///
    /// Never fails. A fallback is logged and counted so that missing
    /// translations show up in metrics instead of disappearing silently.
    pub fn resolve(tag: &str) -> Locale {
        let metrics = RenderMetrics::global();
        metrics.record_resolution();

        match Locale::parse(tag) {
            Some(locale) => locale,
            None => {
                metrics.record_fallback();
                debug!(tag, fallback = Locale::CANONICAL.code(), "Unsupported locale, using fallback bundle");
                Locale::CANONICAL
            }
        }
    }

    /// The message bundle for this locale.
    pub fn bundle(&self) -> &'static MessageBundle {
        match self {
            Locale::En => &bundles::EN,
            Locale::Hu => &bundles::HU,
            Locale::Ar => &bundles::AR,
            Locale::Hi => &bundles::HI,
            Locale::Id => &bundles::ID,
            Locale::Pt => &bundles::PT,
            Locale::Vi => &bundles::VI,
            Locale::Tr => &bundles::TR,
            Locale::Bg => &bundles::BG,
            Locale::Pl => &bundles::PL,
            Locale::Ru => &bundles::RU,
            Locale::Sw => &bundles::SW,
        }
    }

    /// Registry metadata for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(*self)
    }

    /// English name of the locale (e.g., "Hungarian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the locale (e.g., "Magyar").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Script that text in this locale is expected to use.
    pub fn script(&self) -> Script {
        self.config().script
    }

    /// Effective text direction: the bundle override if present, otherwise
    /// the registry default (right-to-left for Arabic only).
    pub fn direction(&self) -> Direction {
        self.bundle()
            .direction
            .unwrap_or(self.config().direction)
    }

    /// Value for the HTML `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        self.bundle().language_tag.unwrap_or(self.code())
    }

    /// Check if this is the canonical (fallback) locale.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = EmailError;

    /// Strict parsing for callers that want a typo to be an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| EmailError::UnsupportedLocale(s.to_string()))
    }
}
