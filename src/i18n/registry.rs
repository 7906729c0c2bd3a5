//! Locale registry: Single source of truth for locale metadata.
//!
//! This module provides a centralized registry of all supported locales. It
//! uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use crate::i18n::{Direction, Locale, Script};
use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// English name of the locale (e.g., "Hungarian", "Arabic")
    pub name: &'static str,

    /// Native name of the locale (e.g., "Magyar", "العربية")
    pub native_name: &'static str,

    /// Script that localized text is expected to be written in
    pub script: Script,

    /// Default text direction, used when the bundle does not override it
    pub direction: Direction,

    /// Whether this is the fallback locale (only one should be true)
    pub is_canonical: bool,
}

/// Global locale registry singleton.
///
/// Entries are stored in [`Locale::ALL`] order so lookups are a plain index.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get the configuration for a locale.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        &self.locales[locale as usize]
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code parses to a supported locale
    /// * `None` if the code is not supported
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        Locale::parse(code).map(|locale| self.config(locale))
    }

    /// Get all locales.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the canonical (fallback) locale configuration.
    pub fn canonical(&self) -> &LocaleConfig {
        self.config(Locale::CANONICAL)
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn entry(locale: Locale, name: &'static str, native_name: &'static str, script: Script) -> LocaleConfig {
    LocaleConfig {
        locale,
        name,
        native_name,
        script,
        direction: match locale {
            Locale::Ar => Direction::Rtl,
            _ => Direction::Ltr,
        },
        is_canonical: locale == Locale::CANONICAL,
    }
}

/// Default locale configurations, in [`Locale::ALL`] order.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        entry(Locale::En, "English", "English", Script::Latin),
        entry(Locale::Hu, "Hungarian", "Magyar", Script::Latin),
        entry(Locale::Ar, "Arabic", "العربية", Script::Arabic),
        entry(Locale::Hi, "Hindi", "हिन्दी", Script::Devanagari),
        entry(Locale::Id, "Indonesian", "Bahasa Indonesia", Script::Latin),
        entry(Locale::Pt, "Portuguese", "Português", Script::Latin),
        entry(Locale::Vi, "Vietnamese", "Tiếng Việt", Script::Latin),
        entry(Locale::Tr, "Turkish", "Türkçe", Script::Latin),
        entry(Locale::Bg, "Bulgarian", "Български", Script::Cyrillic),
        entry(Locale::Pl, "Polish", "Polski", Script::Latin),
        entry(Locale::Ru, "Russian", "Русский", Script::Cyrillic),
        entry(Locale::Sw, "Swahili", "Kiswahili", Script::Latin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_order_matches_locale_all() {
        let registry = LocaleRegistry::get();
        let all = registry.list_all();

        assert_eq!(all.len(), Locale::ALL.len());
        for (config, locale) in all.iter().zip(Locale::ALL) {
            assert_eq!(config.locale, locale);
        }
    }

    #[test]
    fn test_get_by_code_hungarian() {
        let config = LocaleRegistry::get().get_by_code("hu").unwrap();
        assert_eq!(config.locale, Locale::Hu);
        assert_eq!(config.name, "Hungarian");
        assert_eq!(config.native_name, "Magyar");
        assert_eq!(config.script, Script::Latin);
        assert_eq!(config.direction, Direction::Ltr);
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_arabic_is_rtl() {
        let config = LocaleRegistry::get().get_by_code("ar").unwrap();
        assert_eq!(config.direction, Direction::Rtl);
        assert_eq!(config.script, Script::Arabic);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_exactly_one_canonical() {
        let registry = LocaleRegistry::get();
        let canonical: Vec<_> = registry
            .list_all()
            .into_iter()
            .filter(|config| config.is_canonical)
            .collect();

        assert_eq!(canonical.len(), 1);
        assert_eq!(registry.canonical().locale, Locale::En);
    }

    #[test]
    fn test_is_supported() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_supported("sw"));
        assert!(registry.is_supported("pt-BR"));
        assert!(!registry.is_supported("de"));
    }
}
