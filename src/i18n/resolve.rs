//! Locale string resolution.

use crate::i18n::{Locale, MessageBundle};

/// Resolve a locale tag to its message bundle.
///
/// Never fails: unsupported tags get the English bundle. Use
/// [`Locale::parse`] first when a typo should be treated as an error.
///
/// Each call feeds [`RenderMetrics::global`](crate::i18n::RenderMetrics::global):
/// one resolution, plus one fallback for unsupported tags.
///
/// # Example
///
/// ```
/// use amanoba_email::i18n::resolve;
///
/// assert_eq!(resolve("hu").reminder_cta, "A {day}. nap megnyitása");
/// assert!(std::ptr::eq(resolve("xx"), resolve("en")));
/// ```
pub fn resolve(tag: &str) -> &'static MessageBundle {
    Locale::resolve(tag).bundle()
}
