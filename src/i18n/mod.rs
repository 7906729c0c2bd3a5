//! Internationalization (i18n) module for localized email text.
//!
//! All locale metadata and localized strings live here. Nothing in this
//! module renders HTML; it only answers "which words, in which direction".
//!
//! # Architecture
//!
//! - `locale`: the closed `Locale` enum plus `Direction` and `Script`
//! - `registry`: metadata for every locale (names, script, default direction)
//! - `strings`: the `MessageBundle` struct and placeholder helpers
//! - `bundles`: one `MessageBundle` constant per locale
//! - `resolve`: tag to bundle lookup with English fallback
//! - `metrics`: render and fallback counters
//!
//! # Example
//!
//! ```
//! use amanoba_email::i18n::{fill, resolve, Direction, Locale};
//!
//! let bundle = resolve("hu");
//! let subject = fill(bundle.reminder_subject, &[("day", "3"), ("course", "Fókusz")]);
//! assert!(subject.contains("3. napja"));
//!
//! assert_eq!(Locale::resolve("ar").direction(), Direction::Rtl);
//! ```

mod bundles;
mod locale;
mod metrics;
mod registry;
mod resolve;
mod strings;

pub use locale::{Direction, Locale, Script};
pub use metrics::{MetricsReport, RenderMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolve::resolve;
pub use strings::{fill, placeholders, MessageBundle};
