//! Rendering metrics and observability module.
//!
//! Tracks how many emails were rendered and how often a locale tag had to
//! fall back to English. A steady fallback count usually means a caller is
//! passing a locale that has no bundle yet.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Rendering counters. Use [`RenderMetrics::global`] in production code.
#[derive(Debug, Default)]
pub struct RenderMetrics {
    /// Number of emails (documents and footer fragments) rendered
    renders: AtomicUsize,

    /// Number of locale tags resolved
    resolutions: AtomicUsize,

    /// Number of locale tags that fell back to the canonical bundle
    fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<RenderMetrics> = OnceLock::new();

impl RenderMetrics {
    /// Create a fresh set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global rendering metrics instance.
    pub fn global() -> &'static RenderMetrics {
        METRICS.get_or_init(RenderMetrics::new)
    }

    /// Record a rendered email or fragment.
    pub fn record_render(&self) {
        self.renders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a locale tag resolution.
    pub fn record_resolution(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fallback to the canonical locale.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolutions = self.resolutions();
        let fallbacks = self.fallbacks();
        let fallback_rate = if resolutions > 0 {
            (fallbacks as f64 / resolutions as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            renders: self.renders(),
            resolutions,
            fallbacks,
            fallback_rate,
        }
    }
}

/// Snapshot of the rendering counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of rendered emails and fragments
    pub renders: usize,

    /// Number of locale tag resolutions
    pub resolutions: usize,

    /// Number of resolutions that fell back to English
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_render() {
        let metrics = RenderMetrics::new();

        assert_eq!(metrics.renders(), 0);
        metrics.record_render();
        metrics.record_render();
        assert_eq!(metrics.renders(), 2);
    }

    #[test]
    fn test_record_resolution_and_fallback() {
        let metrics = RenderMetrics::new();

        metrics.record_resolution();
        metrics.record_resolution();
        metrics.record_fallback();

        assert_eq!(metrics.resolutions(), 2);
        assert_eq!(metrics.fallbacks(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = RenderMetrics::new().report();

        assert_eq!(report.renders, 0);
        assert_eq!(report.resolutions, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_report_fallback_rate() {
        let metrics = RenderMetrics::new();
        for _ in 0..4 {
            metrics.record_resolution();
        }
        metrics.record_fallback();

        let report = metrics.report();
        assert!((report.fallback_rate - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = RenderMetrics::new();
        metrics.record_render();

        let json = serde_json::to_string(&metrics.report()).unwrap();
        assert!(json.contains("\"renders\":1"));
        assert!(json.contains("\"fallback_rate\""));
    }

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(RenderMetrics::global(), RenderMetrics::global()));
    }
}
