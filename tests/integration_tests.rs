//! Integration tests for the Amanoba email crate
//!
//! These tests drive the public API the way callers do: resolve a locale,
//! render a flow, attach a footer, and run the language audit end to end.

use serial_test::serial;
use tempfile::TempDir;

use amanoba_email::audit::{self, fixtures, FindingKind, LanguageIntegrityChecker};
use amanoba_email::config::EmailConfig;
use amanoba_email::email::{
    compose_with_footer, CompletionEmail, EmailTokens, Flow, LessonUnsubscribeFooter,
    PaymentConfirmationEmail, RecommendedCourse, ReminderEmail, WelcomeEmail,
};
use amanoba_email::i18n::{resolve, Direction, Locale, RenderMetrics, Script};

// ==================== Test Helpers ====================

fn test_config() -> EmailConfig {
    EmailConfig {
        app_url: "https://example.com".to_string(),
        support_email: "support@amanoba.com".to_string(),
        tokens: EmailTokens::default(),
    }
}

fn payment<'a>(locale: Locale, tokens: &'a EmailTokens) -> PaymentConfirmationEmail<'a> {
    PaymentConfirmationEmail {
        locale,
        player_name: "Test User",
        course_name: "Productivity 2026",
        course_slug: Some("PRODUCTIVITY_2026_TEST"),
        formatted_amount: "$9.99",
        formatted_expiry_date: Some("January 31, 2026"),
        transaction_id: "TX_TEST_123",
        support_email: "support@amanoba.com",
        app_url: "https://example.com",
        tokens,
    }
}

// ==================== Resolver Tests ====================

#[test]
fn test_every_locale_resolves_to_its_own_bundle() {
    for locale in Locale::ALL {
        assert!(std::ptr::eq(resolve(locale.code()), locale.bundle()));
    }
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    assert!(std::ptr::eq(resolve("xx"), resolve("en")));
    assert!(std::ptr::eq(resolve("pt-BR"), resolve("pt")));
}

#[test]
#[serial]
fn test_fallback_is_counted_in_global_metrics() {
    let metrics = RenderMetrics::global();
    let before = metrics.fallbacks();

    resolve("klingon");

    assert!(metrics.fallbacks() > before);
    assert!(metrics.report().resolutions >= 1);
}

#[test]
#[serial]
fn test_supported_tag_is_counted_as_resolution() {
    let metrics = RenderMetrics::global();
    let before = metrics.resolutions();

    resolve("hu");

    assert!(metrics.resolutions() > before);
}

// ==================== Rendering Tests ====================

#[test]
fn test_all_locales_and_flows_render_non_empty() {
    let config = test_config();

    for locale in Locale::ALL {
        for flow in Flow::ALL {
            let sample = fixtures::render_sample(flow, locale, &config).unwrap();
            assert!(!sample.html.trim().is_empty(), "{} {}", flow, locale);
            if let Some(subject) = &sample.subject {
                assert!(!subject.trim().is_empty(), "{} {}", flow, locale);
            }
        }
    }
}

#[test]
fn test_direction_is_rtl_only_for_arabic() {
    let config = test_config();

    for locale in Locale::ALL {
        let expected = if locale == Locale::Ar { "rtl" } else { "ltr" };
        assert_eq!(
            locale.direction(),
            if locale == Locale::Ar { Direction::Rtl } else { Direction::Ltr }
        );

        for flow in Flow::ALL {
            let sample = fixtures::render_sample(flow, locale, &config).unwrap();
            let attribute = format!("dir=\"{}\"", expected);
            assert!(sample.html.contains(&attribute), "{} {}", flow, locale);
            if !flow.is_fragment() {
                let html_tag = format!("<html lang=\"{}\" dir=\"{}\">", locale.html_lang(), expected);
                assert!(sample.html.contains(&html_tag), "{} {}", flow, locale);
            }
        }
    }
}

#[test]
fn test_portuguese_uses_brazilian_language_tag() {
    let tokens = EmailTokens::default();
    let html = payment(Locale::Pt, &tokens).html().unwrap();
    assert!(html.contains("<html lang=\"pt-BR\" dir=\"ltr\">"));
}

#[test]
fn test_caller_data_is_escaped_in_every_flow() {
    let tokens = EmailTokens::default();
    let hostile = "<script>alert(\"x\")</script> & co";
    let courses = vec![RecommendedCourse {
        name: hostile.to_string(),
        course_id: "SAFE".to_string(),
    }];

    let documents = vec![
        WelcomeEmail {
            locale: Locale::En,
            player_name: hostile,
            course_name: hostile,
            course_duration_days: 7,
            app_url: "https://example.com",
            tokens: &tokens,
        }
        .html()
        .unwrap(),
        CompletionEmail {
            locale: Locale::Ar,
            player_name: hostile,
            course_name: hostile,
            app_url: "https://example.com",
            tokens: &tokens,
            recommended_courses: &courses,
            segment: None,
            message_id: None,
        }
        .html()
        .unwrap(),
        ReminderEmail {
            locale: Locale::Ru,
            player_name: hostile,
            course_name: hostile,
            day_number: 1,
            course_slug: "SAFE",
            app_url: "https://example.com",
            tokens: &tokens,
        }
        .html()
        .unwrap(),
        PaymentConfirmationEmail {
            player_name: hostile,
            course_name: hostile,
            transaction_id: hostile,
            ..payment(Locale::Hi, &tokens)
        }
        .html()
        .unwrap(),
        LessonUnsubscribeFooter {
            locale: Locale::Sw,
            unsubscribe_url: "https://example.com/u",
            course_name: hostile,
        }
        .html()
        .unwrap(),
    ];

    for html in documents {
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert(\"x\")"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"));
    }
}

#[test]
fn test_payment_render_round_trip() {
    let tokens = EmailTokens::default();
    let rendered = payment(Locale::En, &tokens).render().unwrap();

    assert!(rendered.subject.contains("Productivity 2026"));
    assert!(rendered.html.contains("$9.99"));
    assert!(rendered.html.contains("TX_TEST_123"));
    assert!(rendered
        .html
        .contains("https://example.com/courses/PRODUCTIVITY_2026_TEST"));
}

#[test]
fn test_hungarian_reminder_links_to_lesson_day() {
    let tokens = EmailTokens::default();
    let html = ReminderEmail {
        locale: Locale::Hu,
        player_name: "Test User",
        course_name: "Productivity 2026",
        day_number: 3,
        course_slug: "X",
        app_url: "https://example.com/",
        tokens: &tokens,
    }
    .html()
    .unwrap();

    assert!(html.contains("https://example.com/courses/X/day/3"));
    assert!(html.contains("A 3. nap megnyitása"));
}

#[test]
fn test_footer_composes_into_reminder() {
    let tokens = EmailTokens::default();
    let body = ReminderEmail {
        locale: Locale::Bg,
        player_name: "Test User",
        course_name: "Productivity 2026",
        day_number: 5,
        course_slug: "X",
        app_url: "https://example.com",
        tokens: &tokens,
    }
    .html()
    .unwrap();
    let footer = LessonUnsubscribeFooter {
        locale: Locale::Bg,
        unsubscribe_url: "https://example.com/unsubscribe?token=t",
        course_name: "Productivity 2026",
    }
    .html()
    .unwrap();

    let html = compose_with_footer(&body, &footer);
    assert_eq!(html.matches("</body>").count(), 1);
    assert!(html.find(&footer).unwrap() < html.find("</body>").unwrap());
}

// ==================== Audit Tests ====================

#[test]
fn test_full_audit_has_no_findings() {
    let report = audit::run_audit(&test_config()).unwrap();

    assert!(report.passed(), "{:#?}", report.findings);
    assert_eq!(report.summary.total_findings, 0);
    assert_eq!(report.summary.by_locale.len(), Locale::ALL.len());
}

#[test]
fn test_checker_flags_cyrillic_in_hungarian_payload() {
    let config = test_config();
    let checker = LanguageIntegrityChecker::new(fixtures::exempt_tokens(&config));
    let sample = fixtures::render_sample(Flow::Welcome, Locale::Hu, &config).unwrap();

    assert!(checker.check(Locale::Hu, "welcome.html", &sample.html).is_empty());

    let injected = sample.html.replace("</h1>", " Добро пожаловать</h1>");
    let findings = checker.check(Locale::Hu, "welcome.html", &injected);

    assert_eq!(findings.len(), 1);
    assert!(findings[0].snippet.contains("Добро пожаловать"));
    assert_eq!(
        findings[0].error_kind,
        FindingKind::ForeignScript {
            script: Script::Cyrillic
        }
    );
}

#[test]
fn test_audit_writes_report_and_tasklist() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("reports/language-integrity");
    let tasklist_dir = temp.path().join("docs/tasks");

    let report = audit::run_audit(&test_config()).unwrap();
    let json_path = report.write_json(&out_dir).unwrap();
    let tasklist_path = report.write_tasklist(&tasklist_dir).unwrap();

    assert!(json_path.starts_with(&out_dir));
    assert!(tasklist_path.starts_with(&tasklist_dir));
    assert!(json_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("language-integrity-"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["passed"], true);
    assert!(json["findings"].as_array().unwrap().is_empty());

    let tasklist = std::fs::read_to_string(&tasklist_path).unwrap();
    assert!(tasklist.contains("Status: PASSED"));
}
