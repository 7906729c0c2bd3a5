//! Synthetic data used to render every flow during an audit run.
//!
//! Names, identifiers and amounts here legitimately stay in Latin script in
//! every locale, so the checker treats them as exempt tokens.

use crate::config::EmailConfig;
use crate::email::{
    CompletionEmail, Flow, LearnerSegment, LessonUnsubscribeFooter, PaymentConfirmationEmail,
    PaymentUnsubscribeFooter, RecommendedCourse, ReminderEmail, WelcomeEmail,
};
use crate::error::EmailError;
use crate::i18n::Locale;

pub const BRAND: &str = "Amanoba";
pub const PLAYER_NAME: &str = "Test User";
pub const COURSE_NAME: &str = "Productivity 2026";
pub const COURSE_SLUG: &str = "PRODUCTIVITY_2026_TEST";
pub const COURSE_DURATION_DAYS: u32 = 30;
pub const REMINDER_DAY: u32 = 3;
pub const AMOUNT: &str = "$9.99";
pub const EXPIRY_DATE: &str = "January 31, 2026";
pub const TRANSACTION_ID: &str = "TX_TEST_123";
pub const MESSAGE_ID: &str = "AUDIT_MESSAGE_ID";

/// `(name, course_id)` of the courses recommended in the completion email.
pub const RECOMMENDED: [(&str, &str); 2] = [
    ("Deep Work Basics", "DEEP_WORK_101"),
    ("Habit Stacking", "HABITS_201"),
];

/// Strings removed from rendered text before script checks.
pub fn exempt_tokens(config: &EmailConfig) -> Vec<String> {
    let mut tokens: Vec<String> = [
        BRAND,
        PLAYER_NAME,
        COURSE_NAME,
        COURSE_SLUG,
        AMOUNT,
        EXPIRY_DATE,
        TRANSACTION_ID,
        MESSAGE_ID,
    ]
    .iter()
    .map(|token| token.to_string())
    .collect();

    tokens.extend(RECOMMENDED.iter().map(|(name, _)| name.to_string()));
    tokens.push(config.support_email.clone());
    tokens
}

fn recommended_courses() -> Vec<RecommendedCourse> {
    RECOMMENDED
        .iter()
        .map(|(name, course_id)| RecommendedCourse {
            name: name.to_string(),
            course_id: course_id.to_string(),
        })
        .collect()
}

fn unsubscribe_url(config: &EmailConfig) -> String {
    format!("{}/unsubscribe?token=AUDIT_TOKEN", config.app_url)
}

/// One flow rendered with synthetic data.
#[derive(Debug, Clone)]
pub struct Sample {
    pub flow: Flow,
    pub locale: Locale,

    /// `None` for footer fragments
    pub subject: Option<String>,
    pub html: String,
}

impl Sample {
    /// `(label, text)` pairs to scan, labelled `{flow}.subject` / `{flow}.html`.
    pub fn texts(&self) -> Vec<(String, &str)> {
        let mut texts = Vec::with_capacity(2);
        if let Some(subject) = &self.subject {
            texts.push((format!("{}.subject", self.flow), subject.as_str()));
        }
        texts.push((format!("{}.html", self.flow), self.html.as_str()));
        texts
    }
}

/// Render one flow for one locale with synthetic data.
pub fn render_sample(flow: Flow, locale: Locale, config: &EmailConfig) -> Result<Sample, EmailError> {
    let app_url = config.app_url.as_str();
    let tokens = &config.tokens;

    let (subject, html) = match flow {
        Flow::Welcome => {
            let rendered = WelcomeEmail {
                locale,
                player_name: PLAYER_NAME,
                course_name: COURSE_NAME,
                course_duration_days: COURSE_DURATION_DAYS,
                app_url,
                tokens,
            }
            .render()?;
            (Some(rendered.subject), rendered.html)
        }
        Flow::Completion => {
            let recommended = recommended_courses();
            let rendered = CompletionEmail {
                locale,
                player_name: PLAYER_NAME,
                course_name: COURSE_NAME,
                app_url,
                tokens,
                recommended_courses: &recommended,
                segment: Some(LearnerSegment::Beginner),
                message_id: Some(MESSAGE_ID),
            }
            .render()?;
            (Some(rendered.subject), rendered.html)
        }
        Flow::Reminder => {
            let rendered = ReminderEmail {
                locale,
                player_name: PLAYER_NAME,
                course_name: COURSE_NAME,
                day_number: REMINDER_DAY,
                course_slug: COURSE_SLUG,
                app_url,
                tokens,
            }
            .render()?;
            (Some(rendered.subject), rendered.html)
        }
        Flow::Payment => {
            let rendered = PaymentConfirmationEmail {
                locale,
                player_name: PLAYER_NAME,
                course_name: COURSE_NAME,
                course_slug: Some(COURSE_SLUG),
                formatted_amount: AMOUNT,
                formatted_expiry_date: Some(EXPIRY_DATE),
                transaction_id: TRANSACTION_ID,
                support_email: &config.support_email,
                app_url,
                tokens,
            }
            .render()?;
            (Some(rendered.subject), rendered.html)
        }
        Flow::LessonFooter => {
            let url = unsubscribe_url(config);
            let html = LessonUnsubscribeFooter {
                locale,
                unsubscribe_url: &url,
                course_name: COURSE_NAME,
            }
            .html()?;
            (None, html)
        }
        Flow::PaymentFooter => {
            let url = unsubscribe_url(config);
            let html = PaymentUnsubscribeFooter {
                locale,
                unsubscribe_url: &url,
            }
            .html()?;
            (None, html)
        }
    };

    Ok(Sample {
        flow,
        locale,
        subject,
        html,
    })
}
