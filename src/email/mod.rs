//! Transactional email rendering.
//!
//! Each flow is a borrowed parameter struct with `subject()`, `html()` and
//! `render()`. Subjects are plain text. HTML comes from the embedded
//! templates, where every interpolated value is escaped.
//!
//! # Example
//!
//! ```
//! use amanoba_email::email::{EmailTokens, ReminderEmail};
//! use amanoba_email::i18n::Locale;
//!
//! let tokens = EmailTokens::default();
//! let email = ReminderEmail {
//!     locale: Locale::Hu,
//!     player_name: "Anna",
//!     course_name: "Fókusz",
//!     day_number: 3,
//!     course_slug: "FOCUS",
//!     app_url: "https://www.amanoba.com",
//!     tokens: &tokens,
//! };
//!
//! let rendered = email.render().unwrap();
//! assert!(rendered.html.contains("/courses/FOCUS/day/3"));
//! ```

mod completion;
mod escape;
mod footer;
mod links;
mod payment;
mod reminder;
mod templates;
mod tokens;
mod welcome;

pub use completion::{CompletionEmail, LearnerSegment, RecommendedCourse};
pub use escape::escape_html;
pub use footer::{LessonUnsubscribeFooter, PaymentUnsubscribeFooter};
pub use links::{course_url, courses_url, dashboard_url, lesson_url, Tracking};
pub use payment::PaymentConfirmationEmail;
pub use reminder::ReminderEmail;
pub use tokens::EmailTokens;
pub use welcome::WelcomeEmail;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Subject line and HTML body of one rendered email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Every renderable flow, including the two footer fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Welcome,
    Completion,
    Reminder,
    Payment,
    LessonFooter,
    PaymentFooter,
}

impl Flow {
    pub const ALL: [Flow; 6] = [
        Flow::Welcome,
        Flow::Completion,
        Flow::Reminder,
        Flow::Payment,
        Flow::LessonFooter,
        Flow::PaymentFooter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Welcome => "welcome",
            Flow::Completion => "completion",
            Flow::Reminder => "reminder",
            Flow::Payment => "payment",
            Flow::LessonFooter => "lesson_footer",
            Flow::PaymentFooter => "payment_footer",
        }
    }

    /// Unsubscribe footer that belongs under this flow, if any.
    pub fn unsubscribe_footer(&self) -> Option<Flow> {
        match self {
            Flow::Welcome | Flow::Completion | Flow::Reminder => Some(Flow::LessonFooter),
            Flow::Payment => Some(Flow::PaymentFooter),
            Flow::LessonFooter | Flow::PaymentFooter => None,
        }
    }

    /// Footers render an HTML fragment without a subject line.
    pub fn is_fragment(&self) -> bool {
        matches!(self, Flow::LessonFooter | Flow::PaymentFooter)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Flow::ALL
            .into_iter()
            .find(|flow| flow.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<_> = Flow::ALL.iter().map(Flow::as_str).collect();
                format!("Unknown flow '{}'. Expected one of: {}", s, known.join(", "))
            })
    }
}

/// Attach a footer fragment to a rendered document.
///
/// The fragment goes right before the last `</body>`; a body without one
/// gets the fragment appended.
pub fn compose_with_footer(body_html: &str, footer_html: &str) -> String {
    match body_html.rfind("</body>") {
        Some(index) => {
            let mut html = String::with_capacity(body_html.len() + footer_html.len());
            html.push_str(&body_html[..index]);
            html.push_str(footer_html);
            html.push_str(&body_html[index..]);
            html
        }
        None => format!("{}{}", body_html, footer_html),
    }
}
