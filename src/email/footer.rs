//! Unsubscribe footers appended to lesson and payment emails.
//!
//! Footers are HTML fragments, not documents. Use
//! [`compose_with_footer`](crate::email::compose_with_footer) to attach one
//! to a rendered body.

use crate::email::templates::render;
use crate::error::EmailError;
use crate::i18n::{fill, Locale};
use serde::Serialize;

#[derive(Serialize)]
struct FooterView<'a> {
    dir: &'static str,
    lang: &'static str,
    reason: String,
    unsubscribe_url: &'a str,
    unsubscribe_label: &'static str,
}

impl<'a> FooterView<'a> {
    fn new(locale: Locale, reason: String, unsubscribe_url: &'a str) -> Self {
        Self {
            dir: locale.direction().as_str(),
            lang: locale.html_lang(),
            reason,
            unsubscribe_url,
            unsubscribe_label: locale.bundle().footer_unsubscribe,
        }
    }
}

/// Footer for daily lesson and reminder emails.
#[derive(Debug, Clone)]
pub struct LessonUnsubscribeFooter<'a> {
    pub locale: Locale,
    pub unsubscribe_url: &'a str,
    pub course_name: &'a str,
}

impl LessonUnsubscribeFooter<'_> {
    pub fn html(&self) -> Result<String, EmailError> {
        let reason = fill(
            self.locale.bundle().footer_lesson_reason,
            &[("course", self.course_name)],
        );
        render(
            "footer.html",
            &FooterView::new(self.locale, reason, self.unsubscribe_url),
        )
    }
}

/// Footer for payment receipts.
#[derive(Debug, Clone)]
pub struct PaymentUnsubscribeFooter<'a> {
    pub locale: Locale,
    pub unsubscribe_url: &'a str,
}

impl PaymentUnsubscribeFooter<'_> {
    pub fn html(&self) -> Result<String, EmailError> {
        let reason = self.locale.bundle().footer_payment_reason.to_string();
        render(
            "footer.html",
            &FooterView::new(self.locale, reason, self.unsubscribe_url),
        )
    }
}
