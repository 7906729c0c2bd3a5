use crate::email::links::{course_url, courses_url};
use crate::email::templates::{render, LayoutView};
use crate::email::{EmailTokens, RenderedEmail};
use crate::error::EmailError;
use crate::i18n::{fill, Locale};
use serde::Serialize;

/// Receipt sent after a successful course purchase.
///
/// Amount and expiry date arrive already formatted by the caller; the email
/// does not know about currencies or date formats.
#[derive(Debug, Clone)]
pub struct PaymentConfirmationEmail<'a> {
    pub locale: Locale,
    pub player_name: &'a str,
    pub course_name: &'a str,
    /// Without a slug the CTA points at the course catalogue
    pub course_slug: Option<&'a str>,
    pub formatted_amount: &'a str,
    pub formatted_expiry_date: Option<&'a str>,
    pub transaction_id: &'a str,
    pub support_email: &'a str,
    pub app_url: &'a str,
    pub tokens: &'a EmailTokens,
}

#[derive(Serialize)]
struct PaymentView<'a> {
    #[serde(flatten)]
    layout: LayoutView<'a>,
    heading: &'static str,
    body: String,
    amount_label: &'static str,
    amount: &'a str,
    expiry_label: &'static str,
    expiry: Option<&'a str>,
    transaction_label: &'static str,
    transaction_id: &'a str,
    support: String,
}

impl PaymentConfirmationEmail<'_> {
    pub fn subject(&self) -> String {
        fill(
            self.locale.bundle().payment_subject,
            &[("course", self.course_name)],
        )
    }

    pub fn html(&self) -> Result<String, EmailError> {
        let bundle = self.locale.bundle();

        let (cta_href, cta_label) = match self.course_slug {
            Some(slug) if !slug.is_empty() => {
                (course_url(self.app_url, slug), bundle.payment_cta_course)
            }
            _ => (courses_url(self.app_url), bundle.payment_cta_browse),
        };

        let view = PaymentView {
            layout: LayoutView::new(
                self.locale,
                self.subject(),
                self.player_name,
                self.tokens,
                cta_href,
                cta_label.to_string(),
            ),
            heading: bundle.payment_heading,
            body: fill(bundle.payment_body, &[("course", self.course_name)]),
            amount_label: bundle.payment_amount_label,
            amount: self.formatted_amount,
            expiry_label: bundle.payment_expiry_label,
            expiry: self.formatted_expiry_date.filter(|date| !date.is_empty()),
            transaction_label: bundle.payment_transaction_label,
            transaction_id: self.transaction_id,
            support: fill(bundle.payment_support, &[("email", self.support_email)]),
        };

        render("payment.html", &view)
    }

    /// Subject and HTML in one call.
    pub fn render(&self) -> Result<RenderedEmail, EmailError> {
        Ok(RenderedEmail {
            subject: self.subject(),
            html: self.html()?,
        })
    }
}
