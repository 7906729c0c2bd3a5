use crate::email::links::dashboard_url;
use crate::email::templates::{render, LayoutView};
use crate::email::{EmailTokens, RenderedEmail};
use crate::error::EmailError;
use crate::i18n::{fill, Locale};
use serde::Serialize;

/// Sent right after a learner enrolls in a course.
#[derive(Debug, Clone)]
pub struct WelcomeEmail<'a> {
    pub locale: Locale,
    pub player_name: &'a str,
    pub course_name: &'a str,
    pub course_duration_days: u32,
    pub app_url: &'a str,
    pub tokens: &'a EmailTokens,
}

#[derive(Serialize)]
struct WelcomeView<'a> {
    #[serde(flatten)]
    layout: LayoutView<'a>,
    heading: &'static str,
    intro: String,
    tip: &'static str,
}

impl WelcomeEmail<'_> {
    pub fn subject(&self) -> String {
        fill(self.locale.bundle().welcome_subject, &[("course", self.course_name)])
    }

    pub fn html(&self) -> Result<String, EmailError> {
        let bundle = self.locale.bundle();
        let days = self.course_duration_days.to_string();

        let view = WelcomeView {
            layout: LayoutView::new(
                self.locale,
                self.subject(),
                self.player_name,
                self.tokens,
                dashboard_url(self.app_url),
                bundle.welcome_cta.to_string(),
            ),
            heading: bundle.welcome_heading,
            intro: fill(
                bundle.welcome_intro,
                &[("course", self.course_name), ("days", &days)],
            ),
            tip: bundle.welcome_tip,
        };

        render("welcome.html", &view)
    }

    pub fn render(&self) -> Result<RenderedEmail, EmailError> {
        Ok(RenderedEmail {
            subject: self.subject(),
            html: self.html()?,
        })
    }
}
