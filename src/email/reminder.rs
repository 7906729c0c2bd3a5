use crate::email::links::lesson_url;
use crate::email::templates::{render, LayoutView};
use crate::email::{EmailTokens, RenderedEmail};
use crate::error::EmailError;
use crate::i18n::{fill, Locale};
use serde::Serialize;

/// Daily nudge pointing at the lesson for a given course day.
#[derive(Debug, Clone)]
pub struct ReminderEmail<'a> {
    pub locale: Locale,
    pub player_name: &'a str,
    pub course_name: &'a str,
    pub day_number: u32,
    pub course_slug: &'a str,
    pub app_url: &'a str,
    pub tokens: &'a EmailTokens,
}

#[derive(Serialize)]
struct ReminderView<'a> {
    #[serde(flatten)]
    layout: LayoutView<'a>,
    heading: String,
    body: String,
}

impl ReminderEmail<'_> {
    pub fn subject(&self) -> String {
        let day = self.day_number.to_string();
        fill(
            self.locale.bundle().reminder_subject,
            &[("day", &day), ("course", self.course_name)],
        )
    }

    pub fn html(&self) -> Result<String, EmailError> {
        let bundle = self.locale.bundle();
        let day = self.day_number.to_string();

        let view = ReminderView {
            layout: LayoutView::new(
                self.locale,
                self.subject(),
                self.player_name,
                self.tokens,
                lesson_url(self.app_url, self.course_slug, self.day_number),
                fill(bundle.reminder_cta, &[("day", &day)]),
            ),
            heading: fill(bundle.reminder_heading, &[("day", &day)]),
            body: fill(bundle.reminder_body, &[("course", self.course_name)]),
        };

        render("reminder.html", &view)
    }

    pub fn render(&self) -> Result<RenderedEmail, EmailError> {
        Ok(RenderedEmail {
            subject: self.subject(),
            html: self.html()?,
        })
    }
}
