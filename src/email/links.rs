//! URL builders for links inside emails.
//!
//! Every builder trims trailing slashes from the application URL and
//! percent-encodes path segments that come from the caller.

use urlencoding::encode;

fn base(app_url: &str) -> &str {
    app_url.trim_end_matches('/')
}

/// Learner dashboard.
pub fn dashboard_url(app_url: &str) -> String {
    format!("{}/dashboard", base(app_url))
}

/// Course catalogue.
pub fn courses_url(app_url: &str) -> String {
    format!("{}/courses", base(app_url))
}

/// Landing page of a single course.
pub fn course_url(app_url: &str, course_slug: &str) -> String {
    format!("{}/courses/{}", base(app_url), encode(course_slug))
}

/// Lesson for a given day of a course.
pub fn lesson_url(app_url: &str, course_slug: &str, day_number: u32) -> String {
    format!("{}/day/{}", course_url(app_url, course_slug), day_number)
}

/// Rewrites outbound links through the click-tracking redirect and builds
/// the open-tracking pixel URL for one message.
#[derive(Debug, Clone, Copy)]
pub struct Tracking<'a> {
    app_url: &'a str,
    message_id: &'a str,
}

impl<'a> Tracking<'a> {
    pub fn new(app_url: &'a str, message_id: &'a str) -> Self {
        Self { app_url, message_id }
    }

    /// `{app_url}/api/email/click/{message_id}?url={target}`
    pub fn click_url(&self, target: &str) -> String {
        format!(
            "{}/api/email/click/{}?url={}",
            base(self.app_url),
            encode(self.message_id),
            encode(target)
        )
    }

    /// `{app_url}/api/email/open/{message_id}`
    pub fn open_pixel_url(&self) -> String {
        format!("{}/api/email/open/{}", base(self.app_url), encode(self.message_id))
    }

    /// Wrap a link when tracking is enabled, otherwise return it unchanged.
    pub fn wrap(tracking: Option<&Tracking<'_>>, target: String) -> String {
        match tracking {
            Some(tracking) => tracking.click_url(&target),
            None => target,
        }
    }
}
