use crate::email::links::{course_url, courses_url, Tracking};
use crate::email::templates::{render, LayoutView};
use crate::email::{EmailTokens, RenderedEmail};
use crate::error::EmailError;
use crate::i18n::{fill, Locale, MessageBundle};
use serde::{Deserialize, Serialize};

/// A course suggested at the end of the completion email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedCourse {
    pub name: String,
    pub course_id: String,
}

/// Learner level used to pick the upsell intro above recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerSegment {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearnerSegment {
    fn upsell_intro(self, bundle: &MessageBundle) -> Option<&'static str> {
        match self {
            LearnerSegment::Beginner => bundle.upsell_beginner,
            LearnerSegment::Intermediate => bundle.upsell_intermediate,
            LearnerSegment::Advanced => bundle.upsell_advanced,
        }
    }
}

/// Sent when a learner finishes the last lesson of a course.
#[derive(Debug, Clone)]
pub struct CompletionEmail<'a> {
    pub locale: Locale,
    pub player_name: &'a str,
    pub course_name: &'a str,
    pub app_url: &'a str,
    pub tokens: &'a EmailTokens,
    pub recommended_courses: &'a [RecommendedCourse],
    pub segment: Option<LearnerSegment>,

    /// Enables click and open tracking when set
    pub message_id: Option<&'a str>,
}

#[derive(Serialize)]
struct CourseLink<'a> {
    name: &'a str,
    href: String,
}

#[derive(Serialize)]
struct CompletionView<'a> {
    #[serde(flatten)]
    layout: LayoutView<'a>,
    heading: String,
    body: String,
    recommended_heading: &'static str,
    upsell_intro: Option<&'static str>,
    recommended: Vec<CourseLink<'a>>,
    open_pixel_url: Option<String>,
}

impl CompletionEmail<'_> {
    pub fn subject(&self) -> String {
        fill(
            self.locale.bundle().completion_subject,
            &[("course", self.course_name)],
        )
    }

    pub fn html(&self) -> Result<String, EmailError> {
        let bundle = self.locale.bundle();
        let tracking = self
            .message_id
            .map(|message_id| Tracking::new(self.app_url, message_id));

        let recommended: Vec<CourseLink> = self
            .recommended_courses
            .iter()
            .map(|course| CourseLink {
                name: &course.name,
                href: Tracking::wrap(
                    tracking.as_ref(),
                    course_url(self.app_url, &course.course_id),
                ),
            })
            .collect();

        // Upsell intro only makes sense above a non-empty list
        let upsell_intro = match (self.segment, recommended.is_empty()) {
            (Some(segment), false) => segment.upsell_intro(bundle),
            _ => None,
        };

        let view = CompletionView {
            layout: LayoutView::new(
                self.locale,
                self.subject(),
                self.player_name,
                self.tokens,
                Tracking::wrap(tracking.as_ref(), courses_url(self.app_url)),
                bundle.completion_cta.to_string(),
            ),
            heading: fill(bundle.completion_heading, &[("name", self.player_name)]),
            body: fill(bundle.completion_body, &[("course", self.course_name)]),
            recommended_heading: bundle.completion_recommended_heading,
            upsell_intro,
            recommended,
            open_pixel_url: tracking.as_ref().map(Tracking::open_pixel_url),
        };

        render("completion.html", &view)
    }

    pub fn render(&self) -> Result<RenderedEmail, EmailError> {
        Ok(RenderedEmail {
            subject: self.subject(),
            html: self.html()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<RecommendedCourse> {
        vec![
            RecommendedCourse {
                name: "Deep Work Basics".to_string(),
                course_id: "DEEP_WORK_101".to_string(),
            },
            RecommendedCourse {
                name: "Habit Stacking".to_string(),
                course_id: "HABITS_201".to_string(),
            },
        ]
    }

    fn email<'a>(
        locale: Locale,
        tokens: &'a EmailTokens,
        recommended: &'a [RecommendedCourse],
    ) -> CompletionEmail<'a> {
        CompletionEmail {
            locale,
            player_name: "Test User",
            course_name: "Productivity 2026",
            app_url: "https://example.com",
            tokens,
            recommended_courses: recommended,
            segment: None,
            message_id: None,
        }
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_subject_contains_course() {
        let tokens = EmailTokens::default();
        let subject = email(Locale::En, &tokens, &[]).subject();
        assert_eq!(subject, "Congratulations, you completed Productivity 2026!");
    }

    #[test]
    fn test_without_recommendations_section_is_omitted() {
        let tokens = EmailTokens::default();
        let html = email(Locale::En, &tokens, &[]).html().unwrap();

        assert!(!html.contains("Recommended next courses"));
        assert!(!html.contains("<ul"));
        assert!(html.contains("href=\"https://example.com/courses\""));
    }

    #[test]
    fn test_recommendations_link_to_course_ids() {
        let tokens = EmailTokens::default();
        let recommended = courses();
        let html = email(Locale::En, &tokens, &recommended).html().unwrap();

        assert!(html.contains("Recommended next courses"));
        assert!(html.contains("href=\"https://example.com/courses/DEEP_WORK_101\""));
        assert!(html.contains(">Habit Stacking</a>"));
    }

    // ==================== Segment Tests ====================

    #[test]
    fn test_english_segment_upsell_shown() {
        let tokens = EmailTokens::default();
        let recommended = courses();
        let mut completion = email(Locale::En, &tokens, &recommended);
        completion.segment = Some(LearnerSegment::Advanced);

        let html = completion.html().unwrap();
        assert!(html.contains("Looking for a challenge?"));
    }

    #[test]
    fn test_segment_upsell_omitted_for_other_locales() {
        let tokens = EmailTokens::default();
        let recommended = courses();
        let mut completion = email(Locale::Hu, &tokens, &recommended);
        completion.segment = Some(LearnerSegment::Beginner);

        let html = completion.html().unwrap();
        assert!(!html.contains("beginner-friendly"));
        assert!(html.contains("Deep Work Basics"));
    }

    #[test]
    fn test_segment_upsell_needs_recommendations() {
        let tokens = EmailTokens::default();
        let mut completion = email(Locale::En, &tokens, &[]);
        completion.segment = Some(LearnerSegment::Intermediate);

        let html = completion.html().unwrap();
        assert!(!html.contains("Ready for the next step?"));
    }

    #[test]
    fn test_segment_deserializes_lowercase() {
        let segment: LearnerSegment = serde_json::from_str("\"beginner\"").unwrap();
        assert_eq!(segment, LearnerSegment::Beginner);
    }

    // ==================== Tracking Tests ====================

    #[test]
    fn test_tracking_wraps_links_and_adds_pixel() {
        let tokens = EmailTokens::default();
        let recommended = courses();
        let mut completion = email(Locale::En, &tokens, &recommended);
        completion.message_id = Some("msg-42");

        let html = completion.html().unwrap();
        assert!(html.contains(
            "href=\"https://example.com/api/email/click/msg-42?url=https%3A%2F%2Fexample.com%2Fcourses%2FDEEP_WORK_101\""
        ));
        assert!(html.contains(
            "href=\"https://example.com/api/email/click/msg-42?url=https%3A%2F%2Fexample.com%2Fcourses\""
        ));
        assert!(html.contains("<img src=\"https://example.com/api/email/open/msg-42\""));
        assert!(!html.contains("href=\"https://example.com/courses"));
    }

    #[test]
    fn test_no_pixel_without_message_id() {
        let tokens = EmailTokens::default();
        let html = email(Locale::En, &tokens, &[]).html().unwrap();
        assert!(!html.contains("/api/email/open/"));
        assert!(!html.contains("<img"));
    }
}
