//! Embedded HTML templates and the shared template engine.
//!
//! Templates are compiled into the binary and parsed once on first use.
//! Every template name ends in `.html`, so Tera autoescapes every
//! interpolated value with [`escape_html`]. Bundle text and caller data are
//! escaped the same way in every flow.

use crate::email::{escape_html, EmailTokens};
use crate::error::EmailError;
use crate::i18n::{fill, Locale, RenderMetrics};
use serde::Serialize;
use std::sync::OnceLock;
use tera::{Context, Tera};
use tracing::debug;

const TEMPLATES: [(&str, &str); 7] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("cta.html", include_str!("../../templates/cta.html")),
    ("welcome.html", include_str!("../../templates/welcome.html")),
    ("completion.html", include_str!("../../templates/completion.html")),
    ("reminder.html", include_str!("../../templates/reminder.html")),
    ("payment.html", include_str!("../../templates/payment.html")),
    ("footer.html", include_str!("../../templates/footer.html")),
];

static ENGINE: OnceLock<Tera> = OnceLock::new();

fn engine() -> &'static Tera {
    ENGINE.get_or_init(|| {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .expect("embedded email templates must parse");
        tera.set_escape_fn(escape_html);
        tera
    })
}

/// Render a template with a serializable view.
pub(crate) fn render<T: Serialize>(template: &str, view: &T) -> Result<String, EmailError> {
    let context = Context::from_serialize(view)?;
    let html = engine().render(template, &context)?;

    RenderMetrics::global().record_render();
    debug!(template, bytes = html.len(), "Rendered email template");

    Ok(html)
}

/// Values shared by every full-document template (`layout.html`).
#[derive(Debug, Serialize)]
pub(crate) struct LayoutView<'a> {
    pub lang: &'static str,
    pub dir: &'static str,
    pub title: String,
    pub greeting: String,
    pub signature: &'static str,
    pub tokens: &'a EmailTokens,
    pub cta_href: String,
    pub cta_label: String,
}

impl<'a> LayoutView<'a> {
    pub fn new(
        locale: Locale,
        title: String,
        player_name: &str,
        tokens: &'a EmailTokens,
        cta_href: String,
        cta_label: String,
    ) -> Self {
        let bundle = locale.bundle();

        Self {
            lang: locale.html_lang(),
            dir: locale.direction().as_str(),
            title,
            greeting: fill(bundle.greeting, &[("name", player_name)]),
            signature: bundle.team_signature,
            tokens,
            cta_href,
            cta_label,
        }
    }
}
