//! Preview binary - renders one email flow with sample data
//!
//! Usage:
//!   cargo run --bin preview -- --flow reminder --locale hu
//!   cargo run --bin preview -- --flow payment --locale ar --out /tmp/payment.html
//!   cargo run --bin preview -- --flow completion --locale en --with-footer
//!
//! Optional environment variables:
//! - APP_URL (defaults to https://www.amanoba.com)
//! - SUPPORT_EMAIL (defaults to support@amanoba.com)
//! - EMAIL_*_COLOR colour overrides

use amanoba_email::audit::fixtures;
use amanoba_email::config::EmailConfig;
use amanoba_email::email::{compose_with_footer, Flow};
use amanoba_email::i18n::Locale;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "preview")]
#[command(about = "Render one email flow for one locale with sample data")]
struct Cli {
    /// Flow to render (welcome, completion, reminder, payment, lesson_footer, payment_footer)
    #[arg(short, long, default_value = "welcome")]
    flow: Flow,

    /// Locale code (unknown codes fall back to English)
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Append the matching unsubscribe footer (lesson footer for welcome,
    /// completion and reminder, payment footer for payment)
    #[arg(long)]
    with_footer: bool,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("amanoba_email=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EmailConfig::from_env();
    let locale = Locale::resolve(&cli.locale);

    info!("Rendering {} email for {} ({})", cli.flow, locale.name(), locale.code());

    let sample = fixtures::render_sample(cli.flow, locale, &config)
        .with_context(|| format!("Failed to render {} for {}", cli.flow, locale))?;

    let footer_flow = if cli.with_footer {
        cli.flow.unsubscribe_footer()
    } else {
        None
    };

    let html = match footer_flow {
        Some(footer_flow) => {
            let footer = fixtures::render_sample(footer_flow, locale, &config)
                .with_context(|| format!("Failed to render {} for {}", footer_flow, locale))?;
            compose_with_footer(&sample.html, &footer.html)
        }
        None => sample.html,
    };

    if let Some(subject) = &sample.subject {
        info!("Subject: {}", subject);
    }

    match cli.out {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
