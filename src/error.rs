use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering an email.
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Errors raised by the language integrity audit.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to render {label} for {locale}: {source}")]
    Render {
        label: String,
        locale: String,
        #[source]
        source: EmailError,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
