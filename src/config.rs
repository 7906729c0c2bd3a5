use crate::email::EmailTokens;

/// Environment-driven settings shared by the binaries.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Public base URL of the application, without trailing slash
    pub app_url: String,

    /// Address shown in payment emails for support questions
    pub support_email: String,

    /// Colour tokens used by every template
    pub tokens: EmailTokens,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        let defaults = EmailTokens::default();

        Self {
            app_url: std::env::var("APP_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://www.amanoba.com".to_string()),
            support_email: std::env::var("SUPPORT_EMAIL")
                .unwrap_or_else(|_| "support@amanoba.com".to_string()),

            // Colour tokens
            tokens: EmailTokens {
                border_color: env_or("EMAIL_BORDER_COLOR", defaults.border_color),
                background_color: env_or("EMAIL_BACKGROUND_COLOR", defaults.background_color),
                cta_color: env_or("EMAIL_CTA_COLOR", defaults.cta_color),
                cta_text_color: env_or("EMAIL_CTA_TEXT_COLOR", defaults.cta_text_color),
                text_color: env_or("EMAIL_TEXT_COLOR", defaults.text_color),
            },
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "APP_URL",
        "SUPPORT_EMAIL",
        "EMAIL_BORDER_COLOR",
        "EMAIL_BACKGROUND_COLOR",
        "EMAIL_CTA_COLOR",
        "EMAIL_CTA_TEXT_COLOR",
        "EMAIL_TEXT_COLOR",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = EmailConfig::from_env();
        assert_eq!(config.app_url, "https://www.amanoba.com");
        assert_eq!(config.support_email, "support@amanoba.com");
        assert_eq!(config.tokens, EmailTokens::default());
    }

    #[test]
    #[serial]
    fn test_app_url_trailing_slash_trimmed() {
        clear_env();
        std::env::set_var("APP_URL", "https://staging.amanoba.com/");

        let config = EmailConfig::from_env();
        assert_eq!(config.app_url, "https://staging.amanoba.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_color_override() {
        clear_env();
        std::env::set_var("EMAIL_CTA_COLOR", "#123456");
        std::env::set_var("EMAIL_BORDER_COLOR", "   ");

        let config = EmailConfig::from_env();
        assert_eq!(config.tokens.cta_color, "#123456");
        // Blank values fall back to the default palette
        assert_eq!(config.tokens.border_color, EmailTokens::default().border_color);

        clear_env();
    }
}
