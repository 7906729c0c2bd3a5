use serde::{Deserialize, Serialize};

/// Visual tokens shared by every email template.
///
/// Values are CSS colour strings inserted into inline `style` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTokens {
    pub border_color: String,
    pub background_color: String,
    pub cta_color: String,
    pub cta_text_color: String,
    pub text_color: String,
}

impl Default for EmailTokens {
    /// The Amanoba brand palette.
    fn default() -> Self {
        Self {
            border_color: "#e5e7eb".to_string(),
            background_color: "#f5f5f4".to_string(),
            cta_color: "#fab908".to_string(),
            cta_text_color: "#111827".to_string(),
            text_color: "#1f2937".to_string(),
        }
    }
}
