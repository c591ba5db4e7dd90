use serde::Deserialize;

use crate::contact::FORM_PLACEHOLDER;
use crate::reveal::REVEAL_THRESHOLD;
use crate::scroll::SECTION_LOOKAHEAD_PX;
use crate::theme::THEME_KEY;
use crate::tilt::TiltCoefficients;
use crate::typing::TypingTimings;

pub const DEFAULT_SECTIONS: &[&str] = &["about", "skills", "projects", "experience", "contact"];
pub const DEFAULT_CONTACT_EMAIL: &str = "msxaladzegiorgi87@gmail.com";
pub const DEFAULT_RESUME_FILE: &str = "resume.pdf";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reveal threshold must be within 0..=1, got {0}")]
    RevealThreshold(f64),
}

/// Tunables for the page behaviors. Every field has a default, so a page
/// can override any subset of them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_key: String,
    pub sections: Vec<String>,
    pub section_lookahead_px: f64,
    pub reveal_threshold: f64,
    pub typing: TypingTimings,
    pub contact_email: String,
    pub form_placeholder: String,
    pub resume_file: String,
    pub tilt: TiltCoefficients,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_KEY.to_string(),
            sections: DEFAULT_SECTIONS.iter().map(|id| id.to_string()).collect(),
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            typing: TypingTimings::default(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            form_placeholder: FORM_PLACEHOLDER.to_string(),
            resume_file: DEFAULT_RESUME_FILE.to_string(),
            tilt: TiltCoefficients::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if !(0.0..=1.0).contains(&config.reveal_threshold) {
            return Err(ConfigError::RevealThreshold(config.reveal_threshold));
        }
        Ok(config)
    }
}
