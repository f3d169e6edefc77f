//! Supported display languages and localized text

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DprError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Telugu
    Te,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Te => "te",
        }
    }
}

impl FromStr for Language {
    type Err = DprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "te" | "telugu" => Ok(Language::Te),
            _ => Err(DprError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Text available in every supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub te: String,
}

impl Localized {
    pub fn new(en: &str, te: &str) -> Self {
        Self {
            en: en.to_string(),
            te: te.to_string(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Te => &self.te,
        }
    }
}
