//! Funding scheme records

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DprError;
use crate::language::{Language, Localized};

/// Lifecycle stage a scheme is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Idea / restart
    Idea,
    /// Growth / scale
    Growth,
    /// Export ready
    Export,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Idea => "idea",
            Stage::Growth => "growth",
            Stage::Export => "export",
        }
    }

    /// Human-readable label for drop-downs
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Stage::Idea, Language::En) => "Idea / restart",
            (Stage::Idea, Language::Te) => "ఐడియా / రీస్టార్ట్",
            (Stage::Growth, Language::En) => "Growth / scale",
            (Stage::Growth, Language::Te) => "వృద్ధి / విస్తరణ",
            (Stage::Export, Language::En) => "Export ready",
            (Stage::Export, Language::Te) => "ఎగుమతికి సిద్ధం",
        }
    }
}

impl FromStr for Stage {
    type Err = DprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idea" => Ok(Stage::Idea),
            "growth" => Ok(Stage::Growth),
            "export" => Ok(Stage::Export),
            _ => Err(DprError::UnknownStage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single funding or incentive scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    /// Stable identifier
    pub id: String,

    pub name: String,

    pub description: Localized,

    /// Sector tags, e.g. "food processing"
    pub sectors: Vec<String>,

    pub stage: Stage,

    /// Ticket size range as displayed, e.g. "₹10L - ₹50L"
    pub ticket_size: String,

    pub coverage: String,

    /// Data sources the match is traced to, in citation order
    pub sources: Vec<String>,

    /// Portal link per language
    pub links: Localized,

    pub impact: Localized,
}

impl Scheme {
    pub fn has_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|s| s == sector)
    }
}
