// Tab and language selection
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten fixed dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    Waste,
    Security,
    Irrigation,
    Transport,
    Business,
    #[serde(rename = "arnona")]
    PropertyTax,
    Water,
    #[serde(rename = "moked")]
    CallCenter,
    #[serde(rename = "monday")]
    ProjectBoards,
    #[serde(rename = "salesforce")]
    SupportCases,
}

impl TabId {
    pub const ALL: [TabId; 10] = [
        TabId::Waste,
        TabId::Security,
        TabId::Irrigation,
        TabId::Transport,
        TabId::Business,
        TabId::PropertyTax,
        TabId::Water,
        TabId::CallCenter,
        TabId::ProjectBoards,
        TabId::SupportCases,
    ];

    /// Identifier used in the `TAB_ID` column of the spreadsheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Waste => "waste",
            TabId::Security => "security",
            TabId::Irrigation => "irrigation",
            TabId::Transport => "transport",
            TabId::Business => "business",
            TabId::PropertyTax => "arnona",
            TabId::Water => "water",
            TabId::CallCenter => "moked",
            TabId::ProjectBoards => "monday",
            TabId::SupportCases => "salesforce",
        }
    }

    /// The two views backed by their own dedicated resources.
    pub fn is_specialized(&self) -> bool {
        matches!(self, TabId::ProjectBoards | TabId::SupportCases)
    }

    /// Case-insensitive comparison against a raw `TAB_ID` cell.
    pub fn matches(&self, cell: &str) -> bool {
        cell.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(pub String);

impl FromStr for TabId {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(tab) = TabId::ALL.iter().find(|t| t.as_str() == normalized) {
            return Ok(*tab);
        }
        match normalized.as_str() {
            "property-tax" => Ok(TabId::PropertyTax),
            "call-center" => Ok(TabId::CallCenter),
            "project-boards" => Ok(TabId::ProjectBoards),
            "support-cases" => Ok(TabId::SupportCases),
            _ => Err(UnknownTab(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }
}

/// Parallel Hebrew/English text, resolved to one language at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localized {
    pub he: String,
    pub en: String,
}

impl Localized {
    pub fn new(he: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            he: he.into(),
            en: en.into(),
        }
    }

    pub fn pick(&self, lang: Language) -> &str {
        match lang {
            Language::He => &self.he,
            Language::En => &self.en,
        }
    }
}
