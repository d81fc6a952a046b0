// Support case domain model
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CaseStatus {
    #[default]
    New,
    Working,
    Escalated,
    Closed,
}

impl CaseStatus {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "working" => CaseStatus::Working,
            "escalated" => CaseStatus::Escalated,
            "closed" => CaseStatus::Closed,
            _ => CaseStatus::New,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CasePriority {
    High,
    #[default]
    Medium,
    Low,
}

impl CasePriority {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "high" => CasePriority::High,
            "low" => CasePriority::Low,
            _ => CasePriority::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportCase {
    pub id: String,
    pub subject: String,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub origin: String,
    pub created_date: String,
    pub account: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_fields_default() {
        assert_eq!(CaseStatus::from_cell(""), CaseStatus::New);
        assert_eq!(CaseStatus::from_cell("ESCALATED"), CaseStatus::Escalated);
        assert_eq!(CasePriority::from_cell(""), CasePriority::Medium);
        assert_eq!(CasePriority::from_cell("high"), CasePriority::High);
    }
}
