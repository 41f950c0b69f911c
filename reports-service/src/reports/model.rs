//! Report entity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::ids::ReportId;

/// A persisted community report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Store-assigned identifier
    pub id: ReportId,
    /// Short headline, 3 to 100 characters
    pub title: String,
    /// Free-text account of the incident, at least 10 characters
    pub description: String,
    /// When the incident happened
    pub date: DateTime<Utc>,
    /// Where the incident happened, at least 3 characters
    pub location: String,
    /// Set by the store on insert
    pub created_at: DateTime<Utc>,
    /// Set by the store on insert; no operation modifies a report
    pub updated_at: DateTime<Utc>,
}

/// A validated, trimmed report payload ready to be persisted
///
/// Only [`validate`](super::validation::validate) can build one, so every
/// `NewReport` satisfies the field bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    title: String,
    description: String,
    date: DateTime<Utc>,
    location: String,
}

impl NewReport {
    pub(super) fn from_validated(
        title: String,
        description: String,
        date: DateTime<Utc>,
        location: String,
    ) -> Self {
        Self {
            title,
            description,
            date,
            location,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Attach the store-assigned id and creation timestamp
    pub fn into_report(self, id: ReportId, created_at: DateTime<Utc>) -> Report {
        Report {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_into_report_sets_both_timestamps() {
        let date = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let new_report = NewReport::from_validated(
            "Buraco na rua".to_string(),
            "Buraco enorme na esquina".to_string(),
            date,
            "Recife, PE".to_string(),
        );

        let id = ReportId::new();
        let report = new_report.into_report(id.clone(), now);
        assert_eq!(report.id, id);
        assert_eq!(report.created_at, now);
        assert_eq!(report.updated_at, now);
        assert_eq!(report.date, date);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let report = NewReport::from_validated(
            "Poste caído".to_string(),
            "Poste caído bloqueando a via".to_string(),
            now,
            "Curitiba".to_string(),
        )
        .into_report(ReportId::new(), now);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["title"], "Poste caído");
        assert!(json["id"].as_str().unwrap().starts_with("report_"));
    }
}
