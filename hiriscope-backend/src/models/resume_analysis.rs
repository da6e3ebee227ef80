use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Stored résumé analysis. `skills` and `suggestions` are JSON arrays kept in
/// TEXT columns.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub skills: String,
    pub experience_years: i32,
    pub suggestions: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysisView {
    pub id: Uuid,
    pub score: i32,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub suggestions: Vec<String>,
    pub date: DateTime<Utc>,
}

impl From<ResumeAnalysis> for ResumeAnalysisView {
    fn from(row: ResumeAnalysis) -> Self {
        Self {
            id: row.id,
            score: row.score,
            skills: serde_json::from_str(&row.skills).unwrap_or_default(),
            experience_years: row.experience_years,
            suggestions: serde_json::from_str(&row.suggestions).unwrap_or_default(),
            date: row.date,
        }
    }
}
