use crate::error::Result;
use crate::models::resume_analysis::ResumeAnalysis;
use crate::services::resume_scorer::ResumeReport;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ResumeService {
    pool: PgPool,
}

impl ResumeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn save_analysis(&self, user_id: Uuid, report: &ResumeReport) -> Result<ResumeAnalysis> {
        let skills = serde_json::to_string(&report.skills)?;
        let suggestions = serde_json::to_string(&report.suggestions)?;

        let row = sqlx::query_as::<_, ResumeAnalysis>(
            r#"
            INSERT INTO resume_analysis (user_id, score, skills, experience_years, suggestions)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, score, skills, experience_years, suggestions, date
            "#,
        )
        .bind(user_id)
        .bind(report.score)
        .bind(skills)
        .bind(report.experience.years as i32)
        .bind(suggestions)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<ResumeAnalysis>> {
        let row = sqlx::query_as::<_, ResumeAnalysis>(
            r#"
            SELECT id, user_id, score, skills, experience_years, suggestions, date
            FROM resume_analysis
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
