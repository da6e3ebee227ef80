use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::interview::ScorePoint;
use crate::models::resume_analysis::ResumeAnalysisView;
use crate::services::resume_service::ResumeService;

pub const CHART_POINTS: i64 = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_interviews: i64,
    pub best_score: i32,
    pub avg_score: i64,
    pub chart_labels: Vec<String>,
    pub chart_scores: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub resume: Option<ResumeAnalysisView>,
}

#[derive(sqlx::FromRow)]
struct ScoreAggregate {
    total: i64,
    best: Option<i32>,
    mean: Option<f64>,
}

impl DashboardStats {
    /// `recent` is newest first, as queried; the chart runs oldest to newest.
    pub fn build(total: i64, best: Option<i32>, mean: Option<f64>, recent: &[ScorePoint]) -> Self {
        let chronological: Vec<&ScorePoint> = recent.iter().rev().collect();
        Self {
            total_interviews: total,
            best_score: best.unwrap_or(0),
            avg_score: mean.map(|m| m.round() as i64).unwrap_or(0),
            chart_labels: chronological.iter().map(|p| chart_label(p.date)).collect(),
            chart_scores: chronological.iter().map(|p| p.score).collect(),
        }
    }
}

fn chart_label(date: DateTime<Utc>) -> String {
    date.format("%m/%d").to_string()
}

#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn dashboard_for_user(&self, user_id: Uuid) -> Result<Dashboard> {
        let aggregate = sqlx::query_as::<_, ScoreAggregate>(
            r#"
            SELECT COUNT(*) AS total, MAX(score) AS best, AVG(score)::float8 AS mean
            FROM interviews
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let recent = sqlx::query_as::<_, ScorePoint>(
            r#"
            SELECT score, date
            FROM interviews
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(CHART_POINTS)
        .fetch_all(&self.pool)
        .await?;

        let resume = ResumeService::new(self.pool.clone())
            .latest_for_user(user_id)
            .await?
            .map(ResumeAnalysisView::from);

        Ok(Dashboard {
            stats: DashboardStats::build(aggregate.total, aggregate.best, aggregate.mean, &recent),
            resume,
        })
    }
}
