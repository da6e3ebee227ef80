use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One submitted answer. Rows are written once and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewAttempt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: String,
    pub score: i32,
    pub emotion: String,
    pub feedback: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScorePoint {
    pub score: i32,
    pub date: DateTime<Utc>,
}
