use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmotionSample {
    pub id: Uuid,
    pub user_id: Uuid,
    pub interview_id: Uuid,
    pub emotion: String,
    pub confidence: i32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: i64,
}
