use crate::error::{Error, Result};
use crate::models::emotion_log::{EmotionCount, EmotionSample};
use crate::models::interview::InterviewAttempt;
use sqlx::PgPool;
use uuid::Uuid;

pub struct NewAttempt<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub score: i32,
    pub emotion: &'a str,
    pub feedback: &'a str,
}

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record_attempt(&self, user_id: Uuid, attempt: NewAttempt<'_>) -> Result<InterviewAttempt> {
        let row = sqlx::query_as::<_, InterviewAttempt>(
            r#"
            INSERT INTO interviews (user_id, question, answer, score, emotion, feedback)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, question, answer, score, emotion, feedback, date
            "#,
        )
        .bind(user_id)
        .bind(attempt.question)
        .bind(attempt.answer)
        .bind(attempt.score)
        .bind(attempt.emotion)
        .bind(attempt.feedback)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<InterviewAttempt>> {
        let rows = sqlx::query_as::<_, InterviewAttempt>(
            r#"
            SELECT id, user_id, question, answer, score, emotion, feedback, date
            FROM interviews
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Attempts owned by another user are reported as missing.
    pub async fn get_for_user(&self, user_id: Uuid, attempt_id: Uuid) -> Result<InterviewAttempt> {
        sqlx::query_as::<_, InterviewAttempt>(
            r#"
            SELECT id, user_id, question, answer, score, emotion, feedback, date
            FROM interviews
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(attempt_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<InterviewAttempt>> {
        let row = sqlx::query_as::<_, InterviewAttempt>(
            r#"
            SELECT id, user_id, question, answer, score, emotion, feedback, date
            FROM interviews
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

    /// Stores one emotion sample against an attempt the caller owns.
    pub async fn record_emotion(
        &self,
        user_id: Uuid,
        attempt_id: Uuid,
        emotion: &str,
        confidence: i32,
    ) -> Result<EmotionSample> {
        self.get_for_user(user_id, attempt_id).await?;

        let row = sqlx::query_as::<_, EmotionSample>(
            r#"
            INSERT INTO emotion_logs (user_id, interview_id, emotion, confidence)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, interview_id, emotion, confidence, date
            "#,
        )
        .bind(user_id)
        .bind(attempt_id)
        .bind(emotion)
        .bind(confidence)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn emotion_distribution(&self, attempt_id: Uuid) -> Result<Vec<EmotionCount>> {
        let rows = sqlx::query_as::<_, EmotionCount>(
            r#"
            SELECT emotion, COUNT(*) AS count
            FROM emotion_logs
            WHERE interview_id = $1
            GROUP BY emotion
            ORDER BY emotion
            "#,
        )
        .bind(attempt_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
