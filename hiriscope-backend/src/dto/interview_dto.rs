use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::interview::InterviewAttempt;
use crate::services::interview_scorer::Emotion;

pub const DEFAULT_EMOTION_CONFIDENCE: f64 = 75.0;

fn default_emotion() -> String {
    Emotion::Neutral.as_str().to_string()
}

fn default_emotion_confidence() -> f64 {
    DEFAULT_EMOTION_CONFIDENCE
}

/// Postgres text columns cannot hold NUL.
fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_character");
        err.message = Some("Text must not contain NUL characters.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    #[validate(custom(function = "no_nul"))]
    pub question: String,
    #[serde(default)]
    #[validate(custom(function = "no_nul"))]
    pub answer: String,
    #[serde(default = "default_emotion")]
    #[validate(
        length(max = 50, message = "Emotion label is too long."),
        custom(function = "no_nul")
    )]
    pub emotion: String,
    #[serde(default = "default_emotion_confidence")]
    pub emotion_confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub score: i32,
    pub feedback: String,
    pub semantic_score: i32,
    pub voice_score: i32,
    pub interview_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmotionRequest {
    #[serde(default)]
    pub image: String,
    pub interview_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionResponse {
    pub emotion: Emotion,
    pub confidence: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: &'static [&'static str],
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultsQuery {
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub user_name: String,
    pub interview: Option<InterviewAttempt>,
    /// Sample count per emotion label.
    pub emotion_data: std::collections::BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub user_name: String,
    pub interviews: Vec<InterviewAttempt>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewPageResponse {
    pub user_name: String,
    pub question: &'static str,
}
