use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::interview_dto::{EmotionRequest, EmotionResponse, SubmitAnswerRequest, SubmitAnswerResponse};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::services::interview_scorer::evaluate_answer;
use crate::services::interview_service::{InterviewService, NewAttempt};
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    payload.validate()?;
    let emotion = payload.emotion.as_str();
    let evaluation = evaluate_answer(
        state.analyzer.as_ref(),
        &payload.question,
        &payload.answer,
        emotion,
        payload.emotion_confidence,
    );

    let svc = InterviewService::new(state.pool.clone());
    let attempt = svc
        .record_attempt(
            user.id,
            NewAttempt {
                question: &payload.question,
                answer: &payload.answer,
                score: evaluation.score,
                emotion,
                feedback: &evaluation.feedback,
            },
        )
        .await?;

    tracing::info!(
        user_id = %user.id,
        interview_id = %attempt.id,
        score = evaluation.score,
        "answer scored"
    );

    Ok(Json(SubmitAnswerResponse {
        success: true,
        score: evaluation.score,
        feedback: evaluation.feedback,
        semantic_score: evaluation.semantic_score,
        voice_score: evaluation.voice_score,
        interview_id: attempt.id,
    }))
}

/// Samples an emotion for the submitted frame and, when `interview_id` is
/// given, logs it against that attempt.
#[axum::debug_handler]
pub async fn process_emotion(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<EmotionRequest>,
) -> Result<Json<EmotionResponse>> {
    let reading = state.analyzer.detect_emotion(&payload.image);

    if let Some(interview_id) = payload.interview_id {
        let svc = InterviewService::new(state.pool.clone());
        svc.record_emotion(user.id, interview_id, reading.emotion.as_str(), reading.confidence)
            .await?;
    }

    Ok(Json(EmotionResponse {
        emotion: reading.emotion,
        confidence: reading.confidence,
    }))
}
