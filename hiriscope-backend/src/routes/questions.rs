use axum::Json;

use crate::dto::interview_dto::{QuestionListResponse, QuestionResponse};
use crate::services::question_bank::{random_question as pick_question, INTERVIEW_QUESTIONS};

#[axum::debug_handler]
pub async fn random_question() -> Json<QuestionResponse> {
    Json(QuestionResponse {
        success: true,
        question: pick_question(&mut rand::thread_rng()),
    })
}

#[axum::debug_handler]
pub async fn list_questions() -> Json<QuestionListResponse> {
    Json(QuestionListResponse {
        success: true,
        questions: INTERVIEW_QUESTIONS,
    })
}
