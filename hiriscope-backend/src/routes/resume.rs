use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::dto::resume_dto::ResumeUploadResponse;
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::services::question_bank::questions_from_resume;
use crate::services::resume_scorer::analyze_resume;
use crate::services::resume_service::ResumeService;
use crate::services::text_extractor::{extract_text_blocking, DocumentKind};
use crate::AppState;

pub const RESUME_FIELD: &str = "resume";

#[axum::debug_handler]
pub async fn upload_resume(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(RESUME_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((filename, data));
            break;
        }
    }

    let Some((filename, data)) = upload else {
        return Err(Error::BadRequest("No file uploaded".to_string()));
    };
    if filename.is_empty() {
        return Err(Error::BadRequest("No file selected".to_string()));
    }
    if DocumentKind::from_filename(&filename).is_none() {
        return Err(Error::UnsupportedFormat(filename));
    }
    if data.is_empty() {
        return Err(Error::BadRequest("Uploaded file is empty".to_string()));
    }

    tracing::info!(user_id = %user.id, %filename, bytes = data.len(), "analyzing resume");
    let text = extract_text_blocking(filename, data).await?;

    let report = analyze_resume(&text, &mut rand::thread_rng());
    let suggested_questions = questions_from_resume(&text);

    let svc = ResumeService::new(state.pool.clone());
    let saved = svc.save_analysis(user.id, &report).await?;
    tracing::info!(user_id = %user.id, analysis_id = %saved.id, score = report.score, "resume analyzed");

    Ok(Json(ResumeUploadResponse {
        success: true,
        score: report.score,
        skills: report.skills,
        experience_years: report.experience.years,
        experience_source: report.experience.source,
        suggestions: report.suggestions,
        suggested_questions,
    }))
}
