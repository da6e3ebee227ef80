use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::dashboard_dto::DashboardResponse;
use crate::dto::interview_dto::{HistoryResponse, InterviewPageResponse, ResultsQuery, ResultsResponse};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::services::dashboard_service::DashboardService;
use crate::services::interview_service::InterviewService;
use crate::services::question_bank::random_question;
use crate::AppState;

#[axum::debug_handler]
pub async fn dashboard(State(state): State<AppState>, user: AuthUser) -> Result<Json<DashboardResponse>> {
    let svc = DashboardService::new(state.pool.clone());
    let dashboard = svc.dashboard_for_user(user.id).await?;
    Ok(Json(DashboardResponse {
        user_name: user.name,
        dashboard,
    }))
}

#[axum::debug_handler]
pub async fn interview(user: AuthUser) -> Json<InterviewPageResponse> {
    Json(InterviewPageResponse {
        user_name: user.name,
        question: random_question(&mut rand::thread_rng()),
    })
}

#[axum::debug_handler]
pub async fn history(State(state): State<AppState>, user: AuthUser) -> Result<Json<HistoryResponse>> {
    let svc = InterviewService::new(state.pool.clone());
    let interviews = svc.list_for_user(user.id).await?;
    Ok(Json(HistoryResponse {
        user_name: user.name,
        interviews,
    }))
}

/// Without `id`, shows the caller's most recent attempt (or nothing).
#[axum::debug_handler]
pub async fn results(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<ResultsResponse>> {
    let svc = InterviewService::new(state.pool.clone());
    let interview = match query.id {
        Some(id) => Some(svc.get_for_user(user.id, id).await?),
        None => svc.latest_for_user(user.id).await?,
    };

    let mut emotion_data = BTreeMap::new();
    if let Some(attempt) = &interview {
        for row in svc.emotion_distribution(attempt.id).await? {
            emotion_data.insert(row.emotion, row.count);
        }
    }

    Ok(Json(ResultsResponse {
        user_name: user.name,
        interview,
        emotion_data,
    }))
}
