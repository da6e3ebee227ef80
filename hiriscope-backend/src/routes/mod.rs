pub mod auth;
pub mod health;
pub mod interview;
pub mod pages;
pub mod questions;
pub mod resume;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::require_session;
use crate::middleware::cors::{permissive_cors, with_no_cache};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    let config = crate::config::get_config();

    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout));

    let session_api = Router::new()
        .route("/api/dashboard", get(pages::dashboard))
        .route("/api/interview", get(pages::interview))
        .route("/api/history", get(pages::history))
        .route("/api/results", get(pages::results))
        .route("/api/questions/random", get(questions::random_question))
        .route("/api/questions", get(questions::list_questions))
        .route("/api/interviews/answer", post(interview::submit_answer))
        .route("/api/interviews/emotion", post(interview::process_emotion))
        .route("/api/resumes", post(resume::upload_resume))
        .route_layer(axum::middleware::from_fn(require_session));

    let app = public_api
        .merge(session_api)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_upload_mb * 1024 * 1024))
        .layer(permissive_cors());

    with_no_cache(app).layer(TraceLayer::new_for_http())
}
