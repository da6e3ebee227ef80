pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::interview_scorer::{InterviewAnalyzer, SimulatedAnalyzer};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub analyzer: Arc<dyn InterviewAnalyzer>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_analyzer(pool, Arc::new(SimulatedAnalyzer))
    }

    pub fn with_analyzer(pool: PgPool, analyzer: Arc<dyn InterviewAnalyzer>) -> Self {
        Self { pool, analyzer }
    }
}
