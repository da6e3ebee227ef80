use serde::Serialize;

use crate::services::skill_detector::ExperienceSource;

#[derive(Debug, Clone, Serialize)]
pub struct ResumeUploadResponse {
    pub success: bool,
    pub score: i32,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub experience_source: ExperienceSource,
    pub suggestions: Vec<String>,
    pub suggested_questions: Vec<String>,
}
