pub mod dashboard_service;
pub mod interview_scorer;
pub mod interview_service;
pub mod question_bank;
pub mod resume_scorer;
pub mod resume_service;
pub mod skill_detector;
pub mod text_extractor;
pub mod user_service;
