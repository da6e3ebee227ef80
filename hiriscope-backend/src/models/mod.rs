pub mod emotion_log;
pub mod interview;
pub mod resume_analysis;
pub mod user;
