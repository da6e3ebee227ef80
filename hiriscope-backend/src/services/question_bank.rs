use rand::seq::SliceRandom;
use rand::Rng;

use crate::services::skill_detector::SKILLS_VOCABULARY;

pub const INTERVIEW_QUESTIONS: &[&str] = &[
    "Tell me about yourself.",
    "What are your greatest strengths?",
    "What are your weaknesses?",
    "Why do you want to work here?",
    "Where do you see yourself in 5 years?",
    "Why should we hire you?",
    "What motivates you?",
    "Tell me about a challenge you've faced and how you overcame it.",
    "Describe a time when you worked as part of a team.",
    "How do you handle stress and pressure?",
    "What is your greatest professional achievement?",
    "Tell me about a time you showed leadership.",
    "How do you prioritize your work?",
    "Describe your ideal work environment.",
    "What are your salary expectations?",
    "Do you have any questions for us?",
    "Why are you leaving your current job?",
    "Tell me about a time you made a mistake.",
    "How do you handle criticism?",
    "What makes you unique?",
    "Describe a time when you disagreed with a supervisor.",
    "How do you stay organized?",
    "What are your career goals?",
    "Tell me about a successful project you led.",
    "How do you handle multiple deadlines?",
    "What do you know about our company?",
    "Describe your work style.",
    "How do you handle conflict with coworkers?",
    "What are you passionate about?",
    "Tell me about a time you went above and beyond.",
    "How do you learn new skills?",
    "What would your previous manager say about you?",
    "Describe a time you had to adapt to change.",
    "How do you measure success?",
    "What's the most difficult decision you've made?",
    "Tell me about your experience with teamwork.",
    "How do you stay updated in your field?",
    "What are your short-term goals?",
    "Describe your communication style.",
    "How do you handle tight deadlines?",
    "What do you enjoy most about your work?",
    "Tell me about a time you solved a complex problem.",
    "How do you build relationships at work?",
    "What skills do you want to develop?",
    "Describe a situation where you showed initiative.",
    "How do you handle ambiguity?",
    "What's your approach to problem-solving?",
    "Tell me about your technical skills.",
    "How do you give feedback to others?",
    "What would you do in your first 30 days here?",
    "Describe a time you received negative feedback.",
    "How do you balance work and personal life?",
    "What's your biggest professional regret?",
    "Tell me about a time you mentored someone.",
    "How do you approach learning new technologies?",
];

const MAX_RESUME_QUESTIONS: usize = 10;
const RESUME_SKILL_PREFIX: usize = 20;

pub fn random_question<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    INTERVIEW_QUESTIONS
        .choose(rng)
        .copied()
        .unwrap_or(INTERVIEW_QUESTIONS[0])
}

/// Tailored practice questions for a résumé: one per early-vocabulary skill it
/// mentions, a few topical ones, then generic closers.
pub fn questions_from_resume(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut questions: Vec<String> = SKILLS_VOCABULARY
        .iter()
        .take(RESUME_SKILL_PREFIX)
        .filter(|skill| lower.contains(*skill))
        .map(|skill| format!("Tell me about your experience with {}.", skill))
        .collect();

    if lower.contains("project") {
        questions.push("Describe a challenging project you worked on.".to_string());
    }
    if lower.contains("team") || lower.contains("collaboration") {
        questions.push("How do you approach teamwork and collaboration?".to_string());
    }
    if lower.contains("leadership") || lower.contains("lead") {
        questions.push("Tell me about your leadership experience.".to_string());
    }

    questions.extend(
        [
            "What interests you most about this role?",
            "How do you handle tight deadlines?",
            "Where do you see yourself in the next few years?",
        ]
        .map(String::from),
    );

    questions.truncate(MAX_RESUME_QUESTIONS);
    questions
}
