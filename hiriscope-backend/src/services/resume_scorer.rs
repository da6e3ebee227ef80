use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::Serialize;

use crate::services::skill_detector::{detect_experience_years, detect_skills, ExperienceEstimate};

pub const MIN_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 98;
pub const MAX_SUGGESTIONS: usize = 5;

const ACTION_WORDS: [&str; 8] = [
    "achieved", "increased", "improved", "reduced", "led", "managed", "developed", "created",
];

const ACHIEVEMENT_VERBS: [&str; 6] = ["achieved", "increased", "improved", "reduced", "led", "managed"];

pub const SUGGESTION_TOO_BRIEF: &str = "Add more details to your resume - it appears too brief";
pub const SUGGESTION_MORE_SKILLS: &str = "Include more technical and soft skills relevant to your field";
pub const SUGGESTION_PROJECTS: &str = "Add specific projects with measurable outcomes";
pub const SUGGESTION_ACTION_VERBS: &str = "Use action verbs and quantify your achievements";
pub const SUGGESTION_SUMMARY: &str = "Add a professional summary section at the top";
pub const SUGGESTION_EDUCATION: &str = "Include your educational background";
pub const SUGGESTION_CONTACT: &str = "Make sure your contact information is clearly visible";
pub const SUGGESTION_LINKS: &str = "Add links to your LinkedIn profile or portfolio";
pub const SUGGESTION_COMPREHENSIVE: &str = "Your resume looks comprehensive - keep it updated regularly";

#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    pub score: i32,
    pub skills: Vec<String>,
    pub experience: ExperienceEstimate,
    pub suggestions: Vec<String>,
}

/// Runs detection, scoring and suggestion rules over extracted résumé text.
pub fn analyze_resume<R: Rng + ?Sized>(text: &str, rng: &mut R) -> ResumeReport {
    let skills = detect_skills(text);
    let experience = detect_experience_years(text, rng);
    let score = compute_resume_score(text, skills.len(), experience.years);
    let suggestions = generate_suggestions(text, skills.len());

    ResumeReport {
        score,
        skills,
        experience,
        suggestions,
    }
}

pub fn compute_resume_score(text: &str, skill_count: usize, experience_years: u32) -> i32 {
    let skill_points = skill_count.saturating_mul(3).min(20) as i32;
    let experience_points = experience_years.saturating_mul(2).min(15) as i32;

    let length = text.chars().count();
    let mut length_points = 0;
    if length > 1000 {
        length_points += 5;
    }
    if length > 2000 {
        length_points += 5;
    }

    let lower = text.to_lowercase();
    let action_points = ACTION_WORDS.iter().filter(|w| lower.contains(*w)).count() as i32;

    (50 + skill_points + experience_points + length_points + action_points).clamp(MIN_SCORE, MAX_SCORE)
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid regex")
    })
}

/// Evaluates every rule in order and keeps the first [`MAX_SUGGESTIONS`] that
/// fire.
pub fn generate_suggestions(text: &str, skill_count: usize) -> Vec<String> {
    let lower = text.to_lowercase();

    let rules: [(bool, &str); 8] = [
        (text.chars().count() < 500, SUGGESTION_TOO_BRIEF),
        (skill_count < 5, SUGGESTION_MORE_SKILLS),
        (!lower.contains("project"), SUGGESTION_PROJECTS),
        (
            !ACHIEVEMENT_VERBS.iter().any(|w| lower.contains(w)),
            SUGGESTION_ACTION_VERBS,
        ),
        (
            !lower.contains("summary") && !lower.contains("objective"),
            SUGGESTION_SUMMARY,
        ),
        (!lower.contains("education"), SUGGESTION_EDUCATION),
        (!email_pattern().is_match(text), SUGGESTION_CONTACT),
        (
            !lower.contains("linkedin") && !lower.contains("github"),
            SUGGESTION_LINKS,
        ),
    ];

    let fired: Vec<String> = rules
        .iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, message)| message.to_string())
        .take(MAX_SUGGESTIONS)
        .collect();

    if fired.is_empty() {
        vec![SUGGESTION_COMPREHENSIVE.to_string()]
    } else {
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FULL_RESUME: &str = "Professional Summary: backend engineer. Contact jane.doe@example.com, \
        linkedin.com/in/janedoe. Education: BSc Computer Science. Led a project that reduced latency \
        and improved uptime. Skills: Python, Java, Docker, Kubernetes, PostgreSQL, AWS.";

    #[test]
    fn base_score_for_empty_text() {
        assert_eq!(compute_resume_score("", 0, 0), 50);
    }

    #[test]
    fn score_components_add_up() {
        // 50 + min(4*3,20)=12 + min(3*2,15)=6 + 2 action words
        let text = "Managed a team and developed tooling";
        assert_eq!(compute_resume_score(text, 4, 3), 70);
    }

    #[test]
    fn length_bonuses() {
        let long = "a".repeat(1001);
        assert_eq!(compute_resume_score(&long, 0, 0), 55);
        let longer = "a".repeat(2001);
        assert_eq!(compute_resume_score(&longer, 0, 0), 60);
    }

    #[test]
    fn score_is_clamped_to_upper_bound() {
        let text = format!("{} {}", ACTION_WORDS.join(" "), "x".repeat(2500));
        assert_eq!(compute_resume_score(&text, 1000, 1000), MAX_SCORE);
    }

    #[test]
    fn score_is_always_in_range() {
        for skills in [0usize, 1, 7, 15, usize::MAX] {
            for years in [0u32, 1, 30, u32::MAX] {
                for len in [0usize, 999, 1500, 5000] {
                    let s = compute_resume_score(&"z".repeat(len), skills, years);
                    assert!((MIN_SCORE..=MAX_SCORE).contains(&s));
                }
            }
        }
    }

    #[test]
    fn short_text_is_flagged_as_too_brief() {
        let filler = "word ".repeat(99);
        for text in ["", "hello", filler.as_str()] {
            let suggestions = generate_suggestions(text, 10);
            assert_eq!(suggestions[0], SUGGESTION_TOO_BRIEF);
        }
    }

    #[test]
    fn suggestions_are_capped_in_rule_order() {
        let suggestions = generate_suggestions("", 0);
        assert_eq!(
            suggestions,
            vec![
                SUGGESTION_TOO_BRIEF,
                SUGGESTION_MORE_SKILLS,
                SUGGESTION_PROJECTS,
                SUGGESTION_ACTION_VERBS,
                SUGGESTION_SUMMARY,
            ]
        );
    }

    #[test]
    fn complete_resume_gets_generic_message() {
        let padded = format!("{} {}", FULL_RESUME, "Delivered features. ".repeat(30));
        let suggestions = generate_suggestions(&padded, 6);
        assert_eq!(suggestions, vec![SUGGESTION_COMPREHENSIVE]);
    }

    #[test]
    fn missing_contact_and_links_are_reported() {
        let text = format!(
            "Summary. Education. A project where I improved things. {}",
            "filler ".repeat(100)
        );
        let suggestions = generate_suggestions(&text, 6);
        assert_eq!(suggestions, vec![SUGGESTION_CONTACT, SUGGESTION_LINKS]);
    }

    #[test]
    fn analyze_combines_detectors() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = analyze_resume("Python developer with 4 years of experience", &mut rng);
        assert_eq!(report.skills, vec!["Python"]);
        assert_eq!(report.experience.years, 4);
        // 50 + 1 skill * 3 + 4 years * 2
        assert_eq!(report.score, 61);
        assert!(report.suggestions.contains(&SUGGESTION_TOO_BRIEF.to_string()));
    }
}
