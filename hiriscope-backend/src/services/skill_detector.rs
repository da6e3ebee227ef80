use std::collections::BTreeSet;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::Serialize;

pub const MAX_SKILLS: usize = 15;
pub const MAX_EXPERIENCE_YEARS: u32 = 30;

/// Scan order matters: detected skills are reported in this order.
pub const SKILLS_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust", "swift",
    "react", "angular", "vue", "node.js", "django", "flask", "spring", "express",
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins",
    "machine learning", "deep learning", "artificial intelligence", "data science",
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy",
    "html", "css", "sass", "tailwind", "bootstrap",
    "git", "github", "gitlab", "bitbucket", "jira", "agile", "scrum",
    "rest api", "graphql", "microservices", "devops", "ci/cd",
    "linux", "unix", "bash", "shell scripting",
    "communication", "leadership", "teamwork", "problem solving", "analytical",
    "project management", "time management", "critical thinking",
    "excel", "powerpoint", "word", "tableau", "power bi",
    "salesforce", "sap", "oracle", "photoshop", "figma", "sketch",
];

/// Returns up to [`MAX_SKILLS`] vocabulary entries found in `text`, formatted
/// for display and without duplicates.
pub fn detect_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for skill in SKILLS_VOCABULARY {
        if !haystack.contains(skill) {
            continue;
        }
        let formatted = format_skill(skill);
        if !found.contains(&formatted) {
            found.push(formatted);
        }
        if found.len() == MAX_SKILLS {
            break;
        }
    }

    found
}

/// Long names are title-cased, short ones (acronyms like "sql", "aws") are
/// upper-cased.
pub fn format_skill(skill: &str) -> String {
    if skill.chars().count() > 3 {
        title_case(skill)
    } else {
        skill.to_uppercase()
    }
}

/// Uppercases every letter that follows a non-letter and lowercases the rest,
/// so "node.js" becomes "Node.Js" and "ci/cd" becomes "Ci/Cd".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceSource {
    /// An explicit "N years ..." phrase.
    Phrase,
    /// Span between the earliest and latest year mentioned.
    YearSpan,
    /// Nothing usable in the text; the value is a random filler guess.
    Guess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEstimate {
    pub years: u32,
    pub source: ExperienceSource,
}

fn experience_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"([0-9]+)\+?\s*years?\s*(?:of\s*)?experience").expect("valid regex"),
            Regex::new(r"experience\s*(?:of\s*)?([0-9]+)\+?\s*years?").expect("valid regex"),
            Regex::new(r"([0-9]+)\+?\s*years?\s*(?:in|of|working)").expect("valid regex"),
        ]
    })
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").expect("valid regex"))
}

/// Estimates years of experience. Always returns a value in
/// `1..=MAX_EXPERIENCE_YEARS`; when the text offers nothing, the value is a
/// uniform guess in `1..=5` drawn from `rng`.
pub fn detect_experience_years<R: Rng + ?Sized>(text: &str, rng: &mut R) -> ExperienceEstimate {
    let lower = text.to_lowercase();

    for pattern in experience_patterns() {
        if let Some(caps) = pattern.captures(&lower) {
            // Digit runs too long for u32 are treated as "a lot".
            let years = caps[1].parse::<u32>().unwrap_or(u32::MAX);
            return ExperienceEstimate {
                years: years.clamp(1, MAX_EXPERIENCE_YEARS),
                source: ExperienceSource::Phrase,
            };
        }
    }

    let years: BTreeSet<u32> = year_pattern()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if let (Some(first), Some(last)) = (years.first(), years.last()) {
        let span = last - first;
        if (1..=40).contains(&span) {
            return ExperienceEstimate {
                years: span.min(MAX_EXPERIENCE_YEARS),
                source: ExperienceSource::YearSpan,
            };
        }
    }

    ExperienceEstimate {
        years: rng.gen_range(1..=5),
        source: ExperienceSource::Guess,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn detects_skills_in_vocabulary_order() {
        let skills = detect_skills("Leadership of a team shipping Docker images built with Python");
        assert_eq!(skills, vec!["Python", "Docker", "Leadership"]);
    }

    #[test]
    fn short_names_are_uppercased_and_long_ones_title_cased() {
        assert_eq!(format_skill("sql"), "SQL");
        assert_eq!(format_skill("c++"), "C++");
        assert_eq!(format_skill("node.js"), "Node.Js");
        assert_eq!(format_skill("ci/cd"), "Ci/Cd");
        assert_eq!(format_skill("scikit-learn"), "Scikit-Learn");
        assert_eq!(format_skill("power bi"), "Power Bi");
    }

    #[test]
    fn caps_at_fifteen_without_duplicates() {
        let text = SKILLS_VOCABULARY.join(" ");
        let skills = detect_skills(&text);
        assert_eq!(skills.len(), MAX_SKILLS);
        let unique: BTreeSet<_> = skills.iter().collect();
        assert_eq!(unique.len(), skills.len());
        assert_eq!(skills[0], "Python");
    }

    #[test]
    fn no_skills_in_empty_text() {
        assert!(detect_skills("").is_empty());
    }

    #[test]
    fn explicit_phrase_wins() {
        let est = detect_experience_years("I have 5 years of experience in backend work", &mut rng());
        assert_eq!(est, ExperienceEstimate { years: 5, source: ExperienceSource::Phrase });
    }

    #[test]
    fn phrase_variants_and_cap() {
        let est = detect_experience_years("Experience of 12 years", &mut rng());
        assert_eq!(est.years, 12);
        let est = detect_experience_years("45+ years working with mainframes", &mut rng());
        assert_eq!(est.years, MAX_EXPERIENCE_YEARS);
        let est = detect_experience_years("0 years experience", &mut rng());
        assert_eq!(est.years, 1);
    }

    #[test]
    fn falls_back_to_year_span() {
        let est = detect_experience_years("Acme Corp 2012 - 2015, Globex 2015 - 2020", &mut rng());
        assert_eq!(est, ExperienceEstimate { years: 8, source: ExperienceSource::YearSpan });
    }

    #[test]
    fn year_span_is_capped() {
        let est = detect_experience_years("Graduated 1985, still going in 2020", &mut rng());
        assert_eq!(est.years, MAX_EXPERIENCE_YEARS);
    }

    #[test]
    fn implausible_span_and_single_year_fall_back_to_guess() {
        for text in ["Born 1901, updated 2099", "Since 2019", "", "no numbers at all"] {
            let est = detect_experience_years(text, &mut rng());
            assert_eq!(est.source, ExperienceSource::Guess);
            assert!((1..=5).contains(&est.years), "{} out of range", est.years);
        }
    }

    #[test]
    fn non_ascii_digits_are_not_read_as_years() {
        // ARABIC-INDIC DIGIT FIVE
        let est = detect_experience_years("\u{0665} years of experience", &mut rng());
        assert_eq!(est.source, ExperienceSource::Guess);
        assert!((1..=5).contains(&est.years));

        let est = detect_experience_years("\u{0661}\u{0669}\u{0669}\u{0660} to 2020", &mut rng());
        assert_eq!(est.source, ExperienceSource::Guess);
    }

    #[test]
    fn always_in_range() {
        let mut r = rng();
        for text in [
            "99999999999999999999 years of experience",
            "1900 2099 1950",
            "experience 3 years",
            "résumé",
        ] {
            let est = detect_experience_years(text, &mut r);
            assert!((1..=MAX_EXPERIENCE_YEARS).contains(&est.years));
        }
    }
}
