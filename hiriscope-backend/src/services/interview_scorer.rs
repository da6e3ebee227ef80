//! Interview answer scoring.
//!
//! None of the "analysis" here inspects real signals: the semantic score is a
//! keyword-overlap heuristic with random jitter, and the voice and emotion
//! readings are random draws. [`SimulatedAnalyzer`] packages that behaviour
//! behind [`InterviewAnalyzer`] so a real model can replace it without
//! touching the handlers.
//!
//! The pure helpers take an explicit `Rng` so they can be seeded in tests.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 98;

const STOP_WORDS: [&str; 15] = [
    "about", "yourself", "tell", "what", "your", "have", "been", "that", "with", "this", "from",
    "they", "would", "could", "should",
];

const QUALITY_CONNECTIVES: [&str; 7] = [
    "because",
    "therefore",
    "for example",
    "specifically",
    "additionally",
    "however",
    "moreover",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Confident,
    Happy,
    Neutral,
    Nervous,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [
        Emotion::Confident,
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Nervous,
    ];

    const WEIGHTS: [f64; 4] = [0.30, 0.25, 0.35, 0.10];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Confident => "confident",
            Emotion::Happy => "happy",
            Emotion::Neutral => "neutral",
            Emotion::Nervous => "nervous",
        }
    }

    /// Exact lower-case labels only; any other spelling is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == label)
    }

    pub fn score_bonus(&self) -> i32 {
        match self {
            Emotion::Confident => 10,
            Emotion::Happy => 5,
            Emotion::Neutral => 0,
            Emotion::Nervous => -5,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub emotion: Emotion,
    pub confidence: i32,
}

/// Source of the three sub-scores that feed [`fuse_scores`].
#[cfg_attr(test, mockall::automock)]
pub trait InterviewAnalyzer: Send + Sync {
    fn semantic_score(&self, answer: &str, question: &str) -> i32;
    fn voice_confidence(&self) -> i32;
    /// `image` is the raw (usually base64 data-URL) frame sent by the client.
    fn detect_emotion(&self, image: &str) -> EmotionReading;
}

/// Random-draw analyzer backed by `rand::thread_rng()`. Results are not
/// reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAnalyzer;

impl InterviewAnalyzer for SimulatedAnalyzer {
    fn semantic_score(&self, answer: &str, question: &str) -> i32 {
        semantic_score(answer, question, &mut rand::thread_rng())
    }

    fn voice_confidence(&self) -> i32 {
        voice_confidence(&mut rand::thread_rng())
    }

    fn detect_emotion(&self, _image: &str) -> EmotionReading {
        simulate_emotion(&mut rand::thread_rng())
    }
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w{4,}\b").expect("valid regex"))
}

fn keywords(text: &str) -> HashSet<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Deterministic part of the semantic score, or `None` when the answer is too
/// short to analyse.
pub fn semantic_base(answer: &str, question: &str) -> Option<f64> {
    if answer.trim().chars().count() < 10 {
        return None;
    }

    let answer_lower = answer.to_lowercase();
    let question_keywords = keywords(&question.to_lowercase());
    let answer_keywords = keywords(&answer_lower);

    let keyword_score = if question_keywords.is_empty() {
        50.0
    } else {
        let overlap = question_keywords.intersection(&answer_keywords).count() as f64;
        (overlap / question_keywords.len() as f64 * 100.0).min(100.0)
    };

    let length_score = (answer.split_whitespace().count() * 2).min(30) as f64;

    let quality_hits = QUALITY_CONNECTIVES
        .iter()
        .filter(|c| answer_lower.contains(*c))
        .count();
    let quality_score = (quality_hits * 5).min(20) as f64;

    Some(40.0 + keyword_score * 0.3 + length_score + quality_score)
}

/// Keyword-overlap relevance of `answer` to `question`, with random jitter.
/// Answers shorter than ten characters get a random low score instead.
pub fn semantic_score<R: Rng + ?Sized>(answer: &str, question: &str, rng: &mut R) -> i32 {
    match semantic_base(answer, question) {
        None => rng.gen_range(20..=40),
        Some(base) => {
            let variation = rng.gen_range(-5..=10) as f64;
            ((base + variation) as i32).clamp(MIN_SCORE, MAX_SCORE)
        }
    }
}

pub fn voice_confidence<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(65..=95)
}

pub fn simulate_emotion<R: Rng + ?Sized>(rng: &mut R) -> EmotionReading {
    let emotion = WeightedIndex::new(Emotion::WEIGHTS)
        .map(|dist| Emotion::ALL[dist.sample(rng)])
        .unwrap_or(Emotion::Neutral);
    EmotionReading {
        emotion,
        confidence: rng.gen_range(60..=95),
    }
}

/// Weighted combination of the three sub-scores. Labels that are not one of
/// the four known emotions contribute no bonus.
pub fn fuse_scores(semantic: i32, voice: i32, emotion_label: &str, emotion_confidence: f64) -> i32 {
    let bonus = Emotion::from_label(emotion_label)
        .map(|e| e.score_bonus())
        .unwrap_or(0);
    // Weights are applied in tenths so whole-number inputs truncate exactly.
    let whole = 5 * semantic as i64 + 3 * voice as i64 + 10 * bonus as i64;
    let tenths = whole as f64 + 2.0 * emotion_confidence;
    ((tenths / 10.0).trunc() as i64).clamp(MIN_SCORE as i64, MAX_SCORE as i64) as i32
}

const EXCELLENT: [&str; 3] = [
    "Excellent response! Your answer was comprehensive and well-structured.",
    "Outstanding! You demonstrated strong communication skills.",
    "Great job! Your answer was clear, confident, and relevant.",
];

const GOOD: [&str; 3] = [
    "Good response. Consider adding more specific examples.",
    "Solid answer. Try to elaborate more on your key points.",
    "Well done. Focus on quantifying your achievements next time.",
];

const FAIR: [&str; 3] = [
    "Decent attempt. Work on structuring your answer better.",
    "Fair response. Try to be more specific and confident.",
    "Room for improvement. Practice speaking more clearly.",
];

const NEEDS_WORK: [&str; 3] = [
    "Keep practicing. Focus on answering the question directly.",
    "Needs work. Try to provide more detailed responses.",
    "Continue improving. Structure your thoughts before speaking.",
];

pub const NERVOUS_SUFFIX: &str = " Remember to stay calm and take your time.";
pub const CONFIDENT_SUFFIX: &str = " Your confidence really shows!";

pub fn feedback_templates(score: i32) -> &'static [&'static str; 3] {
    match score {
        s if s >= 85 => &EXCELLENT,
        s if s >= 70 => &GOOD,
        s if s >= 55 => &FAIR,
        _ => &NEEDS_WORK,
    }
}

pub fn generate_feedback<R: Rng + ?Sized>(score: i32, emotion_label: &str, rng: &mut R) -> String {
    let templates = feedback_templates(score);
    let mut feedback = templates.choose(rng).copied().unwrap_or(templates[0]).to_string();

    match Emotion::from_label(emotion_label) {
        Some(Emotion::Nervous) => feedback.push_str(NERVOUS_SUFFIX),
        Some(Emotion::Confident) => feedback.push_str(CONFIDENT_SUFFIX),
        _ => {}
    }
    feedback
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerEvaluation {
    pub score: i32,
    pub semantic_score: i32,
    pub voice_score: i32,
    pub feedback: String,
}

/// Scores a submitted answer using `analyzer` for the sub-scores and the
/// client-reported emotion for the fusion bonus.
pub fn evaluate_answer(
    analyzer: &dyn InterviewAnalyzer,
    question: &str,
    answer: &str,
    emotion_label: &str,
    emotion_confidence: f64,
) -> AnswerEvaluation {
    let semantic_score = analyzer.semantic_score(answer, question);
    let voice_score = analyzer.voice_confidence();
    let score = fuse_scores(semantic_score, voice_score, emotion_label, emotion_confidence);
    let feedback = generate_feedback(score, emotion_label, &mut rand::thread_rng());

    AnswerEvaluation {
        score,
        semantic_score,
        voice_score,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn empty_or_short_answers_score_low() {
        let mut r = rng(1);
        for answer in ["", "   ", "too short", "  nine ch  "] {
            assert_eq!(semantic_base(answer, "Tell me about yourself."), None);
            let s = semantic_score(answer, "Tell me about yourself.", &mut r);
            assert!((20..=40).contains(&s), "{} out of range", s);
        }
    }

    #[test]
    fn question_made_of_stop_words_uses_neutral_keyword_score() {
        // "tell", "about", "yourself" are all stop words.
        let base = semantic_base("I enjoy building things", "Tell me about yourself.").unwrap();
        // 40 + 50*0.3 + 4 words*2
        assert!((base - 63.0).abs() < 1e-9);
    }

    #[test]
    fn keyword_overlap_length_and_quality_contribute() {
        let question = "How do you handle stress and pressure?";
        let answer = "I handle pressure because planning reduces stress, for example with short \
                      daily lists and calm breaks.";
        let base = semantic_base(answer, question).unwrap();
        // handle, stress, pressure all overlap -> 30; 16 words -> 30 (cap);
        // because + for example -> 10
        assert!((base - 110.0).abs() < 1e-9);
        let mut r = rng(3);
        for _ in 0..50 {
            assert_eq!(semantic_score(answer, question, &mut r), MAX_SCORE);
        }
    }

    #[test]
    fn semantic_score_stays_in_bounds() {
        let mut r = rng(9);
        for _ in 0..200 {
            let s = semantic_score("a b c d e f g h i j k", "Why?", &mut r);
            assert!((MIN_SCORE..=MAX_SCORE).contains(&s));
        }
    }

    #[test]
    fn voice_and_emotion_ranges() {
        let mut r = rng(5);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            assert!((65..=95).contains(&voice_confidence(&mut r)));
            let reading = simulate_emotion(&mut r);
            assert!((60..=95).contains(&reading.confidence));
            seen.insert(reading.emotion);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn fusion_weights_and_bonus() {
        // 0.5*80 + 0.3*80 + 0.2*80 = 80
        assert_eq!(fuse_scores(80, 80, "neutral", 80.0), 80);
        assert_eq!(fuse_scores(80, 80, "confident", 80.0), 90);
        assert_eq!(fuse_scores(80, 80, "happy", 80.0), 85);
        assert_eq!(fuse_scores(80, 80, "nervous", 80.0), 75);
        assert_eq!(fuse_scores(80, 80, "bored", 80.0), 80);
    }

    #[test]
    fn fusion_is_clamped() {
        assert_eq!(fuse_scores(0, 0, "nervous", 0.0), MIN_SCORE);
        assert_eq!(fuse_scores(100, 100, "confident", 100.0), MAX_SCORE);
        for semantic in [-1000, 0, 20, 40, 98, 1000] {
            for voice in [0, 65, 95] {
                for conf in [0.0, 60.0, 80.5, 100.0] {
                    for label in ["confident", "happy", "neutral", "nervous", ""] {
                        let s = fuse_scores(semantic, voice, label, conf);
                        assert!((MIN_SCORE..=MAX_SCORE).contains(&s));
                    }
                }
            }
        }
    }

    #[test]
    fn empty_answer_still_fuses_into_range() {
        let mut r = rng(11);
        let semantic = semantic_score("", "Tell me about yourself.", &mut r);
        let voice = voice_confidence(&mut r);
        let fused = fuse_scores(semantic, voice, "neutral", 75.0);
        assert!((MIN_SCORE..=MAX_SCORE).contains(&fused));
    }

    #[test]
    fn feedback_band_and_suffix() {
        let mut r = rng(2);
        let fb = generate_feedback(90, "confident", &mut r);
        assert!(EXCELLENT.iter().any(|t| fb == format!("{}{}", t, CONFIDENT_SUFFIX)));

        let fb = generate_feedback(70, "nervous", &mut r);
        assert!(GOOD.iter().any(|t| fb == format!("{}{}", t, NERVOUS_SUFFIX)));

        let fb = generate_feedback(55, "happy", &mut r);
        assert!(FAIR.contains(&fb.as_str()));

        let fb = generate_feedback(54, "neutral", &mut r);
        assert!(NEEDS_WORK.contains(&fb.as_str()));
    }

    #[test]
    fn emotion_labels_match_exactly() {
        assert_eq!(Emotion::from_label("confident"), Some(Emotion::Confident));
        assert_eq!(Emotion::from_label("nervous"), Some(Emotion::Nervous));
        assert_eq!(Emotion::from_label("Confident"), None);
        assert_eq!(Emotion::from_label(" nervous "), None);
        assert_eq!(Emotion::from_label("angry"), None);
    }

    #[test]
    fn differently_cased_labels_get_no_bonus_or_suffix() {
        assert_eq!(fuse_scores(80, 80, "Confident", 80.0), 80);
        assert_eq!(fuse_scores(80, 80, "NERVOUS", 80.0), 80);

        let mut r = rng(4);
        let fb = generate_feedback(90, "Confident", &mut r);
        assert!(EXCELLENT.contains(&fb.as_str()));
        let fb = generate_feedback(60, "NERVOUS", &mut r);
        assert!(FAIR.contains(&fb.as_str()));
    }

    #[test]
    fn fractional_confidence_is_weighted_before_truncation() {
        // 40 + 24 + 16.1 = 80.1
        assert_eq!(fuse_scores(80, 80, "neutral", 80.5), 80);
        // 35 + 27 + 19.9 + 10 = 91.9
        assert_eq!(fuse_scores(70, 90, "confident", 99.5), 91);
        // 35 + 27 + 20 + 10 = 92 exactly
        assert_eq!(fuse_scores(70, 90, "confident", 100.0), 92);
    }

    #[test]
    fn evaluate_answer_uses_analyzer_subscores() {
        let mut analyzer = MockInterviewAnalyzer::new();
        analyzer
            .expect_semantic_score()
            .withf(|answer, question| answer == "My answer" && question == "Why us?")
            .times(1)
            .return_const(70);
        analyzer.expect_voice_confidence().times(1).return_const(90);

        let eval = evaluate_answer(&analyzer, "Why us?", "My answer", "confident", 75.0);
        // 35 + 27 + 15 + 10
        assert_eq!(eval.score, 87);
        assert_eq!(eval.semantic_score, 70);
        assert_eq!(eval.voice_score, 90);
        assert!(eval.feedback.ends_with(CONFIDENT_SUFFIX));
    }
}
