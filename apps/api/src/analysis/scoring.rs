//! ATS Scoring — deterministic, side-effect-free heuristic score for resume text.
//!
//! Four independently capped rules, summed and clamped to 100:
//! 1. Contact info (20): email +10, phone +10
//! 2. Professional sections (40): 8 per section heading found
//! 3. Keywords (25): 2 per role/generic keyword found (flat count)
//! 4. Quantifiable achievements (15): 3 per numeric achievement match

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::analysis::models::{AtsFactors, AtsReport, ScoreBreakdown};
use crate::analysis::roles::{resolve_role, GENERIC_KEYWORDS, ROLE_KEYWORDS};

// ────────────────────────────────────────────────────────────────────────────
// Weights and patterns
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_SCORE: u32 = 100;

const CONTACT_POINTS: u32 = 10;
const SECTION_POINTS: u32 = 8;
const SECTION_CAP: u32 = 40;
const KEYWORD_POINTS: u32 = 2;
const KEYWORD_CAP: u32 = 25;
const ACHIEVEMENT_POINTS: u32 = 3;
const ACHIEVEMENT_CAP: u32 = 15;

pub const SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "objective"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

// Optional country code, optional parentheses, any of - . or space between groups
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

// Alternation order matters: "5 million" must not stop at "5 m"
static ACHIEVEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)",
        r"\b\d+(?:\.\d+)?%",
        r"|\b\d+(?:\.\d+)?\s*(?:billion|million|thousand|k|m)\b",
        r"|\$\d[\d,]*(?:\.\d+)?",
        r"|\b\d+\s*(?:years?|months?|weeks?|days?)\b",
        r"|\b\d{1,3}(?:,\d{3})+\b",
    ))
    .expect("valid achievement regex")
});

static SECTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SECTIONS
        .iter()
        .map(|section| (*section, whole_word(section)))
        .collect()
});

/// One compiled pattern per keyword anywhere in the role table.
static KEYWORD_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    ROLE_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter())
        .chain(GENERIC_KEYWORDS)
        .map(|keyword| (*keyword, whole_word(keyword)))
        .collect()
});

/// Case-insensitive whole-word pattern for a literal term.
fn whole_word(term: &str) -> Regex {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .expect("escaped literal is a valid regex")
}

fn contains_keyword(text: &str, keyword: &str) -> bool {
    KEYWORD_PATTERNS
        .get(keyword)
        .map(|re| re.is_match(text))
        .unwrap_or_else(|| whole_word(keyword).is_match(text))
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores resume text against a target role.
pub fn score_resume(text: &str, role: &str) -> AtsReport {
    let mut breakdown = ScoreBreakdown::default();

    // 1. Contact info
    let email = EMAIL_RE.is_match(text);
    let phone = PHONE_RE.is_match(text);
    breakdown.contact = CONTACT_POINTS * (email as u32 + phone as u32);

    // 2. Professional sections
    let sections_found: Vec<String> = SECTION_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(section, _)| section.to_string())
        .collect();
    breakdown.sections = (sections_found.len() as u32 * SECTION_POINTS).min(SECTION_CAP);

    // 3. Role keywords
    let resolved = resolve_role(role);
    let keywords_found: Vec<String> = resolved
        .keywords
        .iter()
        .filter(|kw| contains_keyword(text, kw))
        .map(|kw| kw.to_string())
        .collect();
    breakdown.keywords = (keywords_found.len() as u32 * KEYWORD_POINTS).min(KEYWORD_CAP);

    // 4. Quantifiable achievements
    let quantifiable_achievements = ACHIEVEMENT_RE.find_iter(text).count() as u32;
    breakdown.achievements =
        quantifiable_achievements.saturating_mul(ACHIEVEMENT_POINTS).min(ACHIEVEMENT_CAP);

    let score = breakdown.total().min(MAX_SCORE);

    AtsReport {
        score,
        factors: AtsFactors {
            email,
            phone,
            sections_found,
            keywords_found,
            quantifiable_achievements,
            breakdown,
            matched_role: resolved.matched_role.map(String::from),
            total_score: score,
            role: role.to_string(),
        },
    }
}
