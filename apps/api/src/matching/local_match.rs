//! Local match scorer — the user-facing keyword coverage percentage.
//!
//! Algorithm:
//! 1. Split the JD into required / preferred sections
//! 2. Every required-section skill is worth 2, every preferred-only skill 1
//! 3. score = round(100 × earned / total)
//! 4. No vocabulary skill anywhere in the JD → word-overlap estimate instead,
//!    flagged with `no_skills_found`

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::matching::percent;
use crate::matching::sections::split_sections;
use crate::matching::skills::{count_in_normalized, extract_skill_frequency};

/// Appended to entries that came from the preferred section.
pub const PREFERRED_MARKER: &str = " ✦";

const REQUIRED_WEIGHT: u32 = 2;
const PREFERRED_WEIGHT: u32 = 1;

/// Fallback score for a JD with no usable words at all.
const NEUTRAL_SCORE: u32 = 50;
/// Fallback words must be longer than this.
const MIN_FALLBACK_WORD_CHARS: usize = 3;

/// Below this the caller offers to tailor the resume.
const TAILORING_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 75 => MatchBand::Strong,
            s if s >= 50 => MatchBand::Moderate,
            _ => MatchBand::Weak,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalMatchResult {
    pub present: Vec<String>,
    pub missing: Vec<String>,
    /// 0 – 100
    pub score: u32,
    /// Distinct skills listed in `present` + `missing`; 0 on the fallback path.
    pub total: usize,
    pub no_skills_found: bool,
}

impl LocalMatchResult {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.score)
    }

    pub fn suggests_tailoring(&self) -> bool {
        self.score < TAILORING_THRESHOLD
    }
}

/// Scores how well `resume_text` covers the skills named in `jd_text`.
pub fn local_match(lexicon: &Lexicon, resume_text: &str, jd_text: &str) -> LocalMatchResult {
    let norm_resume = lexicon.normalize(resume_text);
    let resume_skills = count_in_normalized(lexicon, &norm_resume);
    let sections = split_sections(jd_text);
    let required_source = if sections.required.is_empty() {
        jd_text
    } else {
        sections.required.as_str()
    };
    let required = extract_skill_frequency(lexicon, required_source);
    let preferred = extract_skill_frequency(lexicon, &sections.preferred);

    let mut present = Vec::new();
    let mut missing = Vec::new();
    let mut earned = 0_u32;
    let mut total = 0_u32;

    for name in required.skills() {
        total += REQUIRED_WEIGHT;
        if resume_skills.contains(name) {
            earned += REQUIRED_WEIGHT;
            present.push(name.to_string());
        } else {
            missing.push(name.to_string());
        }
    }

    for name in preferred.skills() {
        if required.contains(name) {
            continue;
        }
        total += PREFERRED_WEIGHT;
        let marked = format!("{name}{PREFERRED_MARKER}");
        if resume_skills.contains(name) {
            earned += PREFERRED_WEIGHT;
            present.push(marked);
        } else {
            missing.push(marked);
        }
    }

    if total == 0 {
        return LocalMatchResult {
            present,
            missing,
            score: word_overlap_score(lexicon, jd_text, &norm_resume),
            total: 0,
            no_skills_found: true,
        };
    }

    let total_keys = present.len() + missing.len();
    LocalMatchResult {
        present,
        missing,
        score: percent(earned as usize, total as usize),
        total: total_keys,
        no_skills_found: false,
    }
}

/// Share of the JD's distinctive words (length > 3, not stop words) that the
/// resume contains as substrings.
fn word_overlap_score(lexicon: &Lexicon, jd_text: &str, norm_resume: &str) -> u32 {
    let norm_jd = lexicon.normalize(jd_text);
    let mut seen = HashSet::new();
    let jd_words: Vec<&str> = norm_jd
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_FALLBACK_WORD_CHARS && !lexicon.is_stop_word(w))
        .filter(|w| seen.insert(*w))
        .collect();

    if jd_words.is_empty() {
        return NEUTRAL_SCORE;
    }
    let hits = jd_words.iter().filter(|w| norm_resume.contains(**w)).count();
    percent(hits, jd_words.len())
}
