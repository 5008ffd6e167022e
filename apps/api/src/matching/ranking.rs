#![allow(dead_code)]

//! Resume ranking scorer — five-factor score used to pick the best resume for a JD.
//!
//! Never shown to the user directly. Factors and default weights:
//!
//! | factor               | weight |
//! |----------------------|--------|
//! | role match           | 0.40   |
//! | required coverage    | 0.30   |
//! | distinctive coverage | 0.20   |
//! | canonical title      | 0.07   |
//! | bigram overlap       | 0.03   |
//!
//! Role identity and required skills dominate so a resume for the wrong role
//! cannot win on incidental phrase overlap.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::matching::bigrams::content_bigrams;
use crate::matching::percent;
use crate::matching::roles::detect_role_normalized;
use crate::matching::sections::split_sections;
use crate::matching::skills::{count_in_normalized, extract_skill_frequency};

/// Sub-score used when one side gives no signal to judge by.
const NEUTRAL: f64 = 50.0;
const FULL: f64 = 100.0;
const NONE: f64 = 0.0;

/// Title words must be longer than this.
const MIN_TITLE_WORD_CHARS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingWeights {
    pub role_match: f64,
    pub required_coverage: f64,
    pub distinctive_coverage: f64,
    pub title_presence: f64,
    pub bigram_overlap: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            role_match: 0.40,
            required_coverage: 0.30,
            distinctive_coverage: 0.20,
            title_presence: 0.07,
            bigram_overlap: 0.03,
        }
    }
}

impl RankingWeights {
    pub fn sum(&self) -> f64 {
        self.role_match
            + self.required_coverage
            + self.distinctive_coverage
            + self.title_presence
            + self.bigram_overlap
    }
}

/// The five sub-scores, each 0 – 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingBreakdown {
    pub role_match: f64,
    pub required_coverage: f64,
    pub distinctive_coverage: f64,
    pub title_presence: f64,
    pub bigram_overlap: f64,
}

impl RankingBreakdown {
    /// Weighted sum, 0 – 100 when the weights sum to 1.
    pub fn total(&self, weights: &RankingWeights) -> f64 {
        self.role_match * weights.role_match
            + self.required_coverage * weights.required_coverage
            + self.distinctive_coverage * weights.distinctive_coverage
            + self.title_presence * weights.title_presence
            + self.bigram_overlap * weights.bigram_overlap
    }
}

/// Computes every factor for one resume against one JD.
pub fn ranking_breakdown(
    lexicon: &Lexicon,
    resume_text: &str,
    jd_text: &str,
    job_title: &str,
) -> RankingBreakdown {
    let norm_resume = lexicon.normalize(resume_text);
    let norm_jd = lexicon.normalize(&format!("{job_title} {jd_text}"));

    // Factor 1: role category match
    let jd_role = detect_role_normalized(lexicon, &norm_jd);
    let resume_role = detect_role_normalized(lexicon, &norm_resume);
    let role_match = match (&jd_role.role, &resume_role.role) {
        (Some(jd), Some(resume)) if jd == resume => FULL,
        (Some(_), Some(_)) => NONE,
        _ => NEUTRAL,
    };

    // Factor 2: required-section skill coverage
    let sections = split_sections(jd_text);
    let required_source = if sections.required.is_empty() {
        jd_text
    } else {
        sections.required.as_str()
    };
    let required = extract_skill_frequency(lexicon, required_source);
    let required_coverage = if required.is_empty() {
        NEUTRAL
    } else {
        let resume_skills = count_in_normalized(lexicon, &norm_resume);
        let hits = required
            .skills()
            .filter(|name| resume_skills.contains(name))
            .count();
        percent(hits, required.len()) as f64
    };

    // Factors 3 and 4 depend on the JD's role profile
    let profile = jd_role.role.as_deref().and_then(|id| lexicon.role(id));

    let distinctive_coverage = match profile {
        Some(role) if !role.normalized_distinctive.is_empty() => {
            let hits = role
                .normalized_distinctive
                .iter()
                .filter(|p| norm_resume.contains(p.as_str()))
                .count();
            percent(hits, role.normalized_distinctive.len()) as f64
        }
        _ => NEUTRAL,
    };

    let title_presence = match profile {
        Some(role) => {
            if role
                .normalized_titles
                .iter()
                .any(|t| norm_resume.contains(t.as_str()))
            {
                FULL
            } else {
                NONE
            }
        }
        None => title_word_coverage(lexicon, job_title, &norm_resume),
    };

    // Factor 5: content bigram overlap
    let jd_bigrams = content_bigrams(lexicon, jd_text);
    let bigram_overlap = if jd_bigrams.is_empty() {
        NONE
    } else {
        let hits = jd_bigrams
            .iter()
            .filter(|b| norm_resume.contains(b.as_str()))
            .count();
        percent(hits, jd_bigrams.len()) as f64
    };

    RankingBreakdown {
        role_match,
        required_coverage,
        distinctive_coverage,
        title_presence,
        bigram_overlap,
    }
}

/// Share of the raw job title's significant words found in the resume.
fn title_word_coverage(lexicon: &Lexicon, job_title: &str, norm_resume: &str) -> f64 {
    let letters_only: String = job_title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    let title_words: Vec<&str> = letters_only
        .split_whitespace()
        .filter(|w| w.len() > MIN_TITLE_WORD_CHARS && !lexicon.is_stop_word(w))
        .collect();
    if title_words.is_empty() {
        return NONE;
    }
    let hits = title_words
        .iter()
        .filter(|w| norm_resume.contains(**w))
        .count();
    percent(hits, title_words.len()) as f64
}

/// Weighted ranking score in [0, 100] with the default weights.
pub fn ranking_score(lexicon: &Lexicon, resume_text: &str, jd_text: &str, job_title: &str) -> f64 {
    ranking_breakdown(lexicon, resume_text, jd_text, job_title).total(&RankingWeights::default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestResume {
    /// Position in the candidate slice.
    pub index: usize,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResume {
    pub score: f64,
    pub breakdown: RankingBreakdown,
}

/// Every candidate's score in input order, plus the winner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub scored: Vec<ScoredResume>,
    pub best: Option<BestResume>,
}

/// Scores each candidate with the default weights and selects the first one
/// holding the highest score.
pub fn rank_resumes<S: AsRef<str>>(
    lexicon: &Lexicon,
    candidates: &[S],
    jd_text: &str,
    job_title: &str,
) -> Ranking {
    let weights = RankingWeights::default();
    let scored: Vec<ScoredResume> = candidates
        .iter()
        .map(|resume| {
            let breakdown = ranking_breakdown(lexicon, resume.as_ref(), jd_text, job_title);
            ScoredResume {
                score: breakdown.total(&weights),
                breakdown,
            }
        })
        .collect();
    let best = first_best(scored.iter().map(|s| s.score));
    Ranking { scored, best }
}

/// Scores every candidate and returns the first one with the highest score.
pub fn pick_best_resume<S: AsRef<str>>(
    lexicon: &Lexicon,
    candidates: &[S],
    jd_text: &str,
    job_title: &str,
) -> Option<BestResume> {
    rank_resumes(lexicon, candidates, jd_text, job_title).best
}

/// Position and value of the first maximum; later equal scores never displace it.
pub fn first_best(scores: impl IntoIterator<Item = f64>) -> Option<BestResume> {
    let mut best: Option<BestResume> = None;
    for (index, score) in scores.into_iter().enumerate() {
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(BestResume { index, score });
        }
    }
    best
}
