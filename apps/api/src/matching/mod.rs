// Resume ↔ job compatibility scoring.
// Pure functions over text and a read-only Lexicon: no I/O, no shared mutable state.
// Flow: normalize → extract (skills, role, bigrams) → score (local match, ranking).

pub mod bigrams;
pub mod handlers;
pub mod local_match;
pub mod normalize;
pub mod phrases;
pub mod ranking;
pub mod roles;
pub mod sections;
pub mod skills;
pub mod words;

pub use local_match::{local_match, LocalMatchResult, MatchBand};
pub use ranking::{ranking_breakdown, RankingBreakdown};
pub use roles::{detect_role, RoleDetection};
pub use sections::{split_sections, SectionSplit};
pub use skills::{extract_skill_frequency, SkillFrequencyMap};

/// `round(100 × part / whole)`; callers guarantee `whole > 0`.
pub(crate) fn percent(part: usize, whole: usize) -> u32 {
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(0, 5), 0);
        assert_eq!(percent(5, 5), 100);
    }
}
