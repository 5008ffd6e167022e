//! Role detector — scores text against every taxonomy role.

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, RoleProfile};

/// A title hit is worth this many distinctive-phrase hits.
pub const TITLE_WEIGHT: u32 = 5;
pub const DISTINCTIVE_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDetection {
    /// `None` when every role scores 0.
    pub role: Option<String>,
    pub confidence: u32,
}

impl RoleDetection {
    pub fn is_resolved(&self) -> bool {
        self.role.is_some()
    }
}

/// `5 × titles found + 1 × distinctive phrases found`, each counted once,
/// matched as substrings of already-normalized text.
pub fn role_score(role: &RoleProfile, normalized: &str) -> u32 {
    let titles = role
        .titles
        .iter()
        .filter(|t| normalized.contains(t.as_str()))
        .count() as u32;
    let phrases = role
        .distinctive
        .iter()
        .filter(|p| normalized.contains(p.as_str()))
        .count() as u32;
    TITLE_WEIGHT * titles + DISTINCTIVE_WEIGHT * phrases
}

/// Best-scoring role for `text`.
///
/// Ties go to the role listed first in the taxonomy; a later role must score
/// strictly higher to take over.
pub fn detect_role(lexicon: &Lexicon, text: &str) -> RoleDetection {
    let normalized = lexicon.normalize(text);
    detect_role_normalized(lexicon, &normalized)
}

pub(crate) fn detect_role_normalized(lexicon: &Lexicon, normalized: &str) -> RoleDetection {
    let mut best = RoleDetection::default();
    for role in lexicon.roles() {
        let score = role_score(role, normalized);
        if score > best.confidence {
            best = RoleDetection {
                role: Some(role.id.clone()),
                confidence: score,
            };
        }
    }
    best
}
