#![allow(dead_code)]

//! Skill frequency extractor — counts vocabulary skills in free text.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::lexicon::Lexicon;

/// Vocabulary entries shorter than this are skipped ("c", "r").
const MIN_SKILL_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SkillHit {
    name: String,
    count: usize,
}

/// Skill name → occurrence count, only for skills with at least one hit.
///
/// Iteration follows vocabulary order so downstream lists are stable.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFrequencyMap {
    hits: Vec<SkillHit>,
}

impl SkillFrequencyMap {
    pub fn get(&self, skill: &str) -> Option<usize> {
        self.hits.iter().find(|h| h.name == skill).map(|h| h.count)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.get(skill).is_some()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|h| h.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.hits.iter().map(|h| (h.name.as_str(), h.count))
    }

    /// The first `limit` skill names, for display tags.
    pub fn keywords(&self, limit: usize) -> Vec<String> {
        self.skills().take(limit).map(str::to_string).collect()
    }
}

impl Serialize for SkillFrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hits.len()))?;
        for hit in &self.hits {
            map.serialize_entry(&hit.name, &hit.count)?;
        }
        map.end()
    }
}

/// Counts whole-word occurrences of every vocabulary skill in `text`.
pub fn extract_skill_frequency(lexicon: &Lexicon, text: &str) -> SkillFrequencyMap {
    let normalized = lexicon.normalize(text);
    count_in_normalized(lexicon, &normalized)
}

/// Same as `extract_skill_frequency` for text that is already normalized.
pub fn count_in_normalized(lexicon: &Lexicon, normalized: &str) -> SkillFrequencyMap {
    let counts = lexicon.skill_counts(normalized);
    let hits = lexicon
        .skills()
        .iter()
        .zip(counts)
        .filter(|(skill, count)| *count > 0 && skill.name.chars().count() >= MIN_SKILL_CHARS)
        .map(|(skill, count)| SkillHit {
            name: skill.name.clone(),
            count,
        })
        .collect();
    SkillFrequencyMap { hits }
}

/// Skill names found in `text`, vocabulary order, at most `limit`.
pub fn extract_keywords(lexicon: &Lexicon, text: &str, limit: usize) -> Vec<String> {
    extract_skill_frequency(lexicon, text).keywords(limit)
}
