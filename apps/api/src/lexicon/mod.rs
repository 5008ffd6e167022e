#![allow(dead_code)]

//! Lexicon — immutable reference data shared by every matcher.
//!
//! A `Lexicon` is built once (from the compiled-in tables or from a JSON
//! snapshot on disk), validated, and then only ever read. Callers share it as
//! `&'static Lexicon` (`Lexicon::builtin()`) or `Arc<Lexicon>`.

pub mod data;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::normalize::AliasTable;
use crate::matching::phrases::PhraseSet;

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_source(LexiconSource::builtin())
        .unwrap_or_else(|e| panic!("built-in lexicon is invalid: {e}"))
});

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lexicon file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("alias '{0}' is empty or not lowercase")]
    InvalidAlias(String),

    #[error("alias '{0}' maps to itself")]
    SelfAlias(String),

    #[error("alias '{alias}' rewrites to '{canonical}', which normalizes further to '{normalized}'")]
    AliasChain {
        alias: String,
        canonical: String,
        normalized: String,
    },

    #[error("duplicate skill '{0}'")]
    DuplicateSkill(String),

    #[error("duplicate role '{0}'")]
    DuplicateRole(String),

    #[error("role identifier must not be empty")]
    EmptyRoleId,

    #[error("failed to build phrase matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

// ────────────────────────────────────────────────────────────────────────────
// Serialized form
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub alias: String,
    pub canonical: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub id: String,
    pub titles: Vec<String>,
    pub distinctive: Vec<String>,
}

/// On-disk shape of a lexicon snapshot. List order is significant for
/// `synonyms` (ties between equal-length aliases) and `roles` (detection tie-break).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSource {
    pub stop_words: Vec<String>,
    pub synonyms: Vec<SynonymEntry>,
    pub skills: Vec<String>,
    pub roles: Vec<RoleEntry>,
}

impl LexiconSource {
    /// The compiled-in tables from `data`.
    pub fn builtin() -> Self {
        Self {
            stop_words: owned(data::STOP_WORDS),
            synonyms: data::SYNONYMS
                .iter()
                .map(|(alias, canonical)| SynonymEntry {
                    alias: alias.to_string(),
                    canonical: canonical.to_string(),
                })
                .collect(),
            skills: owned(data::SKILLS),
            roles: data::ROLES
                .iter()
                .map(|(id, titles, distinctive)| RoleEntry {
                    id: id.to_string(),
                    titles: owned(titles),
                    distinctive: owned(distinctive),
                })
                .collect(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Validated, precomputed form
// ────────────────────────────────────────────────────────────────────────────

/// A vocabulary skill with its canonical (normalized) spelling.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub normalized: String,
}

/// A taxonomy role. `titles`/`distinctive` are kept verbatim for detection;
/// the `normalized_*` forms are what the ranking scorer looks for in a resume.
#[derive(Debug, Clone)]
pub struct RoleProfile {
    pub id: String,
    pub titles: Vec<String>,
    pub distinctive: Vec<String>,
    pub normalized_titles: Vec<String>,
    pub normalized_distinctive: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    /// Longest alias first; equal lengths keep source order.
    synonyms: Vec<(String, String)>,
    aliases: AliasTable,
    skills: Vec<Skill>,
    /// One automaton over the distinct canonical skill phrases.
    skill_phrases: PhraseSet,
    /// `skills[i]` is matched by phrase `skill_phrase_ids[i]`.
    skill_phrase_ids: Vec<usize>,
    roles: Vec<RoleProfile>,
}

impl Lexicon {
    /// Process-wide lexicon built from the compiled-in tables.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Reads and validates a JSON snapshot.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path)?;
        let source: LexiconSource = serde_json::from_str(&raw)?;
        Self::from_source(source)
    }

    /// Validates `source` and precomputes normalized forms.
    pub fn from_source(source: LexiconSource) -> Result<Self, LexiconError> {
        let mut synonyms = Vec::with_capacity(source.synonyms.len());
        for entry in source.synonyms {
            let alias = entry.alias.trim().to_string();
            if alias.is_empty() || alias != alias.to_lowercase() {
                return Err(LexiconError::InvalidAlias(entry.alias));
            }
            let canonical = entry.canonical.trim().to_lowercase();
            if alias == canonical {
                return Err(LexiconError::SelfAlias(alias));
            }
            synonyms.push((alias, canonical));
        }
        synonyms.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        let aliases = AliasTable::new(&synonyms)?;

        for (alias, canonical) in &synonyms {
            let normalized = aliases.normalize(canonical);
            if &normalized != canonical {
                return Err(LexiconError::AliasChain {
                    alias: alias.clone(),
                    canonical: canonical.clone(),
                    normalized,
                });
            }
        }

        let mut seen = HashSet::new();
        let mut skills = Vec::with_capacity(source.skills.len());
        for name in source.skills {
            let name = name.trim().to_lowercase();
            if !seen.insert(name.clone()) {
                return Err(LexiconError::DuplicateSkill(name));
            }
            let normalized = aliases.normalize(&name);
            skills.push(Skill { name, normalized });
        }

        let mut phrase_ids: HashMap<&str, usize> = HashMap::new();
        let mut distinct_phrases: Vec<&str> = Vec::new();
        let skill_phrase_ids: Vec<usize> = skills
            .iter()
            .map(|skill| {
                *phrase_ids.entry(skill.normalized.as_str()).or_insert_with(|| {
                    distinct_phrases.push(skill.normalized.as_str());
                    distinct_phrases.len() - 1
                })
            })
            .collect();
        let skill_phrases = PhraseSet::new(&distinct_phrases)?;

        let mut seen = HashSet::new();
        let mut roles = Vec::with_capacity(source.roles.len());
        for role in source.roles {
            let id = role.id.trim().to_string();
            if id.is_empty() {
                return Err(LexiconError::EmptyRoleId);
            }
            if !seen.insert(id.clone()) {
                return Err(LexiconError::DuplicateRole(id));
            }
            let lower = |items: Vec<String>| {
                items
                    .into_iter()
                    .map(|s| s.trim().to_lowercase())
                    .collect::<Vec<_>>()
            };
            let titles = lower(role.titles);
            let distinctive = lower(role.distinctive);
            let normalized_titles = titles.iter().map(|t| aliases.normalize(t)).collect();
            let normalized_distinctive = distinctive
                .iter()
                .map(|p| aliases.normalize(p))
                .collect();
            roles.push(RoleProfile {
                id,
                titles,
                distinctive,
                normalized_titles,
                normalized_distinctive,
            });
        }

        let stop_words = source
            .stop_words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Ok(Self {
            stop_words,
            synonyms,
            aliases,
            skills,
            skill_phrases,
            skill_phrase_ids,
            roles,
        })
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn synonyms(&self) -> &[(String, String)] {
        &self.synonyms
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Whole-word occurrence count of every skill in already-normalized text,
    /// indexed like `skills()`. One pass over the text for the whole vocabulary.
    pub fn skill_counts(&self, normalized: &str) -> Vec<usize> {
        let per_phrase = self.skill_phrases.counts(normalized);
        self.skill_phrase_ids
            .iter()
            .map(|&id| per_phrase[id])
            .collect()
    }

    /// Roles in taxonomy order.
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn role(&self, id: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Lowercases and rewrites every alias to its canonical form.
    pub fn normalize(&self, text: &str) -> String {
        self.aliases.normalize(text)
    }
}
