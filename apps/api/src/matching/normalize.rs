//! Text normalizer — lowercases and collapses aliases onto their canonical form.

use aho_corasick::BuildError;

use crate::lexicon::Lexicon;
use crate::matching::phrases::PhraseSet;

/// Upper bound on alias passes. A validated lexicon settles in one or two.
const MAX_PASSES: usize = 4;

/// Alias → canonical rewriter over a single dictionary automaton.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: PhraseSet,
    canonical: Vec<String>,
}

impl AliasTable {
    /// `synonyms` pairs are `(alias, canonical)`, both already lowercase.
    pub fn new(synonyms: &[(String, String)]) -> Result<Self, BuildError> {
        let aliases = PhraseSet::new(synonyms.iter().map(|(alias, _)| alias.as_str()))?;
        let canonical = synonyms
            .iter()
            .map(|(_, canonical)| canonical.clone())
            .collect();
        Ok(Self { aliases, canonical })
    }

    /// Lowercases `text` and rewrites every whole-word alias to its canonical form.
    ///
    /// At each position the longest alias wins, so multi-word aliases beat the
    /// shorter aliases they contain. Passes repeat until the text is stable,
    /// which keeps the result idempotent even when a short alias expands into a
    /// longer one ("gh action" → "github action" → "github actions").
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_lowercase();
        for _ in 0..MAX_PASSES {
            let hits = self.aliases.leftmost_longest(&current);
            if hits.is_empty() {
                break;
            }
            let mut rewritten = String::with_capacity(current.len());
            let mut last = 0;
            for hit in hits {
                rewritten.push_str(&current[last..hit.start]);
                rewritten.push_str(&self.canonical[hit.id]);
                last = hit.end;
            }
            rewritten.push_str(&current[last..]);
            current = rewritten;
        }
        current
    }
}

/// Normalizes against the built-in lexicon.
pub fn normalize(text: &str) -> String {
    Lexicon::builtin().normalize(text)
}
