//! Dictionary matcher — finds every phrase of a fixed set in one pass.
//!
//! Built once per lexicon over an Aho-Corasick automaton. The automaton runs in
//! standard overlapping mode so that a candidate rejected by the word-boundary
//! check never hides a shorter phrase starting at the same position ("ci cd"
//! glued to a letter still leaves "ci" for consideration).

use aho_corasick::{AhoCorasick, BuildError, MatchKind};

use crate::matching::words::is_whole_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseHit {
    /// Index of the phrase in construction order.
    pub id: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct PhraseSet {
    matcher: AhoCorasick,
}

impl PhraseSet {
    pub fn new<I, P>(phrases: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(phrases)?;
        Ok(Self { matcher })
    }

    pub fn len(&self) -> usize {
        self.matcher.patterns_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whole-word occurrences of every phrase, each phrase matched
    /// independently. Occurrences of one phrase never overlap each other.
    pub fn find_words(&self, text: &str) -> Vec<PhraseHit> {
        let mut next_free = vec![0_usize; self.len()];
        let mut hits = Vec::new();
        for m in self.matcher.find_overlapping_iter(text) {
            let id = m.pattern().as_usize();
            if m.start() < next_free[id] || !is_whole_word(text, m.start(), m.end()) {
                continue;
            }
            next_free[id] = m.end();
            hits.push(PhraseHit {
                id,
                start: m.start(),
                end: m.end(),
            });
        }
        hits
    }

    /// Occurrence count per phrase, indexed by phrase id.
    pub fn counts(&self, text: &str) -> Vec<usize> {
        let mut counts = vec![0_usize; self.len()];
        for hit in self.find_words(text) {
            counts[hit.id] += 1;
        }
        counts
    }

    /// Non-overlapping hits for rewriting: leftmost start first, and at a given
    /// start the longest phrase. Equal phrases keep construction order.
    pub fn leftmost_longest(&self, text: &str) -> Vec<PhraseHit> {
        let mut candidates = self.find_words(text);
        candidates.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(b.end.cmp(&a.end))
                .then(a.id.cmp(&b.id))
        });

        let mut chosen = Vec::new();
        let mut cursor = 0;
        for hit in candidates {
            if hit.start >= cursor {
                cursor = hit.end;
                chosen.push(hit);
            }
        }
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(phrases: &[&str]) -> PhraseSet {
        PhraseSet::new(phrases).unwrap()
    }

    #[test]
    fn test_counts_each_phrase_independently() {
        let phrases = set(&["react", "react native", "rust"]);
        let counts = phrases.counts("react native and react, rust");
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn test_occurrences_of_one_phrase_do_not_overlap() {
        let phrases = set(&["a a"]);
        assert_eq!(phrases.counts("a a a"), vec![1]);
        assert_eq!(phrases.counts("a a a a"), vec![2]);
    }

    #[test]
    fn test_boundary_rejects_glued_candidates() {
        let phrases = set(&["go", "node"]);
        assert_eq!(phrases.counts("go-getter gophers node.js"), vec![0, 0]);
        assert_eq!(phrases.counts("go, node/go"), vec![2, 1]);
    }

    #[test]
    fn test_leftmost_longest_prefers_longer_phrase() {
        let phrases = set(&["ci", "ci cd"]);
        let hits = phrases.leftmost_longest("ci cd and ci");
        assert_eq!(
            hits,
            vec![
                PhraseHit { id: 1, start: 0, end: 5 },
                PhraseHit { id: 0, start: 10, end: 12 },
            ]
        );
    }

    #[test]
    fn test_rejected_long_candidate_leaves_shorter_one() {
        let phrases = set(&["ci", "ci cd"]);
        let hits = phrases.leftmost_longest("ci cdx");
        assert_eq!(hits, vec![PhraseHit { id: 0, start: 0, end: 2 }]);
    }

    #[test]
    fn test_leftmost_wins_over_overlapping_later_phrase() {
        let phrases = set(&["b c d", "a b"]);
        let hits = phrases.leftmost_longest("a b c d");
        assert_eq!(hits, vec![PhraseHit { id: 1, start: 0, end: 3 }]);
    }

    #[test]
    fn test_empty_set_and_text() {
        let empty = PhraseSet::new(Vec::<String>::new()).unwrap();
        assert!(empty.is_empty());
        assert!(empty.find_words("anything").is_empty());
        assert!(set(&["rust"]).find_words("").is_empty());
    }
}
