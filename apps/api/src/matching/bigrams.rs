//! Bigram extractor — adjacent two-word phrases for coarse phrase overlap.

use std::collections::BTreeSet;

use crate::lexicon::Lexicon;

/// Tokens of this length or shorter are dropped before pairing.
const MIN_TOKEN_CHARS: usize = 1;
/// Both sides of a kept pair must be longer than this.
const MIN_PAIR_TOKEN_CHARS: usize = 2;

/// Normalized text with everything outside `[a-z0-9]` and whitespace blanked out.
fn alphanumeric_tokens(normalized: &str) -> Vec<String> {
    let cleaned: String = normalized
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .filter(|w| w.len() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Adjacent token pairs, both tokens longer than two characters, dropping only
/// pairs where *both* sides are stop words. Callers wanting stricter filtering
/// use `content_bigrams`.
pub fn extract_bigrams(lexicon: &Lexicon, text: &str) -> BTreeSet<String> {
    let tokens = alphanumeric_tokens(&lexicon.normalize(text));
    tokens
        .windows(2)
        .filter(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            a.len() > MIN_PAIR_TOKEN_CHARS
                && b.len() > MIN_PAIR_TOKEN_CHARS
                && (!lexicon.is_stop_word(a) || !lexicon.is_stop_word(b))
        })
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Bigrams where neither token is a stop word.
pub fn content_bigrams(lexicon: &Lexicon, text: &str) -> Vec<String> {
    extract_bigrams(lexicon, text)
        .into_iter()
        .filter(|bigram| {
            bigram
                .split(' ')
                .all(|token| !lexicon.is_stop_word(token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> &'static Lexicon {
        Lexicon::builtin()
    }

    #[test]
    fn test_extracts_adjacent_pairs() {
        let bigrams = extract_bigrams(lexicon(), "Design payment systems");
        assert!(bigrams.contains("design payment"));
        assert!(bigrams.contains("payment systems"));
        assert_eq!(bigrams.len(), 2);
    }

    #[test]
    fn test_keeps_pair_with_one_stop_word() {
        let bigrams = extract_bigrams(lexicon(), "own the roadmap");
        assert!(bigrams.contains("the roadmap"));
        assert!(!bigrams.contains("own the"));
    }

    #[test]
    fn test_drops_pair_of_stop_words() {
        let bigrams = extract_bigrams(lexicon(), "with the");
        assert!(bigrams.is_empty());
    }

    #[test]
    fn test_short_tokens_break_pairs() {
        // "an" survives tokenizing but is too short to pair
        let bigrams = extract_bigrams(lexicon(), "ship an api fast");
        assert!(bigrams.contains("api fast"));
        assert!(!bigrams.iter().any(|b| b.contains("an ")));
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let bigrams = extract_bigrams(lexicon(), "ci/cd pipelines");
        // "ci" and "cd" are too short to pair
        assert!(bigrams.is_empty());
        let bigrams = extract_bigrams(lexicon(), "event-driven design");
        assert!(bigrams.contains("event driven"));
        assert!(bigrams.contains("driven design"));
    }

    #[test]
    fn test_aliases_normalized_first() {
        let bigrams = extract_bigrams(lexicon(), "managed k8s clusters");
        assert!(bigrams.contains("managed kubernetes"));
        assert!(bigrams.contains("kubernetes clusters"));
    }

    #[test]
    fn test_content_bigrams_drop_any_stop_word() {
        let bigrams = content_bigrams(lexicon(), "own the payment roadmap");
        assert_eq!(bigrams, vec!["payment roadmap".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_bigrams(lexicon(), "").is_empty());
        assert!(content_bigrams(lexicon(), "   ").is_empty());
    }
}
