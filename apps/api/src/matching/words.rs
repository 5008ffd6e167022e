//! Word-boundary predicates over lowercase text.
//!
//! A phrase occurrence counts only when it is not glued to neighbouring
//! characters. Alphanumerics and `_ - + #` always glue. A `.` glues only when
//! an alphanumeric sits on its far side ("node.js", "d3.js"), so a
//! sentence-ending period still leaves a boundary. Everything else, `/`
//! included, separates words: "python/django" is two words.

fn is_joining(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '+' | '#')
}

fn boundary_before(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    match before.next() {
        None => true,
        Some(c) if is_joining(c) => false,
        Some('.') => !before.next().is_some_and(char::is_alphanumeric),
        Some(_) => true,
    }
}

fn boundary_after(text: &str, end: usize) -> bool {
    let mut after = text[end..].chars();
    match after.next() {
        None => true,
        Some(c) if is_joining(c) => false,
        Some('.') => !after.next().is_some_and(char::is_alphanumeric),
        Some(_) => true,
    }
}

/// Whether the byte range `start..end` of `text` stands on its own as a word
/// or phrase. Both offsets must sit on char boundaries.
pub fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    start < end && boundary_before(text, start) && boundary_after(text, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(text: &str, phrase: &str) -> bool {
        text.match_indices(phrase)
            .any(|(start, m)| is_whole_word(text, start, start + m.len()))
    }

    #[test]
    fn test_hyphen_glues_words() {
        assert!(!whole("a real go-getter", "go"));
        assert!(whole("we write go every day", "go"));
    }

    #[test]
    fn test_prefix_of_longer_word_is_not_a_hit() {
        assert!(!whole("gophers everywhere", "go"));
        assert!(!whole("the kubernetes-native stack", "kubernetes"));
    }

    #[test]
    fn test_sentence_punctuation_is_a_boundary() {
        assert!(whole("we use go.", "go"));
        assert!(whole("(python), rust; go!", "python"));
        assert!(whole("skills: node.js, react", "node.js"));
        assert!(whole("languages: python,", "python"));
    }

    #[test]
    fn test_inner_dot_glues_words() {
        assert!(!whole("node.js services", "node"));
        assert!(!whole("d3.js charts", "d3"));
    }

    #[test]
    fn test_slash_separates_words() {
        assert!(whole("python/django", "python"));
        assert!(whole("python/django", "django"));
        assert!(whole("node.js/react", "node.js"));
        assert!(whole("ci/cd pipelines", "ci/cd"));
    }

    #[test]
    fn test_symbols_inside_phrase_are_literal() {
        assert!(whole("c++ and c#", "c++"));
        assert!(whole("c++ and c#", "c#"));
        assert!(!whole("c++ and c#", "c"));
    }

    #[test]
    fn test_multibyte_neighbours() {
        assert!(whole("café rust ✦ rust", "rust"));
        assert!(!whole("rustë", "rust"));
    }

    #[test]
    fn test_empty_range_is_never_a_word() {
        assert!(!is_whole_word("rust", 0, 0));
        assert!(!is_whole_word("", 0, 0));
    }
}
