//! Section parser — splits a job description into required and preferred text.
//!
//! Two-state machine over lines. Every line lands in exactly one section, and a
//! trigger line belongs to the section it switches into.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PREFERRED_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)nice.to.have|preferred|bonus|\bplus\b|desired|ideally|optional")
        .expect("valid preferred trigger pattern")
});

static REQUIRED_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)required|must.have|minimum|basic qualifications|responsibilities|requirements|you (?:must|will|have|bring)",
    )
    .expect("valid required trigger pattern")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionMode {
    #[default]
    Required,
    Preferred,
}

impl SectionMode {
    /// Mode after reading `line`. The required trigger is checked last, so a
    /// line matching both patterns ends in `Required`.
    pub fn next(self, line: &str) -> Self {
        let mut mode = self;
        if PREFERRED_TRIGGER.is_match(line) {
            mode = SectionMode::Preferred;
        }
        if REQUIRED_TRIGGER.is_match(line) {
            mode = SectionMode::Required;
        }
        mode
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSplit {
    pub required: String,
    pub preferred: String,
}

/// Every `\n`-separated line of `jd_text`, in order, tagged with its section.
/// A `\r` before the newline stays on the line.
pub fn classify_lines(jd_text: &str) -> Vec<(SectionMode, &str)> {
    let mut mode = SectionMode::default();
    jd_text
        .split('\n')
        .map(|line| {
            mode = mode.next(line);
            (mode, line)
        })
        .collect()
}

/// Splits `jd_text` on `\n`. With no trigger phrases everything is required.
pub fn split_sections(jd_text: &str) -> SectionSplit {
    let mut required: Vec<&str> = Vec::new();
    let mut preferred: Vec<&str> = Vec::new();

    for (mode, line) in classify_lines(jd_text) {
        match mode {
            SectionMode::Required => required.push(line),
            SectionMode::Preferred => preferred.push(line),
        }
    }

    SectionSplit {
        required: required.join("\n"),
        preferred: preferred.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Senior Backend Engineer\n\
        Requirements:\n\
        - 5 years of Rust\n\
        - PostgreSQL\n\
        Nice to have:\n\
        - Kafka\n\
        - Kubernetes\n\
        What you will bring:\n\
        - Ownership";

    fn lines(text: &str) -> Vec<&str> {
        if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').collect()
        }
    }

    #[test]
    fn test_no_triggers_everything_required() {
        let split = split_sections("Rust engineer\nWrite services\nShip features");
        assert_eq!(split.required, "Rust engineer\nWrite services\nShip features");
        assert_eq!(split.preferred, "");
    }

    #[test]
    fn test_trigger_line_joins_new_section() {
        let split = split_sections(JD);
        assert!(split.preferred.starts_with("Nice to have:"));
        assert!(split.preferred.contains("- Kafka"));
        assert!(split.preferred.contains("- Kubernetes"));
        assert!(split.required.contains("- PostgreSQL"));
        assert!(split.required.contains("What you will bring:"));
        assert!(split.required.ends_with("- Ownership"));
    }

    #[test]
    fn test_line_matching_both_ends_required() {
        let split = split_sections("Intro\nRequired: Java. Preferred: Go.\n- Spring");
        assert_eq!(split.preferred, "");
        assert_eq!(split.required, "Intro\nRequired: Java. Preferred: Go.\n- Spring");
    }

    #[test]
    fn test_preferred_variants_case_insensitive() {
        for trigger in ["BONUS points", "Desired skills", "Ideally you know", "Optional: Scala", "A plus: Go", "Nice-to-have"] {
            let split = split_sections(&format!("Intro\n{trigger}"));
            assert_eq!(split.preferred, trigger, "trigger {trigger:?}");
        }
    }

    #[test]
    fn test_plus_requires_whole_word() {
        let split = split_sections("Intro\nSurplus budget");
        assert_eq!(split.preferred, "");
    }

    #[test]
    fn test_every_line_lands_in_exactly_one_section() {
        let jds = [
            JD,
            "",
            "\n\n",
            "Intro\r\nNice to have:\r\n- Go\r\nRequirements:\r\n- Rust\r\n",
            "Requirements:\n\n- Rust\n\nBonus:\n\n- Go\n",
            "Preferred: Scala\nRequired: Java\nPreferred: Go",
        ];
        for jd in jds {
            let classified = classify_lines(jd);
            let classified_lines: Vec<&str> = classified.iter().map(|(_, line)| *line).collect();
            assert_eq!(classified_lines, jd.split('\n').collect::<Vec<_>>(), "jd {jd:?}");

            let section = |wanted: SectionMode| {
                classified
                    .iter()
                    .filter(|(mode, _)| *mode == wanted)
                    .map(|(_, line)| *line)
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            let split = split_sections(jd);
            assert_eq!(split.required, section(SectionMode::Required), "jd {jd:?}");
            assert_eq!(split.preferred, section(SectionMode::Preferred), "jd {jd:?}");

            let mut input = lines(jd);
            let mut output = lines(&split.required);
            output.extend(lines(&split.preferred));
            input.retain(|line| !line.is_empty());
            output.retain(|line| !line.is_empty());
            input.sort_unstable();
            output.sort_unstable();
            assert_eq!(input, output, "jd {jd:?}");
        }
    }

    #[test]
    fn test_crlf_lines_switch_sections() {
        let split = split_sections("Intro\r\nNice to have:\r\n- Go");
        assert_eq!(split.required, "Intro\r");
        assert_eq!(split.preferred, "Nice to have:\r\n- Go");
    }

    #[test]
    fn test_empty_input() {
        let split = split_sections("");
        assert_eq!(split, SectionSplit::default());
    }

    #[test]
    fn test_mode_transitions() {
        assert_eq!(SectionMode::Required.next("bonus"), SectionMode::Preferred);
        assert_eq!(SectionMode::Preferred.next("plain line"), SectionMode::Preferred);
        assert_eq!(SectionMode::Preferred.next("You must know SQL"), SectionMode::Required);
    }
}
