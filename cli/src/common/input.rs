//! # Input Tokenizing
//!
//! File: cli/src/common/input.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a raw line typed by the user into the ordered word list the
//! `Responder` expects. Words keep the order they had in the sentence, so the
//! first trigger word the user typed is the one that answers.
//!

/// Splits `line` into lowercase words.
///
/// Leading and trailing ASCII punctuation is stripped from each word
/// (`"slow?"` becomes `"slow"`, `"don't"` stays intact), empty words are
/// dropped, and repeated words keep only their first occurrence.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for raw in line.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| c.is_ascii_punctuation())
            .to_lowercase();
        if !word.is_empty() && !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// True when the trimmed line is the exit word, ignoring ASCII case.
pub fn is_exit(line: &str, exit_word: &str) -> bool {
    line.trim().eq_ignore_ascii_case(exit_word.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_sentence_order() {
        assert_eq!(
            tokenize("My Linux box is SLOW"),
            vec!["my", "linux", "box", "is", "slow"]
        );
    }

    #[test]
    fn strips_edge_punctuation_only() {
        assert_eq!(
            tokenize("Why is it slow?! (again) don't"),
            vec!["why", "is", "it", "slow", "again", "don't"]
        );
    }

    #[test]
    fn drops_duplicates_and_empty_tokens() {
        assert_eq!(tokenize("bug, bug... -- BUG buggy"), vec!["bug", "buggy"]);
        assert!(tokenize("   \t  ").is_empty());
        assert!(tokenize("?!").is_empty());
    }

    #[test]
    fn exit_word_matching() {
        assert!(is_exit("bye", "bye"));
        assert!(is_exit("  BYE \n", "bye"));
        assert!(!is_exit("bye now", "bye"));
        assert!(!is_exit("", "bye"));
    }
}
