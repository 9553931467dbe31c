//! # Responder Library Integration Tests
//!
//! File: cli/tests/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exercises the public response engine API as an outside crate would.
//!

use rand::rngs::StdRng;
use rand::SeedableRng;
use responder::common::input::tokenize;
use responder::responder::{FallbackPool, KeywordTable, Responder, SYNTHETIC_FALLBACK};
use std::collections::HashSet;
use tempfile::tempdir;

#[test]
fn test_slow_scenario() {
    let responder = Responder::new(KeywordTable::build(), FallbackPool::from_entries(["x"]));
    let mut rng = StdRng::seed_from_u64(1);
    let words: HashSet<&str> = HashSet::from(["slow"]);
    assert!(responder
        .generate_response(&words, &mut rng)
        .starts_with("I think this has to do with your hardware.\n"));
}

#[test]
fn test_two_line_file_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("default.txt");
    std::fs::write(&path, "Could you rephrase?\nTell me more.\n").unwrap();

    let responder = Responder::with_defaults_file(&path);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        seen.insert(responder.generate_response(["zzz"], &mut rng).to_string());
    }
    let expected: HashSet<String> = ["Could you rephrase?", "Tell me more."]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_nonexistent_resource_still_answers() {
    let dir = tempdir().unwrap();
    let responder = Responder::with_defaults_file(dir.path().join("missing.txt"));
    assert_eq!(responder.pool().entries(), [SYNTHETIC_FALLBACK]);

    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(
        responder.generate_response(Vec::<String>::new(), &mut rng),
        SYNTHETIC_FALLBACK
    );
}

#[test]
fn test_tokenized_sentence_matches_keyword() {
    let responder = Responder::new(KeywordTable::build(), FallbackPool::from_entries(["x"]));
    let mut rng = StdRng::seed_from_u64(3);
    let words = tokenize("Your product is far too EXPENSIVE!");
    assert_eq!(
        responder.generate_response(&words, &mut rng),
        KeywordTable::build().get("expensive").unwrap()
    );
}

#[test]
fn test_shared_across_threads() {
    let responder = std::sync::Arc::new(Responder::new(
        KeywordTable::build(),
        FallbackPool::from_entries(["a", "b"]),
    ));
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let responder = std::sync::Arc::clone(&responder);
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..100)
                    .map(|_| responder.generate_response(["zzz"], &mut rng).to_string())
                    .all(|r| r == "a" || r == "b")
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
