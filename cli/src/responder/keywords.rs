//! # Keyword Table
//!
//! File: cli/src/responder/keywords.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The static mapping from trigger word to canned response. The built-in table
//! is literal data, constructed once at startup and read-only afterwards.
//!
//! Words that should share a reply (`crash` / `crashes`, `bug` / `buggy`) are
//! separate entries holding the same text. They are not aliases: each key is
//! inserted on its own, and the response text is duplicated verbatim.
//!
use std::collections::HashMap;

const CRASH_RESPONSE: &str = "Well, it never crashes on our system.\n\
    It must have something to do with your system.\n\
    Tell me more about your configuration.\n";

const BUG_RESPONSE: &str = "Well, you know, all software has some bugs.\n\
    But our software engineers are working very\n\
    hard to fix them. Can you describe the problem\n\
    a bit further?\n";

/// Built-in (trigger word, response) pairs, in insertion order.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("crash", CRASH_RESPONSE),
    ("crashes", CRASH_RESPONSE),
    (
        "slow",
        "I think this has to do with your hardware.\n\
         Upgrading your processor should solve all\n\
         performance problems. Have you got a problem\n\
         with our software?\n",
    ),
    (
        "performance",
        "Performance was quite adequate in all our\n\
         tests. Are you running any other processes\n\
         in the background?\n",
    ),
    ("bug", BUG_RESPONSE),
    ("buggy", BUG_RESPONSE),
    (
        "windows",
        "This is a known bug to do with the Windows\n\
         operating system. Please report it to\n\
         Microsoft. There is nothing we can do about\n\
         this.\n",
    ),
    (
        "macintosh",
        "This is a known bug to do with the Mac\n\
         operating system. Please report it to Apple.\n\
         There is nothing we can do about this.\n",
    ),
    (
        "expensive",
        "The cost of our product is quite competitive.\n\
         Have you looked around and really compared\n\
         our features?\n",
    ),
    (
        "installation",
        "The installation is really quite straight\n\
         forward. We have tons of wizards that do\n\
         all the work for you. Have you read the\n\
         installation instructions?\n",
    ),
    (
        "memory",
        "If you read the system requirements carefully,\n\
         you will see that the specified memory\n\
         requirements are 1.5 giga byte. You\n\
         really should upgrade your memory. Anything\n\
         else you want to know?\n",
    ),
    (
        "linux",
        "We take Linux support very seriously. But\n\
         there are some problems. Most have to do with\n\
         incompatible glibc versions. Can you be a bit\n\
         more precise?\n",
    ),
    (
        "bluej",
        "Ahhh, BlueJ, yes. We tried to buy out those\n\
         guys long ago, but they simply won't sell...\n\
         Stubborn people they are. Nothing we can\n\
         do about it, I'm afraid.\n",
    ),
];

/// Maps trigger words to canned responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: HashMap<String, String>,
}

impl KeywordTable {
    /// Builds the built-in technical support table.
    pub fn build() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().copied())
    }

    /// Builds a table from arbitrary pairs. A later duplicate key overwrites
    /// the earlier value.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, value) in entries {
            map.insert(key.into(), value.into());
        }
        Self { entries: map }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All trigger words, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::build()
    }
}
