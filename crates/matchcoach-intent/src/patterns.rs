//! Compiled intent pattern table

use crate::config::{IntentPatternSpec, MatchRule};
use aho_corasick::AhoCorasick;
use matchcoach_core::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Literal keywords matched as substrings, ignoring case
///
/// Keywords and text are both lowercased with full Unicode case mapping, so
/// `Équipement` matches `équipement` the same way a case-insensitive regex
/// would.
pub struct KeywordSet {
    matcher: AhoCorasick,
}

impl KeywordSet {
    /// Build a set from non-empty keywords; `None` when there are none
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Option<Self>> {
        let lowered: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if lowered.is_empty() {
            return Ok(None);
        }

        let matcher = AhoCorasick::new(&lowered)
            .map_err(|e| Error::pattern(format!("Failed to build keyword matcher: {}", e)))?;
        Ok(Some(Self { matcher }))
    }

    /// Whether any keyword occurs in the text
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(&text.to_lowercase())
    }
}

/// One intent with its rules compiled for matching
///
/// Keyword rules share a single [`KeywordSet`]; regex rules are checked one
/// by one.
pub struct CompiledIntent {
    label: String,
    keywords: Option<KeywordSet>,
    regexes: Vec<Regex>,
}

impl CompiledIntent {
    /// Compile an intent specification
    pub fn compile(spec: &IntentPatternSpec) -> Result<Self> {
        let mut keywords = Vec::new();
        let mut regexes = Vec::new();

        for rule in &spec.rules {
            match rule {
                MatchRule::Keyword { value } => {
                    if value.is_empty() {
                        return Err(Error::pattern(format!(
                            "intent '{}' has an empty keyword",
                            spec.label
                        )));
                    }
                    keywords.push(value.as_str());
                }
                MatchRule::Regex { pattern } => {
                    let regex = RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| {
                            Error::pattern(format!(
                                "Failed to compile regex '{}' for intent '{}': {}",
                                pattern, spec.label, e
                            ))
                        })?;
                    regexes.push(regex);
                }
            }
        }

        Ok(Self {
            label: spec.label.clone(),
            keywords: KeywordSet::new(&keywords)?,
            regexes,
        })
    }

    /// Intent label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether any rule of this intent matches the text
    pub fn is_hit(&self, text: &str) -> bool {
        self.keywords.as_ref().is_some_and(|k| k.is_match(text))
            || self.regexes.iter().any(|r| r.is_match(text))
    }
}

/// Ordered registry of intents
///
/// Iteration order is declaration order, which the classifier uses to break
/// confidence ties.
pub struct PatternTable {
    intents: Vec<CompiledIntent>,
}

impl PatternTable {
    /// Compile all intents, keeping their order
    pub fn compile(specs: &[IntentPatternSpec]) -> Result<Self> {
        let intents = specs
            .iter()
            .map(CompiledIntent::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { intents })
    }

    /// Intents in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledIntent> {
        self.intents.iter()
    }

    /// Labels of every intent hit by the text, in declaration order
    pub fn hits<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |intent| intent.is_hit(text))
            .map(CompiledIntent::label)
    }

    pub(crate) fn len(&self) -> usize {
        self.intents.len()
    }
}
