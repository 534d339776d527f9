//! Gazetteer-based entity extraction

use matchcoach_core::{Entities, EntityKind, Error, Result};
use regex::Regex;

/// Extracts subject names and tiers from raw text
///
/// Both gazetteers are matched literally and case-sensitively. Entries that
/// start and end with an ASCII letter or digit must stand as whole words, so
/// "Gold" is not found in "Golden"; other entries (Chinese names, "S+") match
/// anywhere.
pub struct EntityExtractor {
    subjects: Vec<SubjectEntry>,
    tier_regex: Option<Regex>,
}

struct SubjectEntry {
    name: String,
    whole_word: Option<Regex>,
}

impl SubjectEntry {
    fn is_in(&self, text: &str) -> bool {
        match &self.whole_word {
            Some(regex) => regex.is_match(text),
            None => text.contains(self.name.as_str()),
        }
    }
}

fn needs_word_boundary(entry: &str) -> bool {
    let wordlike = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    wordlike(entry.chars().next()) && wordlike(entry.chars().last())
}

/// Escaped pattern for a gazetteer entry
fn literal_pattern(entry: &str) -> String {
    let escaped = regex::escape(entry);

    if needs_word_boundary(entry) {
        format!(r"\b{}\b", escaped)
    } else {
        escaped
    }
}

impl EntityExtractor {
    /// Create an extractor over the two gazetteers
    pub fn new(subject_names: Vec<String>, tiers: &[String]) -> Result<Self> {
        let subjects = subject_names
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|name| -> Result<SubjectEntry> {
                let whole_word = if needs_word_boundary(&name) {
                    let regex = Regex::new(&literal_pattern(&name)).map_err(|e| {
                        Error::pattern(format!("Failed to compile subject '{}': {}", name, e))
                    })?;
                    Some(regex)
                } else {
                    None
                };
                Ok(SubjectEntry { name, whole_word })
            })
            .collect::<Result<Vec<_>>>()?;

        let alternatives: Vec<String> = tiers
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| literal_pattern(t))
            .collect();

        let tier_regex = if alternatives.is_empty() {
            None
        } else {
            let pattern = format!("({})", alternatives.join("|"));
            let regex = Regex::new(&pattern)
                .map_err(|e| Error::pattern(format!("Failed to compile tier gazetteer: {}", e)))?;
            Some(regex)
        };

        Ok(Self {
            subjects,
            tier_regex,
        })
    }

    /// First subject of the gazetteer contained anywhere in the text
    ///
    /// Gazetteer order decides, not position in the text.
    pub fn subject_name(&self, text: &str) -> Option<&str> {
        self.subjects
            .iter()
            .find(|entry| entry.is_in(text))
            .map(|entry| entry.name.as_str())
    }

    /// Leftmost tier mentioned in the text
    pub fn tier<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.tier_regex
            .as_ref()?
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extract every entity kind
    pub fn extract(&self, text: &str) -> Entities {
        let mut entities = Entities::new();

        if let Some(name) = self.subject_name(text) {
            entities.insert(EntityKind::SubjectName, name.to_string());
        }

        if let Some(tier) = self.tier(text) {
            entities.insert(EntityKind::Tier, tier.to_string());
        }

        entities
    }
}
