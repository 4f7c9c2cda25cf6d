use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// A phrase is one or more display lines, stacked top to bottom.
pub type Phrase = Vec<String>;

/// Candidate phrases; one is picked at random on every population cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseSet {
    phrases: Vec<Phrase>,
}

impl PhraseSet {
    pub fn new(phrases: Vec<Phrase>) -> Self {
        Self { phrases }
    }

    /// Parse a JSON array of phrases, each an array of lines:
    /// `[["The cake is a lie"], ["line one", "line two"]]`.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Pick a phrase by index (caller provides random index).
    pub fn pick(&self, index: usize) -> Option<&[String]> {
        if self.phrases.is_empty() {
            return None;
        }
        Some(&self.phrases[index % self.phrases.len()])
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }

    /// Every phrase needs at least one line with visible text.
    pub fn validate(&self) -> Result<()> {
        if self.phrases.is_empty() {
            return Err(Error::InvalidConfig("phrase set is empty".into()));
        }
        for (i, phrase) in self.phrases.iter().enumerate() {
            if phrase.iter().all(|line| line.trim().is_empty()) {
                return Err(Error::InvalidConfig(format!("phrase {i} has no visible text")));
            }
        }
        Ok(())
    }
}

impl Default for PhraseSet {
    fn default() -> Self {
        let phrases: &[&[&str]] = &[
            &["The cake is a lie"],
            &["Not enough minerals"],
            &["You have died"],
            &["It’s dangerous to go", "alone, take this!"],
            &["FINISH HIM!!!"],
            &["It’s super effective!"],
            &["Snake? Snake?", "SNAAAAAAAAKE!!!"],
            &["You're a wizard Harry!"],
            &["I see dead people"],
        ];
        Self::new(
            phrases
                .iter()
                .map(|lines| lines.iter().map(|l| (*l).to_string()).collect())
                .collect(),
        )
    }
}
