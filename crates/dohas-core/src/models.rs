// Rust guideline compliant 2026-02-06

//! Core data models for Dohas.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Content language of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Devanagari dataset (the default).
    #[default]
    Hindi,
    /// Transliterated dataset.
    English,
}

impl Language {
    /// Every supported language, in remote refresh order.
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// Returns the lowercase identifier used in storage keys and remote queries.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hindi => "hindi",
            Language::English => "english",
        }
    }

    /// Returns the capitalised name used in user-facing messages.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
        }
    }

    /// Returns the durable storage key holding this language's dataset.
    ///
    /// # Returns
    ///
    /// A key of the form `contentData_<language>`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("contentData_{}", self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hindi" => Ok(Language::Hindi),
            "english" => Ok(Language::English),
            other => Err(Error::Config(format!(
                "unknown language '{other}', expected hindi or english"
            ))),
        }
    }
}

/// Ordering of challenges by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Lowest id first.
    #[default]
    Asc,
    /// Highest id first.
    Desc,
}

impl SortOrder {
    /// Returns the opposite order.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Returns the lowercase identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::Config(format!(
                "unknown sort order '{other}', expected asc or desc"
            ))),
        }
    }
}

/// Presentation mode of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeckMode {
    /// Plain flip cards.
    #[default]
    Default,
    /// Cards are presented as questions.
    Quiz,
}

/// A single couplet belonging to one challenge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doha {
    /// Identifier of the doha.
    pub id: u32,
    /// First line of the couplet.
    pub line1: String,
    /// Second line of the couplet.
    pub line2: String,
    /// 1-based position within the parent challenge.
    pub sequence: u32,
    /// Id of the parent challenge.
    pub challenge_id: u32,
}

impl Doha {
    /// Returns the `(challenge_id, sequence)` key that identifies this doha
    /// across languages and dataset refreshes.
    #[must_use]
    pub fn key(&self) -> (u32, u32) {
        (self.challenge_id, self.sequence)
    }
}

/// A titled group of dohas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique identifier (>= 1).
    pub id: u32,
    /// Title of the challenge.
    pub title: String,
    /// Dohas of the challenge, in no guaranteed order.
    #[serde(default)]
    pub dohas: Vec<Doha>,
    /// Optional category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional source book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
}

impl Challenge {
    /// Creates a challenge without dohas.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            dohas: Vec::new(),
            category: None,
            book: None,
        }
    }

    /// Appends a doha with the next free sequence number.
    pub fn with_doha(
        mut self,
        id: u32,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        let sequence = self.dohas.len() as u32 + 1;
        self.dohas.push(Doha {
            id,
            line1: line1.into(),
            line2: line2.into(),
            sequence,
            challenge_id: self.id,
        });
        self
    }

    /// Validates the challenge data.
    ///
    /// # Returns
    ///
    /// Ok if the challenge is well formed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is zero
    /// - A doha points at a different challenge
    /// - Two dohas share a sequence number
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(Error::InvalidChallenge(
                "challenge id must be at least 1".to_string(),
            ));
        }

        let mut sequences = HashSet::with_capacity(self.dohas.len());
        for doha in &self.dohas {
            if doha.challenge_id != self.id {
                return Err(Error::InvalidChallenge(format!(
                    "doha {} belongs to challenge {} but is listed under {}",
                    doha.id, doha.challenge_id, self.id
                )));
            }
            if !sequences.insert(doha.sequence) {
                return Err(Error::InvalidChallenge(format!(
                    "challenge {} repeats sequence {}",
                    self.id, doha.sequence
                )));
            }
        }

        Ok(())
    }
}

/// Validates a complete dataset.
///
/// # Errors
///
/// Returns an error if any challenge is invalid or two challenges share an id.
pub fn validate_dataset(challenges: &[Challenge]) -> Result<()> {
    let mut ids = HashSet::with_capacity(challenges.len());
    for challenge in challenges {
        challenge.validate()?;
        if !ids.insert(challenge.id) {
            return Err(Error::InvalidChallenge(format!(
                "duplicate challenge id {}",
                challenge.id
            )));
        }
    }
    Ok(())
}
