// Rust guideline compliant 2026-02-06

//! Default datasets shipped with the crate.

use crate::{Challenge, Language, Result};

const HINDI: &str = include_str!("../data/hindi-challenges.json");
const ENGLISH: &str = include_str!("../data/english-challenges.json");

fn raw(language: Language) -> &'static str {
    match language {
        Language::Hindi => HINDI,
        Language::English => ENGLISH,
    }
}

/// Parses the bundled dataset for a language.
///
/// # Errors
///
/// Returns an error if the embedded JSON is malformed.
pub fn try_challenges(language: Language) -> Result<Vec<Challenge>> {
    Ok(serde_json::from_str(raw(language))?)
}

/// Returns the bundled dataset for a language, or an empty dataset if the
/// embedded JSON cannot be parsed.
#[must_use]
pub fn challenges(language: Language) -> Vec<Challenge> {
    try_challenges(language).unwrap_or_else(|e| {
        tracing::error!(%language, error = %e, "bundled dataset is malformed");
        Vec::new()
    })
}
