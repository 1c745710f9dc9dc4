// Rust guideline compliant 2026-02-06

//! Id filter parsing.
//!
//! A filter string is a comma-separated list of tokens, each of which is a
//! bare id (`5`), a closed range (`1-12`) or an open range (`40+`). Input that
//! does not match the whole grammar is not an error: it selects everything.

use crate::Challenge;
use regex::Regex;
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::OnceLock;

// ASCII digits only: `\d` in `regex` also matches Devanagari digits.
const FILTER_GRAMMAR: &str = r"^[0-9]+(-[0-9]+)?(\+)?(,[0-9]+(-[0-9]+)?(\+)?)*$";

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(FILTER_GRAMMAR).expect("filter grammar is a valid regex"))
}

/// An inclusive range of challenge ids. `end == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    /// First id in the range.
    pub start: u64,
    /// Last id in the range, if bounded.
    pub end: Option<u64>,
}

impl IdRange {
    /// Returns true if `id` lies within the range.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        id >= self.start && self.end.map_or(true, |end| id <= end)
    }
}

/// A parsed id filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdFilter {
    /// Accept every id. Used for empty or ungrammatical input.
    #[default]
    PassThrough,
    /// Accept ids covered by at least one range.
    Ranges(Vec<IdRange>),
}

impl IdFilter {
    /// Parses a filter string.
    ///
    /// # Arguments
    ///
    /// * `input` - Filter text such as `"1-12,33,40+"`
    ///
    /// # Returns
    ///
    /// `IdFilter::PassThrough` when the input is empty or does not match the
    /// grammar, otherwise the union of every token's ranges.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if !grammar().is_match(input) {
            return IdFilter::PassThrough;
        }

        let ranges = input.split(',').filter_map(parse_token).collect();
        IdFilter::Ranges(ranges)
    }

    /// Returns true if this filter accepts every id.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        matches!(self, IdFilter::PassThrough)
    }

    /// Returns true if `id` is selected by this filter.
    #[must_use]
    pub fn matches(&self, id: u32) -> bool {
        match self {
            IdFilter::PassThrough => true,
            IdFilter::Ranges(ranges) => ranges.iter().any(|r| r.contains(u64::from(id))),
        }
    }

    /// Keeps the challenges whose id is selected, preserving their order.
    #[must_use]
    pub fn apply(&self, challenges: &[Challenge]) -> Vec<Challenge> {
        challenges
            .iter()
            .filter(|c| self.matches(c.id))
            .cloned()
            .collect()
    }
}

impl FromStr for IdFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IdFilter::parse(s))
    }
}

// A token that carries both a range and `+`, or a number too large for u64,
// passes the grammar but selects nothing.
fn parse_token(token: &str) -> Option<IdRange> {
    if let Some(start) = token.strip_suffix('+') {
        let start = start.parse().ok()?;
        return Some(IdRange { start, end: None });
    }

    if let Some((start, end)) = token.split_once('-') {
        return Some(IdRange {
            start: start.parse().ok()?,
            end: Some(end.parse().ok()?),
        });
    }

    let id = token.parse().ok()?;
    Some(IdRange {
        start: id,
        end: Some(id),
    })
}
