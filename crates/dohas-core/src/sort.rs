// Rust guideline compliant 2026-02-06

//! Ordering of challenges and flattening into a doha sequence.
//!
//! Only the parent order ever flips with [`SortOrder`]; dohas inside one
//! challenge always run by ascending `sequence`.

use crate::{Challenge, Doha, SortOrder};
use std::cmp::Ordering;

fn compare_ids(a: u32, b: u32, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => a.cmp(&b),
        SortOrder::Desc => b.cmp(&a),
    }
}

/// Sorts challenges by id.
///
/// # Arguments
///
/// * `challenges` - Challenges to sort
/// * `order` - Ascending or descending id order
///
/// # Returns
///
/// A new, sorted vector. The input is left untouched.
#[must_use]
pub fn sort_challenges(challenges: &[Challenge], order: SortOrder) -> Vec<Challenge> {
    let mut sorted = challenges.to_vec();
    sorted.sort_by(|a, b| compare_ids(a.id, b.id, order));
    sorted
}

/// Sorts challenges by id and concatenates their dohas.
///
/// # Arguments
///
/// * `challenges` - Challenges to flatten
/// * `order` - Parent order
///
/// # Returns
///
/// Each challenge's dohas by ascending sequence, concatenated in parent order.
#[must_use]
pub fn sort_and_flatten(challenges: &[Challenge], order: SortOrder) -> Vec<Doha> {
    sort_challenges(challenges, order)
        .iter()
        .flat_map(|challenge| {
            let mut dohas = challenge.dohas.clone();
            dohas.sort_by_key(|d| d.sequence);
            dohas
        })
        .collect()
}

/// Re-sorts an already flattened sequence without its parents.
///
/// Produces the same order as [`sort_and_flatten`] over the owning challenges.
#[must_use]
pub fn sort_dohas(dohas: &[Doha], order: SortOrder) -> Vec<Doha> {
    let mut sorted = dohas.to_vec();
    sorted.sort_by(|a, b| {
        compare_ids(a.challenge_id, b.challenge_id, order).then(a.sequence.cmp(&b.sequence))
    });
    sorted
}
