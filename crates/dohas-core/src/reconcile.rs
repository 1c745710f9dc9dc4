// Rust guideline compliant 2026-02-06

//! Reconciliation of a previous selection against a freshly loaded dataset.
//!
//! A language switch or a remote refresh replaces the authoritative dataset.
//! The user's selection (which challenges, in which order) and the position of
//! every card in the deck survive the swap; only the field values are taken
//! from the new dataset.

use crate::{sort_and_flatten, Challenge, Doha, IdFilter, SortOrder};
use std::collections::HashMap;

/// Output of [`reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciled {
    /// Selected challenges, refreshed from the authoritative dataset.
    pub selection: Vec<Challenge>,
    /// Flattened dohas, refreshed in their previous order.
    pub flattened: Vec<Doha>,
}

impl Reconciled {
    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty() && self.flattened.is_empty()
    }
}

/// Rebuilds a selection from the authoritative dataset.
///
/// # Arguments
///
/// * `authoritative` - The newly loaded dataset
/// * `prior_selection` - Previously selected challenges; empty on first load
/// * `prior_flattened` - Previously flattened dohas; empty to derive fresh
/// * `filter` - Current filter text
/// * `order` - Parent order used when deriving the flattened sequence fresh
///
/// # Returns
///
/// The refreshed selection. An empty dataset yields an empty result.
#[must_use]
pub fn reconcile(
    authoritative: &[Challenge],
    prior_selection: &[Challenge],
    prior_flattened: &[Doha],
    filter: &str,
    order: SortOrder,
) -> Reconciled {
    if authoritative.is_empty() {
        return Reconciled::default();
    }

    let baseline = if prior_selection.is_empty() {
        authoritative
    } else {
        prior_selection
    };

    let by_id: HashMap<u32, &Challenge> = authoritative.iter().map(|c| (c.id, c)).collect();
    let filter = IdFilter::parse(filter);

    // Parents that vanished upstream cannot be refreshed and are dropped.
    let selection: Vec<Challenge> = baseline
        .iter()
        .filter(|c| filter.matches(c.id))
        .filter_map(|c| by_id.get(&c.id).map(|fresh| (*fresh).clone()))
        .collect();

    if prior_flattened.is_empty() {
        let flattened = sort_and_flatten(&selection, order);
        return Reconciled {
            selection,
            flattened,
        };
    }

    let by_key: HashMap<(u32, u32), &Doha> = authoritative
        .iter()
        .flat_map(|c| c.dohas.iter())
        .map(|d| (d.key(), d))
        .collect();

    // Entries without an upstream match stay as they were so deck positions hold.
    let flattened = prior_flattened
        .iter()
        .map(|stale| {
            by_key
                .get(&stale.key())
                .map_or_else(|| stale.clone(), |fresh| (*fresh).clone())
        })
        .collect();

    Reconciled {
        selection,
        flattened,
    }
}
