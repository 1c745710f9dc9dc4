// Rust guideline compliant 2026-02-06

//! Implementation of the `dohas deck` command.
//!
//! Replays swipes on the three-card deck and shows which doha each slot holds.

use crate::commands::{block_on, CliStore, Context};
use crate::output::CardView;
use crate::OutputFormatter;
use anyhow::Result;
use dohas_app::InitialState;
use dohas_core::{Language, Slot};
use std::io::Write;

/// Options for `dohas deck`.
#[derive(Debug, Clone, Default)]
pub struct DeckOptions {
    /// Language to show; the configured one when unset.
    pub language: Option<Language>,
    /// Filter expression such as `1-3,5+`.
    pub filter: Option<String>,
    /// Number of forward swipes to apply.
    pub swipes: usize,
    /// Number of backward steps to apply after the swipes.
    pub back: usize,
}

/// Shows the deck after a number of swipes.
///
/// # Arguments
///
/// * `ctx` - Resolved configuration and directories
/// * `options` - Selection and swipe counts
/// * `formatter` - The output formatter to use
/// * `out` - Destination for the rendered output
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the output cannot be
/// written.
pub fn execute(
    ctx: &Context,
    options: DeckOptions,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut store = ctx.open_store(InitialState {
        language: options.language,
        filter_string: options.filter,
        ..InitialState::default()
    })?;
    block_on(store.initialize_challenges())?;

    for _ in 0..options.swipes {
        store.shuffle();
    }
    for _ in 0..options.back {
        store.go_backwards();
    }

    writeln!(out, "{}", formatter.format_deck(&card_views(&store)))?;
    Ok(())
}

/// Returns the deck slots ordered from the front card to the back card.
pub fn card_views(store: &CliStore) -> Vec<CardView> {
    let state = store.state();
    let visible = store.visible_cards();

    let mut cards: Vec<CardView> = Slot::ALL
        .iter()
        .map(|&slot| CardView {
            slot: slot.index() + 1,
            priority: state.deck.priority(slot),
            data_index: state.deck.resolve(slot, state.dohas.len()),
            doha: visible[slot.index()].cloned(),
        })
        .collect();
    cards.sort_by_key(|card| card.priority);
    cards
}
