// Rust guideline compliant 2026-02-06

//! Implementation of the `dohas list` command.
//!
//! Lists the selected challenges, or their flattened dohas, for one language
//! with optional filtering, sort order and shuffling.

use crate::commands::{block_on, Context};
use crate::OutputFormatter;
use anyhow::Result;
use dohas_app::InitialState;
use dohas_core::{Language, SortOrder};
use std::io::Write;

/// Options for `dohas list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Language to list; the configured one when unset.
    pub language: Option<Language>,
    /// Filter expression such as `1-3,5+`.
    pub filter: Option<String>,
    /// Parent order; the configured one when unset.
    pub sort: Option<SortOrder>,
    /// List the flattened dohas instead of challenges.
    pub dohas: bool,
    /// Shuffle the flattened dohas. Implies `dohas`.
    pub random: bool,
    /// Seed for the shuffle.
    pub seed: Option<u64>,
}

/// Lists challenges or dohas.
///
/// # Arguments
///
/// * `ctx` - Resolved configuration and directories
/// * `options` - Selection options
/// * `formatter` - The output formatter to use
/// * `out` - Destination for the rendered output
///
/// # Returns
///
/// Ok if the list was displayed successfully, Err otherwise.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the output cannot be
/// written. Unreadable stored data falls back to the bundled dataset.
pub fn execute(
    ctx: &Context,
    options: ListOptions,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut store = ctx.open_store(InitialState {
        language: options.language,
        sort_order: options.sort,
        filter_string: options.filter,
        seed: options.seed,
        ..InitialState::default()
    })?;

    block_on(store.initialize_challenges())?;
    if options.random {
        store.set_randomized(true);
    }

    let state = store.state();
    tracing::debug!(
        language = %state.language,
        selected = state.selected_challenges.len(),
        dohas = state.dohas.len(),
        "listing selection"
    );

    let rendered = if options.dohas || options.random {
        formatter.format_dohas(&state.dohas)
    } else {
        formatter.format_challenges(&state.selected_challenges)
    };
    writeln!(out, "{}", rendered)?;

    Ok(())
}
