// Rust guideline compliant 2026-02-06

//! Implementation of the `dohas fetch` command.
//!
//! Downloads every language from the remote content API into the data
//! directory.

use crate::commands::{block_on, Context};
use crate::OutputFormatter;
use anyhow::Result;
use dohas_app::{InitialState, RefreshReport};
use std::io::Write;

/// Refreshes stored content from the remote.
///
/// # Arguments
///
/// * `ctx` - Resolved configuration and directories
/// * `formatter` - The output formatter to use
/// * `out` - Destination for the refresh report
///
/// # Errors
///
/// Returns the store's error if any language fails to download, validate or
/// persist. Nothing is written to `out` in that case.
pub fn execute(ctx: &Context, formatter: &dyn OutputFormatter, out: &mut dyn Write) -> Result<()> {
    let mut store = ctx.open_store(InitialState::default())?;

    block_on(async {
        store.initialize_challenges().await;
        store.fetch_remote_content().await
    })??;

    if let Some(report) = RefreshReport::from_state(store.state()) {
        writeln!(out, "{}", formatter.format_refresh(&report))?;
    }
    Ok(())
}
