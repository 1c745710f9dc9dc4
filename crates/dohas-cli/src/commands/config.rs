// Rust guideline compliant 2026-02-06

//! Implementation of the `dohas config` command.

use crate::commands::Context;
use crate::output::ConfigView;
use crate::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Prints the effective configuration, optionally saving it first.
///
/// # Arguments
///
/// * `ctx` - Resolved configuration and directories
/// * `save` - Write the effective configuration to `<config_dir>/config.toml`
/// * `formatter` - The output formatter to use
/// * `out` - Destination for the rendered output
///
/// # Errors
///
/// Returns an error if the configuration cannot be saved or the output cannot
/// be written.
pub fn execute(
    ctx: &Context,
    save: bool,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    if save {
        std::fs::create_dir_all(&ctx.config_dir)?;
        ctx.config.save(&ctx.config_dir)?;
        tracing::info!(dir = %ctx.config_dir.display(), "configuration saved");
    }

    let mut config = ctx.config.clone();
    config.remote = config.remote.redacted();
    let view = ConfigView {
        config_dir: ctx.config_dir.clone(),
        data_dir: ctx.data_dir.clone(),
        config,
    };

    writeln!(out, "{}", formatter.format_config(&view))?;
    Ok(())
}
