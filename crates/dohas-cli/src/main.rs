// Rust guideline compliant 2026-02-06

//! Dohas CLI Application
//!
//! Command-line interface for browsing, drilling and refreshing doha challenges.

use clap::Parser;
use dohas_app::{AppError, ErrorReport};
use dohas_cli::commands::{self, deck::DeckOptions, list::ListOptions};
use dohas_cli::{create_formatter, init_tracing, Context};
use dohas_core::{Language, SortOrder};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Parser, Debug)]
#[command(
    name = "dohas",
    version,
    about = "Dohas: couplet challenges on a three-card deck",
    long_about = "Dohas browses challenge datasets of couplets, walks them on a rotating \
                  three-card deck, and refreshes stored content from a remote content API.",
    after_help = "Examples:\n  \
                  dohas list --lang english --filter 1-3\n  \
                  dohas list --random --seed 7\n  \
                  dohas deck --filter 2+ --swipes 4\n  \
                  dohas fetch\n  \
                  dohas config --save\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding config.toml (default: .dohas)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Directory holding stored datasets
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List selected challenges or their dohas
    List {
        /// Language (hindi, english)
        #[arg(long)]
        lang: Option<Language>,

        /// Challenge filter, e.g. 1-3,5+
        #[arg(long)]
        filter: Option<String>,

        /// Sort order (asc, desc)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// List the flattened dohas
        #[arg(long)]
        dohas: bool,

        /// Shuffle the dohas
        #[arg(long)]
        random: bool,

        /// Seed for --random
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the three-card deck after swiping
    Deck {
        /// Language (hindi, english)
        #[arg(long)]
        lang: Option<Language>,

        /// Challenge filter, e.g. 1-3,5+
        #[arg(long)]
        filter: Option<String>,

        /// Forward swipes
        #[arg(long, default_value_t = 0)]
        swipes: usize,

        /// Backward steps
        #[arg(long, default_value_t = 0)]
        back: usize,
    },

    /// Refresh stored content from the remote API
    Fetch,

    /// Show the effective configuration
    Config {
        /// Save the effective configuration to config.toml
        #[arg(long)]
        save: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stderr().is_terminal();

    let _guard = match init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            report_error(&anyhow::Error::from(e), cli.json, use_color);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, cli.json, cli.config_dir, cli.data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            report_error(&e, cli.json, use_color);
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Option<Commands>,
    json: bool,
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let Some(command) = command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let ctx = Context::load(config_dir, data_dir)?;
    let formatter = create_formatter(json);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::List {
            lang,
            filter,
            sort,
            dohas,
            random,
            seed,
        } => {
            let options = ListOptions {
                language: lang,
                filter,
                sort,
                dohas,
                random,
                seed,
            };
            commands::list::execute(&ctx, options, formatter.as_ref(), &mut out)?;
        }
        Commands::Deck {
            lang,
            filter,
            swipes,
            back,
        } => {
            let options = DeckOptions {
                language: lang,
                filter,
                swipes,
                back,
            };
            commands::deck::execute(&ctx, options, formatter.as_ref(), &mut out)?;
        }
        Commands::Fetch => {
            commands::fetch::execute(&ctx, formatter.as_ref(), &mut out)?;
        }
        Commands::Config { save } => {
            commands::config::execute(&ctx, save, formatter.as_ref(), &mut out)?;
        }
    }

    Ok(())
}

/// Prints an error to stderr, as an error report in JSON mode.
fn report_error(error: &anyhow::Error, json: bool, use_color: bool) {
    if json {
        let rendered = match error.downcast_ref::<AppError>() {
            Some(app) => serde_json::to_string(&ErrorReport::from_error(app))
                .unwrap_or_else(|_| error.to_string()),
            None => create_formatter(true).format_error(&format!("{error:#}")),
        };
        eprintln!("{}", rendered);
        return;
    }

    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "Error: ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{error:#}");
}
