// Rust guideline compliant 2026-02-06

//! Output formatting module for the Dohas CLI.
//!
//! This module renders challenges, dohas, deck views and notices either as
//! JSON for machine consumption or as human-readable tables.

use dohas_app::RefreshReport;
use dohas_core::{Challenge, Config, Doha};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

/// One physical card slot of the deck, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Physical slot number, starting at 1.
    pub slot: usize,
    /// Priority of the slot; 0 is the front card.
    pub priority: usize,
    /// Position in the flattened sequence, if any.
    pub data_index: Option<usize>,
    /// The doha on the card, if the sequence is not empty.
    pub doha: Option<Doha>,
}

/// Effective configuration together with the resolved directories.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    /// Directory holding `config.toml`.
    pub config_dir: PathBuf,
    /// Directory holding stored datasets.
    pub data_dir: PathBuf,
    /// Loaded configuration, with the token redacted.
    #[serde(flatten)]
    pub config: Config,
}

/// Output formatter trait.
///
/// Defines the interface for formatting Dohas data in different output formats.
pub trait OutputFormatter {
    /// Formats the selected challenges.
    ///
    /// # Arguments
    /// * `challenges` - The challenges to format
    ///
    /// # Returns
    /// A formatted string representation of the list
    fn format_challenges(&self, challenges: &[Challenge]) -> String;

    /// Formats a flattened doha sequence.
    fn format_dohas(&self, dohas: &[Doha]) -> String;

    /// Formats the three deck slots, front card first.
    fn format_deck(&self, cards: &[CardView]) -> String;

    /// Formats the outcome of a remote refresh.
    fn format_refresh(&self, report: &RefreshReport) -> String;

    /// Formats the effective configuration.
    fn format_config(&self, view: &ConfigView) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T, what: &str) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            json!({ "error": format!("Failed to serialize {what}") }).to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_challenges(&self, challenges: &[Challenge]) -> String {
        let output = json!({
            "challenges": challenges,
            "total": challenges.len(),
        });
        Self::render(&output, "challenge list")
    }

    fn format_dohas(&self, dohas: &[Doha]) -> String {
        let output = json!({
            "dohas": dohas,
            "total": dohas.len(),
        });
        Self::render(&output, "doha list")
    }

    fn format_deck(&self, cards: &[CardView]) -> String {
        Self::render(&json!({ "cards": cards }), "deck")
    }

    fn format_refresh(&self, report: &RefreshReport) -> String {
        Self::render(report, "refresh report")
    }

    fn format_config(&self, view: &ConfigView) -> String {
        Self::render(view, "configuration")
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_challenges(&self, challenges: &[Challenge]) -> String {
        if challenges.is_empty() {
            return "No challenges selected.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Dohas", "Category", "Book"]);

        for challenge in challenges {
            builder.push_record([
                challenge.id.to_string(),
                challenge.title.clone(),
                challenge.dohas.len().to_string(),
                challenge.category.clone().unwrap_or_default(),
                challenge.book.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_dohas(&self, dohas: &[Doha]) -> String {
        if dohas.is_empty() {
            return "No challenges selected.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Challenge", "Seq", "Line 1", "Line 2"]);

        for (position, doha) in dohas.iter().enumerate() {
            builder.push_record([
                position.to_string(),
                doha.challenge_id.to_string(),
                doha.sequence.to_string(),
                doha.line1.clone(),
                doha.line2.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_deck(&self, cards: &[CardView]) -> String {
        if cards.iter().all(|card| card.doha.is_none()) {
            return "No challenges selected.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["Priority", "Slot", "Index", "Doha"]);

        for card in cards {
            let text = card
                .doha
                .as_ref()
                .map_or_else(|| "-".to_string(), |d| format!("{}\n{}", d.line1, d.line2));
            builder.push_record([
                card.priority.to_string(),
                card.slot.to_string(),
                card.data_index.map_or_else(|| "-".to_string(), |i| i.to_string()),
                text,
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_refresh(&self, report: &RefreshReport) -> String {
        format!(
            "{}\n{}: {} challenges, {} dohas",
            report.message,
            report.language.display_name(),
            report.challenges,
            report.dohas
        )
    }

    fn format_config(&self, view: &ConfigView) -> String {
        let config = &view.config;
        let data_dir = config
            .data_dir
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());

        let mut builder = Builder::default();
        builder.push_record(["Key", "Value"]);
        builder.push_record(["config_dir".to_string(), view.config_dir.display().to_string()]);
        builder.push_record([
            "resolved_data_dir".to_string(),
            view.data_dir.display().to_string(),
        ]);
        builder.push_record(["language".to_string(), config.language.to_string()]);
        builder.push_record(["sort_order".to_string(), config.sort_order.to_string()]);
        builder.push_record(["data_dir".to_string(), data_dir]);
        builder.push_record(["remote.project_id".to_string(), config.remote.project_id.clone()]);
        builder.push_record(["remote.dataset".to_string(), config.remote.dataset.clone()]);
        builder.push_record([
            "remote.api_version".to_string(),
            config.remote.api_version.clone(),
        ]);
        builder.push_record(["remote.token".to_string(), config.remote.token.clone()]);
        builder.push_record([
            "remote.timeout_secs".to_string(),
            config.remote.timeout_secs.to_string(),
        ]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether JSON output was requested
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
