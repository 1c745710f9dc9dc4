// Rust guideline compliant 2026-02-06

//! Command implementations for the Dohas CLI.

pub mod config;
pub mod deck;
pub mod fetch;
pub mod list;

use anyhow::{Context as _, Result};
use dohas_app::{ChallengeStore, HttpRemote, InitialState};
use dohas_core::{Config, FileStore};
use std::future::Future;
use std::path::PathBuf;

/// Store type driven by the CLI: file-backed storage and the HTTP remote.
pub type CliStore = ChallengeStore<FileStore, HttpRemote>;

/// Default configuration directory, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = ".dohas";

/// Resolved directories and configuration shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory holding `config.toml`.
    pub config_dir: PathBuf,
    /// Directory holding stored datasets.
    pub data_dir: PathBuf,
    /// Effective configuration.
    pub config: Config,
}

impl Context {
    /// Loads configuration and resolves directories.
    ///
    /// The data directory is taken from `data_dir`, then from the
    /// configuration, then defaults to `<config_dir>/data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load(config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
        let config = Config::load(&config_dir)
            .with_context(|| format!("Failed to load config from {}", config_dir.display()))?;
        Ok(Self::with_config(config_dir, data_dir, config))
    }

    /// Builds a context from an already loaded configuration.
    pub fn with_config(config_dir: PathBuf, data_dir: Option<PathBuf>, config: Config) -> Self {
        let data_dir = data_dir
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| config_dir.join("data"));
        Self {
            config_dir,
            data_dir,
            config,
        }
    }

    /// Opens a store over the data directory and the configured remote.
    ///
    /// Language and sort order default to the configuration when `initial`
    /// leaves them unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage path or HTTP client is invalid.
    pub fn open_store(&self, initial: InitialState) -> Result<CliStore> {
        let storage = FileStore::new(self.data_dir.clone())?;
        let remote = HttpRemote::new(self.config.remote.clone())?;
        let initial = InitialState {
            language: initial.language.or(Some(self.config.language)),
            sort_order: initial.sort_order.or(Some(self.config.sort_order)),
            ..initial
        };
        Ok(ChallengeStore::new(storage, remote, initial))
    }
}

/// Runs a future to completion on a single-threaded runtime.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
