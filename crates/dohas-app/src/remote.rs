// Rust guideline compliant 2026-02-09

//! Remote content source.
//!
//! The remote is a query-style HTTP endpoint: a POST carrying a query string
//! answers `{ "result": [...] }`. The source reports the `result` field as-is;
//! deciding that a null or empty result is a failure is left to the store.

use crate::error::{AppError, Result};
use async_trait::async_trait;
use dohas_core::{Challenge, Language, RemoteConfig};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// A source of authoritative datasets, one per language.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetches the dataset for `language`.
    ///
    /// # Returns
    ///
    /// The `result` field of the response, `None` when null or missing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures and non-success statuses.
    async fn fetch(&self, language: Language) -> Result<Option<Vec<Challenge>>>;
}

#[async_trait]
impl<T: RemoteSource + ?Sized> RemoteSource for Arc<T> {
    async fn fetch(&self, language: Language) -> Result<Option<Vec<Challenge>>> {
        (**self).fetch(language).await
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Vec<Challenge>>,
}

/// HTTP client for the hosted content API.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl HttpRemote {
    /// Creates a client from remote settings.
    ///
    /// Incomplete settings are accepted here and reported on the first fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::Core(dohas_core::Error::Config(format!(
                    "cannot build HTTP client: {e}"
                )))
            })?;
        Ok(Self { config, client })
    }

    /// Returns the query endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            self.config.project_id, self.config.api_version, self.config.dataset
        )
    }

    /// Returns the query selecting every challenge of `language` ordered by id.
    #[must_use]
    pub fn query_for(language: Language) -> String {
        format!(
            "*[_type == '{}']|order(id){{id,title,dohas,category,book}}",
            language.as_str()
        )
    }

    /// Decodes a response body into its `result` field.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Remote` if the body is not a valid response document.
    pub fn decode_body(language: Language, body: &str) -> Result<Option<Vec<Challenge>>> {
        let response: QueryResponse =
            serde_json::from_str(body).map_err(|e| AppError::Remote {
                language,
                message: format!("invalid response body: {e}"),
            })?;
        Ok(response.result)
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch(&self, language: Language) -> Result<Option<Vec<Challenge>>> {
        self.config.require_complete()?;

        let remote_error = |e: reqwest::Error| AppError::Remote {
            language,
            message: e.to_string(),
        };

        tracing::debug!(%language, endpoint = %self.endpoint(), "querying remote content");
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&serde_json::json!({ "query": Self::query_for(language) }))
            .send()
            .await
            .map_err(remote_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Remote {
                language,
                message: status
                    .canonical_reason()
                    .map_or_else(|| status.to_string(), str::to_string),
            });
        }

        let body = response.text().await.map_err(remote_error)?;
        Self::decode_body(language, &body)
    }
}
