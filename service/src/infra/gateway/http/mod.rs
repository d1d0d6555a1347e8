//! HTTP [`Gateway`] implementation.

pub mod dto;
mod impls;

use std::time::Duration;

use derive_more::{Debug, Display, Error as StdError, From};
use secrecy::SecretBox;
use serde::Deserialize;
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::infra::gateway;
#[cfg(doc)]
use crate::infra::Gateway;

/// HTTP [`Gateway`] client of the remote booking API.
#[derive(Debug)]
pub struct Http {
    /// Inner [`reqwest`] client.
    client: reqwest::Client,

    /// Base URL of the remote booking API.
    base_url: String,

    /// Secret API key sent as a bearer token.
    #[debug(skip)]
    secret_key: SecretBox<String>,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to create a new [`Http`] client.
    pub fn new(config: Config) -> Result<Self, Traced<gateway::Error>> {
        let Config {
            base_url,
            secret_key,
            timeout,
        } = config;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        Ok(Self {
            client,
            base_url,
            secret_key: SecretBox::new(Box::new(secret_key)),
        })
    }

    /// Builds a full endpoint URL from the provided `path`.
    fn endpoint(&self, path: impl AsRef<str>) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.as_ref(),
        )
    }
}

/// [`Http`] client configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote booking API.
    #[default("http://127.0.0.1:8080/api".to_owned())]
    pub base_url: String,

    /// Secret API key sent as a bearer token.
    #[debug(skip)]
    #[default(String::new())]
    pub secret_key: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

/// HTTP [`Gateway`] [`Error`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to build the client or to perform a request.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),

    /// Remote API responded with an unexpected status.
    #[display("unexpected HTTP status: {status}")]
    #[from(ignore)]
    BadStatus {
        /// Status code of the response.
        #[error(not(source))]
        status: u16,
    },

    /// Remote API responded with a non-JSON or schema-violating body.
    #[display("failed to decode response body: {_0}")]
    Decode(serde_json::Error),

    /// Remote API responded with a well-formed but invalid payload.
    #[display("malformed response payload: {_0}")]
    Malformed(dto::Error),
}
