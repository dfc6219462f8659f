//! # Fetch Service
//!
//! Builds resource URLs and performs the outbound GET. Requests run on their
//! own tokio task and report back through a channel so the UI loop never
//! blocks on the network.

use crate::app::models::{Action, Route};
use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::mpsc;

/// Base address of the public placeholder API
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Why a fetch produced no data
///
/// The UI collapses all of these into one message; the detail only reaches
/// the log.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading response body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of a background fetch, tagged with the generation that started it
#[derive(Debug)]
pub enum FetchMessage {
    Success { request: u64, data: Value },
    Failure { request: u64, error: FetchError },
}

impl FetchMessage {
    /// Generation this outcome belongs to
    pub fn request(&self) -> u64 {
        match self {
            FetchMessage::Success { request, .. } | FetchMessage::Failure { request, .. } => {
                *request
            }
        }
    }

    /// Convert into the terminal action for the reducer
    pub fn into_action(self) -> Action {
        match self {
            FetchMessage::Success { request, data } => Action::FetchDataSuccess { request, data },
            FetchMessage::Failure { request, error } => {
                tracing::warn!("Fetch for request {} failed: {}", request, error);
                Action::FetchDataError { request }
            }
        }
    }
}

/// Build the target address for a route and optional identifier
///
/// The identifier is appended verbatim and only when non-empty.
pub fn build_url(base_url: &str, route: Route, number: &str) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), route.as_path());
    if !number.is_empty() {
        url.push('/');
        url.push_str(number);
    }
    url
}

/// Service for fetching placeholder resources
pub struct FetchService {
    client: Client,
    base_url: String,
    /// Channel for receiving background fetch outcomes
    response_receiver: mpsc::Receiver<FetchMessage>,
    /// Channel sender handed to background fetch tasks
    response_sender: mpsc::Sender<FetchMessage>,
}

impl FetchService {
    /// Create a service targeting the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        tracing::debug!("Creating FetchService for {}", base_url);

        let client = Client::builder().build()?;
        let (response_sender, response_receiver) = mpsc::channel(10);

        Ok(Self {
            client,
            base_url,
            response_receiver,
            response_sender,
        })
    }

    /// URL a fetch for these inputs would hit
    pub fn url_for(&self, route: Route, number: &str) -> String {
        build_url(&self.base_url, route, number)
    }

    /// Fetch and decode a resource, waiting for the result
    pub async fn fetch(&self, route: Route, number: &str) -> Result<Value, FetchError> {
        let url = self.url_for(route, number);
        Self::get_json(&self.client, &url).await
    }

    async fn get_json(client: &Client, url: &str) -> Result<Value, FetchError> {
        tracing::info!("GET {}", url);

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        // Any status is accepted; only the body decides success.
        let status = response.status();
        tracing::debug!("GET {} answered {}", url, status);

        let body = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Start a fetch in the background
    ///
    /// The outcome is delivered to [`poll_response`](Self::poll_response)
    /// tagged with `request`. Earlier fetches are not cancelled.
    pub fn execute_async(&self, request: u64, route: Route, number: &str) {
        let client = self.client.clone();
        let url = self.url_for(route, number);
        let result_sender = self.response_sender.clone();

        tokio::spawn(async move {
            let message = match Self::get_json(&client, &url).await {
                Ok(data) => FetchMessage::Success { request, data },
                Err(error) => FetchMessage::Failure { request, error },
            };

            // Receiver may be gone if the app is shutting down
            let _ = result_sender.send(message).await;
        });
    }

    /// Take a finished fetch outcome, if any (non-blocking)
    pub fn poll_response(&mut self) -> Option<FetchMessage> {
        self.response_receiver.try_recv().ok()
    }

    /// Wait for the next finished fetch outcome
    pub async fn next_response(&mut self) -> Option<FetchMessage> {
        self.response_receiver.recv().await
    }
}
