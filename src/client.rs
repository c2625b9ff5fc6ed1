//! Core Animal Spotter client implementation.

use crate::error::{ClientError, Result};
use crate::session::Session;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// A client for the Animal Spotter API.
///
/// The client is cheap to clone; clones share the same session, so a token
/// installed by [`Client::sign_in`] on one clone is visible to all of them.
///
/// # Example
///
/// ```no_run
/// use spotter_client::{Client, UserCredentials};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("https://lambdaanimalspotter.vapor.cloud/api")?;
///
/// client.sign_in(&UserCredentials::new("alice", "s3cret")).await?;
/// let names = client.list_animal_names().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the Animal Spotter server.
    base_url: String,
    /// HTTP client.
    http: HttpClient,
    /// Shared bearer-token holder.
    session: Arc<Session>,
}

impl Client {
    /// Create a new Animal Spotter client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API root
    ///   (e.g., "https://lambdaanimalspotter.vapor.cloud/api")
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the URL is not absolute, or
    /// [`ClientError::Transport`] if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidInput(format!(
                "base URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            http,
            session: Arc::new(Session::default()),
        })
    }

    /// Set a custom timeout for all requests.
    ///
    /// A request that exceeds the timeout fails with
    /// [`ClientError::Transport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = HttpClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Whether a bearer token is currently installed.
    ///
    /// Lets the UI layer decide whether to prompt for sign-in without
    /// issuing a request.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Execute an unauthenticated POST with a JSON body.
    pub(crate) async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let encoded = serde_json::to_vec(body).map_err(ClientError::Encoding)?;
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .body(encoded)
            .send()
            .await?;
        Ok(response)
    }

    /// Execute a GET with the bearer token attached.
    ///
    /// Fails with [`ClientError::Unauthenticated`] before any request is
    /// issued when no token is installed.
    pub(crate) async fn get_authorized(&self, path: &str) -> Result<Response> {
        let token = self.session.token().ok_or(ClientError::Unauthenticated)?;
        let url = self.url(path);
        debug!(%url, "GET (authorized)");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        Ok(response)
    }

    /// Execute an unauthenticated GET against an absolute URL.
    pub(crate) async fn get_absolute(&self, url: &str) -> Result<Response> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Ok(response)
    }

    /// Classify a response status: 401 before any other non-2xx.
    fn check_status(status: StatusCode) -> Result<()> {
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Check the response status and read the body.
    ///
    /// Status checks run before the body is touched, so a 401 with a
    /// garbage body never reaches the decoder. A body-read failure
    /// (connection dropped mid-transfer) is a transport error.
    pub(crate) async fn read_success_body(&self, response: Response) -> Result<Vec<u8>> {
        Self::check_status(response.status())?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Classify a response and decode its JSON body.
    pub(crate) async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let body = self.read_success_body(response).await?;

        if body.is_empty() {
            return Err(ClientError::EmptyBody);
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "failed to decode response body");
            ClientError::Decoding(e)
        })
    }

    /// Classify a response that carries no meaningful body.
    pub(crate) async fn expect_empty(&self, response: Response) -> Result<()> {
        Self::check_status(response.status())
    }
}
