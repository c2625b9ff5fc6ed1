//! Account operations: sign-up and sign-in.

use crate::client::Client;
use crate::error::Result;
use crate::types::{TokenResponse, UserCredentials};
use tracing::debug;

impl Client {
    /// Register a new account.
    ///
    /// No credential is required. Succeeds on any 2xx response; the response
    /// body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// registration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spotter_client::{Client, UserCredentials};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://example.com/api")?;
    /// client.sign_up(&UserCredentials::new("alice", "s3cret")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sign_up(&self, credentials: &UserCredentials) -> Result<()> {
        let response = self.post_json("users/signup", credentials).await?;
        self.expect_empty(response).await
    }

    /// Sign in and install the returned bearer token.
    ///
    /// On success the decoded token becomes the session credential and every
    /// subsequent authenticated operation attaches it. This is the only
    /// operation that mutates session state; on failure the session is left
    /// untouched. A later successful sign-in replaces the token.
    ///
    /// Note that a server rejecting the token on a later request does not
    /// clear it — deciding whether to re-authenticate is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the
    /// credentials, or the token payload is missing or malformed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spotter_client::{Client, UserCredentials};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://example.com/api")?;
    /// client.sign_in(&UserCredentials::new("alice", "s3cret")).await?;
    /// assert!(client.is_authenticated());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sign_in(&self, credentials: &UserCredentials) -> Result<()> {
        let response = self.post_json("users/login", credentials).await?;
        let token_response: TokenResponse = self.read_json(response).await?;

        self.session().install(token_response.token);
        debug!(username = %credentials.username, "signed in");
        Ok(())
    }
}
