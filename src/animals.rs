//! Catalog operations: listing animal names and fetching sighting details.

use crate::client::Client;
use crate::error::Result;
use crate::types::Animal;

impl Client {
    /// Fetch the names of all animals in the catalog.
    ///
    /// Requires a signed-in session. Order is as the server returned it; the
    /// client does not deduplicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::Unauthenticated`] without issuing a
    /// request when no token is installed, or
    /// [`crate::ClientError::Unauthorized`] when the server rejects the
    /// token.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spotter_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://example.com/api")?;
    /// let names = client.list_animal_names().await?;
    /// for name in names {
    ///     println!("{}", name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_animal_names(&self) -> Result<Vec<String>> {
        let response = self.get_authorized("animals/all").await?;
        self.read_json(response).await
    }

    /// Fetch the sighting record for a single animal.
    ///
    /// Requires a signed-in session. The name is interpolated into the
    /// request path as-is; callers must supply a path-safe identifier
    /// (names returned by [`Client::list_animal_names`] are).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::Unauthenticated`] without issuing a
    /// request when no token is installed, or
    /// [`crate::ClientError::Unauthorized`] when the server rejects the
    /// token.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spotter_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://example.com/api")?;
    /// let animal = client.get_animal("fox").await?;
    /// println!("{} seen at {}, {}", animal.name, animal.latitude, animal.longitude);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_animal(&self, name: &str) -> Result<Animal> {
        let path = format!("animals/{}", name);
        let response = self.get_authorized(&path).await?;
        self.read_json(response).await
    }
}
