//! Image fetching and decoding.

use crate::client::Client;
use crate::error::{ClientError, Result};
use image::DynamicImage;
use url::Url;

impl Client {
    /// Fetch and decode a sighting photo.
    ///
    /// The URL must be absolute (`http` or `https`); anything else fails
    /// with [`ClientError::InvalidInput`] before a request is issued. Image
    /// resources are not credential-gated, so no auth header is attached.
    ///
    /// The body is decoded with format auto-detection; bytes that are not a
    /// recognizable image fail with [`ClientError::InvalidImageData`]. That
    /// check runs only after transport, status, and empty-body
    /// classification.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the request fails, or the
    /// body is not an image.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spotter_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("https://example.com/api")?;
    /// let animal = client.get_animal("fox").await?;
    /// let photo = client.fetch_image(&animal.image_url).await?;
    /// println!("{}x{}", photo.width(), photo.height());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_image(&self, url: &str) -> Result<DynamicImage> {
        let parsed = Url::parse(url)
            .map_err(|e| ClientError::InvalidInput(format!("malformed image URL: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidInput(format!(
                "image URL must be http or https, got scheme: {}",
                parsed.scheme()
            )));
        }

        let response = self.get_absolute(parsed.as_str()).await?;
        let body = self.read_success_body(response).await?;

        if body.is_empty() {
            return Err(ClientError::EmptyBody);
        }

        image::load_from_memory(&body).map_err(|_| ClientError::InvalidImageData)
    }
}
