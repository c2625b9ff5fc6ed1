//! Type-safe Rust client for the Animal Spotter API.
//!
//! This crate provides the session and data-access layer for the Animal
//! Spotter service: it signs users up and in, holds the bearer token for the
//! session, attaches it to catalog requests, and decodes responses into
//! typed records. Screen layout and rendering belong to the caller.
//!
//! # Features
//!
//! - Account registration and sign-in
//! - Bearer-token session shared across client clones
//! - Catalog access (list animal names, fetch sighting details)
//! - Image fetching with decode validation
//! - A closed error taxonomy with a fixed classification order
//!
//! # Example
//!
//! ```no_run
//! use spotter_client::{Client, UserCredentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://lambdaanimalspotter.vapor.cloud/api")?;
//!
//! // Sign in; the returned token is held by the client.
//! client.sign_in(&UserCredentials::new("alice", "s3cret")).await?;
//!
//! // List the catalog, then pull one record.
//! let names = client.list_animal_names().await?;
//! let animal = client.get_animal(&names[0]).await?;
//! println!("{} last seen: {}", animal.name, animal.time_seen);
//!
//! // Images are fetched separately and decoded before return.
//! let photo = client.fetch_image(&animal.image_url).await?;
//! println!("photo is {}x{}", photo.width(), photo.height());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. The taxonomy is closed
//! and classification order is fixed, so callers can match on exactly what
//! went wrong:
//!
//! ```no_run
//! # use spotter_client::{Client, ClientError};
//! # async fn example() -> Result<(), ClientError> {
//! # let client = Client::new("https://example.com/api")?;
//! match client.list_animal_names().await {
//!     Ok(names) => println!("{} animals", names.len()),
//!     Err(ClientError::Unauthenticated) | Err(ClientError::Unauthorized) => {
//!         println!("prompt for sign-in");
//!     }
//!     Err(e) => println!("error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Operations may be issued concurrently; each one sends a single request
//! and completes through its returned future. The token sits behind a
//! single-writer lock, so a concurrent [`Client::sign_in`] is race-free at
//! the data level, but callers that care whether an in-flight request uses
//! the old or new token must order the calls themselves. Nothing is retried
//! internally and the token is never persisted.

mod animals;
mod client;
mod error;
mod images;
mod session;
mod types;
mod users;

// Re-export the main types
pub use client::Client;
pub use error::{ClientError, Result};
pub use types::{Animal, UserCredentials};
