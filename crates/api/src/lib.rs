//! Museum catalog client utilities.
//!
//! This crate provides a lightweight client for the Metropolitan Museum of
//! Art public collection API. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Validating the configured base URL for safety
//! - Reading the object index and individual object records
//! - Sampling random artworks until one carries a preview image
//!
//! The [`ArtworkCatalog`] trait is the seam between the sampling logic and
//! the network; [`MuseumClient`] implements it over HTTP.
//!
//! # Example
//!
//! ```ignore
//! use artpal_api::{CatalogConfig, MuseumClient, fetch_random_artwork};
//!
//! let config = CatalogConfig::default();
//! let client = MuseumClient::new(&config)?;
//! let mut rng = rand::rngs::StdRng::from_os_rng();
//! let fetched = fetch_random_artwork(&client, &mut rng, config.max_attempts).await?;
//! println!("{}", fetched.artwork.title);
//! ```

mod client;
mod error;
mod fetch;

use artpal_types::Artwork;
use async_trait::async_trait;

pub use client::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT, MuseumClient};
pub use error::{CatalogError, FetchError};
pub use fetch::fetch_random_artwork;

/// Read-only access to the museum catalog.
#[async_trait]
pub trait ArtworkCatalog: Send + Sync {
    /// Identifiers of every object in the collection.
    async fn object_ids(&self) -> Result<Vec<u64>, CatalogError>;

    /// Full record for one object.
    async fn object(&self, id: u64) -> Result<Artwork, CatalogError>;
}
