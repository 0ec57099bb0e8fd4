//! Random sampling of artworks that carry a preview image.

use artpal_types::FetchedArtwork;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::{ArtworkCatalog, CatalogError, FetchError};

/// Fetch a random artwork that has a small preview image.
///
/// The identifier list is requested once; identifiers are then drawn
/// uniformly at random and their records fetched until one carries a
/// preview. Records without a preview and identifiers the catalog no longer
/// knows (HTTP 404) are skipped. At most `max_attempts` records are sampled
/// (a value of zero is treated as one).
///
/// # Errors
/// - [`FetchError::EmptyCatalog`] when the index holds no identifiers
/// - [`FetchError::Exhausted`] when every sampled record was skipped
/// - [`FetchError::Catalog`] for any other catalog failure
pub async fn fetch_random_artwork<C, R>(catalog: &C, rng: &mut R, max_attempts: usize) -> Result<FetchedArtwork, FetchError>
where
    C: ArtworkCatalog + ?Sized,
    R: Rng + Send + ?Sized,
{
    let ids = catalog.object_ids().await?;
    if ids.is_empty() {
        return Err(FetchError::EmptyCatalog);
    }

    let max_attempts = max_attempts.max(1);
    for attempt in 1..=max_attempts {
        let Some(&id) = ids.choose(rng) else {
            return Err(FetchError::EmptyCatalog);
        };
        match catalog.object(id).await {
            Ok(artwork) if artwork.has_preview() => {
                info!(object_id = id, attempts = attempt, title = %artwork.title, "artwork accepted");
                return Ok(FetchedArtwork {
                    artwork,
                    attempts: attempt,
                });
            }
            Ok(_) => debug!(object_id = id, attempt, "skipping object without preview image"),
            Err(CatalogError::NotFound { .. }) => debug!(object_id = id, attempt, "skipping unknown object"),
            Err(error) => return Err(error.into()),
        }
    }

    Err(FetchError::Exhausted {
        attempts: max_attempts,
    })
}
