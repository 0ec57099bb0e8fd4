//! Artwork records as returned by the museum collection API.

use serde::{Deserialize, Serialize};

/// Label shown when a record carries no artist name.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A single object record from the catalog.
///
/// Field names follow the catalog's JSON payload. Every string field is
/// optional upstream, so missing values deserialize to empty strings and
/// callers check emptiness instead of matching on `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Catalog identifier of the object
    #[serde(rename = "objectID", default)]
    pub object_id: u64,
    #[serde(default)]
    pub title: String,
    /// Display name of the artist; empty when unattributed
    #[serde(default)]
    pub artist_display_name: String,
    /// Free-form date string (e.g. "ca. 1665")
    #[serde(default)]
    pub object_date: String,
    /// Small preview image URL; empty when the object has no image
    #[serde(default)]
    pub primary_image_small: String,
    /// Canonical page for the object on the museum website
    #[serde(rename = "objectURL", default)]
    pub object_url: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub medium: String,
}

impl Artwork {
    /// Whether the record carries a displayable preview image.
    pub fn has_preview(&self) -> bool {
        !self.primary_image_small.trim().is_empty()
    }

    /// Artist name, or [`UNKNOWN_ARTIST`] for unattributed objects.
    pub fn artist_or_unknown(&self) -> &str {
        let name = self.artist_display_name.trim();
        if name.is_empty() { UNKNOWN_ARTIST } else { name }
    }

    /// One-line caption in the form `Artist, Date`.
    pub fn caption(&self) -> String {
        if self.object_date.trim().is_empty() {
            self.artist_or_unknown().to_string()
        } else {
            format!("{}, {}", self.artist_or_unknown(), self.object_date.trim())
        }
    }
}

/// Payload of the catalog index endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectIndex {
    #[serde(default)]
    pub total: u64,
    /// The catalog sends `null` here when it has no objects.
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

impl ObjectIndex {
    /// Consume the index, treating a missing list as empty.
    pub fn into_ids(self) -> Vec<u64> {
        self.object_ids.unwrap_or_default()
    }
}

/// An accepted artwork together with the number of records sampled to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedArtwork {
    pub artwork: Artwork,
    pub attempts: usize,
}
