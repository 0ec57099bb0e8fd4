use thiserror::Error;

/// Failure talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, timeout or body decoding failure.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The catalog has no record for the identifier.
    #[error("catalog object {id} not found")]
    NotFound { id: u64 },
    /// Any other non-success HTTP status.
    #[error("catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    /// The configured base URL is unusable.
    #[error("invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Failure of a random artwork fetch as a whole.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("the catalog index returned no object identifiers")]
    EmptyCatalog,
    #[error("no artwork with a preview image found after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
