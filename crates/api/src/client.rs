//! HTTP client for the museum collection API.

use std::env;
use std::time::Duration;

use artpal_types::{Artwork, ObjectIndex};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::debug;
use url::Url;

use crate::{ArtworkCatalog, CatalogError};

/// Public collection API of the Metropolitan Museum of Art.
pub const DEFAULT_BASE_URL: &str = "https://collectionapi.metmuseum.org";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default number of records sampled before a fetch gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

const OBJECTS_PATH: &str = "/public/collection/v1/objects";

/// Allowed hostnames or base domains for non-local base URLs. Subdomains of
/// these domains are also allowed.
const ALLOWED_CATALOG_DOMAINS: &[&str] = &["metmuseum.org"];
/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Settings for talking to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Upper bound on records sampled per random fetch
    pub max_attempts: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for catalog access.
pub struct MuseumClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl MuseumClient {
    /// Build a client for the configured base URL.
    ///
    /// Non-localhost hosts must use HTTPS and be within an allowed museum
    /// domain.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("artpal/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "catalog request");
        self.http.get(url).header(header::USER_AGENT, &self.user_agent).send().await
    }
}

#[async_trait]
impl ArtworkCatalog for MuseumClient {
    async fn object_ids(&self) -> Result<Vec<u64>, CatalogError> {
        let response = self.get(OBJECTS_PATH).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        let index = response.json::<ObjectIndex>().await?;
        debug!(total = index.total, "catalog index received");
        Ok(index.into_ids())
    }

    async fn object(&self, id: u64) -> Result<Artwork, CatalogError> {
        let response = self.get(&format!("{OBJECTS_PATH}/{id}")).await?;
        match response.status() {
            status if status.is_success() => Ok(response.json::<Artwork>().await?),
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound { id }),
            status => Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            }),
        }
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS, and host must be one of the allowed
///   museum domains or a subdomain thereof
fn validate_base_url(base: &str) -> Result<(), CatalogError> {
    let parsed_base_url =
        Url::parse(base).map_err(|error| CatalogError::InvalidBaseUrl(format!("'{base}': {error}")))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| CatalogError::InvalidBaseUrl(format!("'{base}' has no host")))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(CatalogError::InvalidBaseUrl(format!(
            "non-localhost hosts must use https; got '{}://'",
            parsed_base_url.scheme()
        )));
    }

    let is_allowed_domain = ALLOWED_CATALOG_DOMAINS.iter().any(|&allowed_domain| {
        host_name.eq_ignore_ascii_case(allowed_domain) || host_name.ends_with(&format!(".{allowed_domain}"))
    });
    if !is_allowed_domain {
        return Err(CatalogError::InvalidBaseUrl(format!(
            "host '{host_name}' is not allowed; must be one of {ALLOWED_CATALOG_DOMAINS:?} or a subdomain, or localhost"
        )));
    }

    Ok(())
}
