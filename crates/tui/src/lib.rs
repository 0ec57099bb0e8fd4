//! # artpal TUI Library
//!
//! Terminal front end for artpal: a random artwork from the Metropolitan
//! Museum of Art collection shown next to a randomly generated six-swatch
//! colour palette, with histories of what was shown before.
//!
//! ## Architecture
//!
//! - [`gallery::GalleryState`] holds the session state and its invariants.
//! - `App::update` maps messages to state changes and side effects.
//! - The command layer turns effects into background fetches and clipboard
//!   writes.
//! - Components render panels and translate keyboard and mouse input.

mod app;
mod cmd;
pub mod gallery;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use artpal_api::ArtworkCatalog;

/// Runtime configuration for the TUI.
pub struct TuiOptions {
    /// Catalog used to sample artworks
    pub catalog: Arc<dyn ArtworkCatalog>,
    /// Upper bound on records sampled per artwork request
    pub max_attempts: usize,
    /// Seed for palettes and identifier sampling; random when `None`
    pub seed: Option<u64>,
}

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into (or restored from) raw mode
/// and the alternate screen, or when drawing a frame fails.
pub async fn run(options: TuiOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
