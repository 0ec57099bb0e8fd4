//! Session state behind the gallery view.
//!
//! `GalleryState` owns the current artwork and palette together with their
//! histories. All mutation goes through the methods below so the history
//! invariants hold: histories are most-recent-first, only superseded values
//! are archived, and the displayed values never appear in history.

use std::collections::VecDeque;

use artpal_types::{Artwork, ArtworkStatus, FetchedArtwork, Hsl, PALETTE_SIZE, Palette, RequestToken};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("there is no palette to edit yet")]
    NoPalette,
    #[error("swatch {index} is out of range (palette has {} swatches)", PALETTE_SIZE)]
    SwatchOutOfRange { index: usize },
}

/// What happened to a fetch completion handed to [`GalleryState::complete_artwork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The artwork became current
    Applied,
    /// The latest request failed; status now holds the message
    Failed,
    /// A newer request superseded this one; nothing changed
    Stale,
}

#[derive(Debug, Default)]
pub struct GalleryState {
    current_artwork: Option<Artwork>,
    status: ArtworkStatus,
    palette: Option<Palette>,
    artwork_history: VecDeque<Artwork>,
    palette_history: VecDeque<Palette>,
    latest_token: RequestToken,
}

impl GalleryState {
    pub fn current_artwork(&self) -> Option<&Artwork> {
        self.current_artwork.as_ref()
    }

    pub fn status(&self) -> &ArtworkStatus {
        &self.status
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Superseded artworks, most recent first.
    pub fn artwork_history(&self) -> &VecDeque<Artwork> {
        &self.artwork_history
    }

    /// Superseded palettes, most recent first.
    pub fn palette_history(&self) -> &VecDeque<Palette> {
        &self.palette_history
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Archive the current artwork (if any), clear the slot and issue a
    /// token for the request that will refill it.
    pub fn begin_artwork_shuffle(&mut self) -> RequestToken {
        if let Some(previous) = self.current_artwork.take() {
            self.artwork_history.push_front(previous);
        }
        self.status = ArtworkStatus::Loading;
        self.latest_token = self.latest_token.next();
        self.latest_token
    }

    /// Apply the result of the request identified by `token`.
    ///
    /// Only the most recently issued token is honoured; older completions
    /// are reported as [`Completion::Stale`] and dropped.
    pub fn complete_artwork(&mut self, token: RequestToken, result: Result<FetchedArtwork, String>) -> Completion {
        if token != self.latest_token || !self.status.is_loading() {
            return Completion::Stale;
        }
        match result {
            Ok(fetched) => {
                self.current_artwork = Some(fetched.artwork);
                self.status = ArtworkStatus::Ready;
                Completion::Applied
            }
            Err(message) => {
                self.status = ArtworkStatus::Failed(message);
                Completion::Failed
            }
        }
    }

    /// Archive the current palette (if any) and make `palette` current.
    pub fn replace_palette(&mut self, palette: Palette) {
        if let Some(previous) = self.palette.replace(palette) {
            self.palette_history.push_front(previous);
        }
    }

    /// Swap one swatch of the current palette without touching history.
    pub fn replace_swatch(&mut self, index: usize, color: Hsl) -> Result<Hsl, GalleryError> {
        let palette = self.palette.as_mut().ok_or(GalleryError::NoPalette)?;
        palette
            .replace(index, color)
            .ok_or(GalleryError::SwatchOutOfRange { index })
    }

    /// Forget both histories; current values stay.
    pub fn reset_history(&mut self) {
        self.artwork_history.clear();
        self.palette_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use artpal_util::palette_from_base_hue;

    use super::*;

    fn fetched(id: u64) -> Result<FetchedArtwork, String> {
        Ok(FetchedArtwork {
            artwork: Artwork {
                object_id: id,
                title: format!("Object {id}"),
                primary_image_small: format!("https://images.example.org/{id}.jpg"),
                ..Artwork::default()
            },
            attempts: 1,
        })
    }

    #[test]
    fn first_shuffle_archives_nothing() {
        let mut gallery = GalleryState::default();
        assert_eq!(gallery.status(), &ArtworkStatus::Idle);

        let token = gallery.begin_artwork_shuffle();
        assert!(gallery.status().is_loading());
        assert!(gallery.current_artwork().is_none());
        assert!(gallery.artwork_history().is_empty());

        assert_eq!(gallery.complete_artwork(token, fetched(1)), Completion::Applied);
        assert_eq!(gallery.current_artwork().map(|a| a.object_id), Some(1));
        assert_eq!(gallery.status(), &ArtworkStatus::Ready);
    }

    #[test]
    fn shuffle_archives_previous_artwork_first() {
        let mut gallery = GalleryState::default();
        for id in 1..=3 {
            let token = gallery.begin_artwork_shuffle();
            gallery.complete_artwork(token, fetched(id));
        }

        let history = gallery
            .artwork_history()
            .iter()
            .map(|a| a.object_id)
            .collect::<Vec<_>>();
        assert_eq!(history, vec![2, 1]);
        let current = gallery.current_artwork().map(|a| a.object_id);
        assert_eq!(current, Some(3));
        assert!(gallery.artwork_history().iter().all(|a| Some(a.object_id) != current));
    }

    #[test]
    fn stale_completions_are_dropped() {
        let mut gallery = GalleryState::default();
        let first = gallery.begin_artwork_shuffle();
        let second = gallery.begin_artwork_shuffle();

        assert_eq!(gallery.complete_artwork(second, fetched(2)), Completion::Applied);
        assert_eq!(gallery.complete_artwork(first, fetched(1)), Completion::Stale);
        assert_eq!(gallery.current_artwork().map(|a| a.object_id), Some(2));
        assert!(gallery.artwork_history().is_empty());
    }

    #[test]
    fn a_token_completes_at_most_once() {
        let mut gallery = GalleryState::default();
        let token = gallery.begin_artwork_shuffle();
        assert_eq!(gallery.complete_artwork(token, fetched(1)), Completion::Applied);
        assert_eq!(gallery.complete_artwork(token, fetched(9)), Completion::Stale);
        assert_eq!(gallery.current_artwork().map(|a| a.object_id), Some(1));
    }

    #[test]
    fn failures_are_visible() {
        let mut gallery = GalleryState::default();
        let token = gallery.begin_artwork_shuffle();
        assert_eq!(gallery.complete_artwork(token, Err("timed out".into())), Completion::Failed);
        assert_eq!(gallery.status(), &ArtworkStatus::Failed("timed out".into()));
        assert!(gallery.current_artwork().is_none());
    }

    #[test]
    fn palettes_are_archived_most_recent_first() {
        let mut gallery = GalleryState::default();
        gallery.replace_palette(palette_from_base_hue(10));
        assert!(gallery.palette_history().is_empty());

        gallery.replace_palette(palette_from_base_hue(20));
        gallery.replace_palette(palette_from_base_hue(30));
        assert_eq!(gallery.palette(), Some(&palette_from_base_hue(30)));
        assert_eq!(
            gallery.palette_history().iter().copied().collect::<Vec<_>>(),
            vec![palette_from_base_hue(20), palette_from_base_hue(10)]
        );
    }

    #[test]
    fn swatch_replacement_changes_exactly_one_entry() {
        let mut gallery = GalleryState::default();
        assert_eq!(gallery.replace_swatch(0, Hsl::new(0, 0, 0)), Err(GalleryError::NoPalette));

        gallery.replace_palette(palette_from_base_hue(100));
        let before = *gallery.palette().unwrap();
        let previous = gallery.replace_swatch(3, Hsl::new(5, 80, 85)).unwrap();
        assert_eq!(previous, before.swatches()[3]);

        let after = gallery.palette().unwrap();
        let differing = before
            .iter()
            .zip(after.iter())
            .filter(|(old, new)| old != new)
            .count();
        assert_eq!(differing, 1);
        assert!(gallery.palette_history().is_empty());

        assert_eq!(
            gallery.replace_swatch(PALETTE_SIZE, Hsl::new(1, 1, 1)),
            Err(GalleryError::SwatchOutOfRange { index: PALETTE_SIZE })
        );
    }

    #[test]
    fn reset_clears_both_histories_only() {
        let mut gallery = GalleryState::default();
        for id in 1..=4 {
            let token = gallery.begin_artwork_shuffle();
            gallery.complete_artwork(token, fetched(id));
            gallery.replace_palette(palette_from_base_hue(id as u16 * 40));
        }
        assert_eq!(gallery.artwork_history().len(), 3);
        assert_eq!(gallery.palette_history().len(), 3);

        gallery.reset_history();
        assert!(gallery.artwork_history().is_empty());
        assert!(gallery.palette_history().is_empty());
        assert_eq!(gallery.current_artwork().map(|a| a.object_id), Some(4));
        assert_eq!(gallery.palette(), Some(&palette_from_base_hue(160)));
    }
}
