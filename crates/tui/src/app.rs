//! Application state and message handling for the artpal TUI.
//!
//! `App` owns the gallery session state, the status log, the swatch cursor
//! and the random source used for palettes. `App::update` is the single
//! place where messages turn into state changes and side effects.

use std::sync::Arc;

use artpal_api::ArtworkCatalog;
use artpal_types::{Effect, ExecOutcome, Msg, PALETTE_SIZE};
use artpal_util::{generate_palette, generate_single_color, hsl_hex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::TuiOptions;
use crate::gallery::{Completion, GalleryState};
use crate::ui::components::logs::{LogLevel, LogsState};
use crate::ui::theme::{self, Theme};

/// Frames of the loading spinner shown while an artwork request is in flight.
pub const THROBBER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the catalog client and configuration
/// values so components do not need them threaded through separately.
pub struct SharedCtx {
    /// Catalog used for background artwork requests
    pub catalog: Arc<dyn ArtworkCatalog>,
    /// Upper bound on records sampled per artwork request
    pub max_attempts: usize,
    /// Active color theme
    pub theme: Box<dyn Theme>,
}

pub struct App {
    /// Shared, cross-cutting context (catalog, config, theme)
    pub ctx: SharedCtx,
    /// Current artwork/palette and their histories
    pub gallery: GalleryState,
    /// User-facing status lines
    pub logs: LogsState,
    /// Index of the swatch targeted by keyboard actions
    pub selected_swatch: usize,
    /// Animation frame for the loading throbber
    pub throbber_idx: usize,
    rng: StdRng,
}

impl App {
    pub fn new(options: TuiOptions) -> Self {
        Self::with_theme(options, theme::load())
    }

    pub fn with_theme(options: TuiOptions, theme: Box<dyn Theme>) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            ctx: SharedCtx {
                catalog: options.catalog,
                max_attempts: options.max_attempts,
                theme,
            },
            gallery: GalleryState::default(),
            logs: LogsState::default(),
            selected_swatch: 0,
            throbber_idx: 0,
            rng,
        }
    }

    /// Effects for the first frame: a fresh artwork and palette.
    pub fn initialize(&mut self) -> Vec<Effect> {
        self.update(&Msg::ShuffleBoth)
    }

    /// Seed for a background task's own random source.
    ///
    /// Drawing seeds from the app's generator keeps whole sessions
    /// reproducible when a seed is configured.
    pub fn next_task_seed(&mut self) -> u64 {
        self.rng.random()
    }

    pub fn append_log_message(&mut self, level: LogLevel, message: impl Into<String>) {
        self.logs.push(level, message);
    }

    pub fn throbber_frame(&self) -> &'static str {
        THROBBER_FRAMES[self.throbber_idx % THROBBER_FRAMES.len()]
    }

    /// Apply a message and return the side effects it requests.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::ShuffleArtwork => self.shuffle_artwork(),
            Msg::ShufflePalette => {
                self.shuffle_palette();
                Vec::new()
            }
            Msg::ShuffleBoth => {
                let effects = self.shuffle_artwork();
                self.shuffle_palette();
                effects
            }
            Msg::ShuffleSwatch(index) => {
                self.shuffle_swatch(*index);
                Vec::new()
            }
            Msg::ShuffleSelectedSwatch => {
                self.shuffle_swatch(self.selected_swatch);
                Vec::new()
            }
            Msg::SelectSwatch(delta) => {
                let size = PALETTE_SIZE as isize;
                self.selected_swatch = (self.selected_swatch as isize + delta).rem_euclid(size) as usize;
                Vec::new()
            }
            Msg::CopySelectedSwatch => match self.gallery.palette().and_then(|p| p.get(self.selected_swatch)) {
                Some(color) => vec![Effect::CopyToClipboardRequested(hsl_hex(color))],
                None => Vec::new(),
            },
            Msg::ResetHistory => {
                self.gallery.reset_history();
                info!("history reset");
                self.append_log_message(LogLevel::Info, "History cleared");
                Vec::new()
            }
            Msg::Tick => {
                if self.gallery.status().is_loading() {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAMES.len();
                }
                Vec::new()
            }
            Msg::Resize(..) => Vec::new(),
            Msg::ExecCompleted(outcome) => {
                self.handle_exec_outcome(outcome);
                Vec::new()
            }
            Msg::Quit => vec![Effect::Quit],
        }
    }

    fn shuffle_artwork(&mut self) -> Vec<Effect> {
        let token = self.gallery.begin_artwork_shuffle();
        self.throbber_idx = 0;
        debug!(%token, "artwork requested");
        vec![Effect::FetchArtwork(token)]
    }

    fn shuffle_palette(&mut self) {
        let palette = generate_palette(&mut self.rng);
        debug!(%palette, "palette generated");
        self.gallery.replace_palette(palette);
    }

    fn shuffle_swatch(&mut self, index: usize) {
        let color = generate_single_color(&mut self.rng);
        match self.gallery.replace_swatch(index, color) {
            Ok(_) => self.selected_swatch = index,
            Err(error) => {
                warn!(%error, index, "swatch shuffle ignored");
                self.append_log_message(LogLevel::Warn, error.to_string());
            }
        }
    }

    fn handle_exec_outcome(&mut self, outcome: &ExecOutcome) {
        let ExecOutcome::ArtworkFetched { token, result } = outcome;
        match self.gallery.complete_artwork(*token, result.clone()) {
            Completion::Applied => {
                if let (Some(artwork), Ok(fetched)) = (self.gallery.current_artwork(), result) {
                    let message = format!(
                        "Fetched \"{}\" (object {}) after {} attempt(s)",
                        artwork.title, artwork.object_id, fetched.attempts
                    );
                    self.append_log_message(LogLevel::Info, message);
                }
            }
            Completion::Failed => {
                let message = result.as_ref().err().cloned().unwrap_or_default();
                warn!(%token, %message, "artwork request failed");
                self.append_log_message(LogLevel::Error, format!("Artwork request failed: {message}"));
            }
            Completion::Stale => debug!(%token, "discarding stale artwork result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use artpal_api::CatalogError;
    use artpal_types::{Artwork, ArtworkStatus, FetchedArtwork, RequestToken};
    use async_trait::async_trait;

    use super::*;
    use crate::ui::theme::NordTheme;

    struct EmptyCatalog;

    #[async_trait]
    impl ArtworkCatalog for EmptyCatalog {
        async fn object_ids(&self) -> Result<Vec<u64>, CatalogError> {
            Ok(Vec::new())
        }

        async fn object(&self, id: u64) -> Result<Artwork, CatalogError> {
            Err(CatalogError::NotFound { id })
        }
    }

    fn app() -> App {
        let options = TuiOptions {
            catalog: Arc::new(EmptyCatalog),
            max_attempts: 10,
            seed: Some(1234),
        };
        App::with_theme(options, Box::new(NordTheme::new()))
    }

    fn completed(token: RequestToken, id: u64) -> Msg {
        Msg::ExecCompleted(Box::new(ExecOutcome::ArtworkFetched {
            token,
            result: Ok(FetchedArtwork {
                artwork: Artwork {
                    object_id: id,
                    title: format!("Object {id}"),
                    primary_image_small: "https://images.example.org/x.jpg".into(),
                    ..Artwork::default()
                },
                attempts: 2,
            }),
        }))
    }

    fn requested_token(effects: &[Effect]) -> RequestToken {
        match effects {
            [Effect::FetchArtwork(token)] => *token,
            other => panic!("expected a single fetch effect, got {other:?}"),
        }
    }

    #[test]
    fn initialize_shuffles_both() {
        let mut app = app();
        let effects = app.initialize();
        requested_token(&effects);
        assert!(app.gallery.status().is_loading());
        assert!(app.gallery.palette().is_some());
        assert!(app.gallery.palette_history().is_empty());
        assert!(app.gallery.artwork_history().is_empty());
    }

    #[test]
    fn shuffle_artwork_archives_the_displayed_artwork() {
        let mut app = app();
        let first = requested_token(&app.initialize());
        app.update(&completed(first, 7));
        assert_eq!(app.gallery.status(), &ArtworkStatus::Ready);

        let second = requested_token(&app.update(&Msg::ShuffleArtwork));
        assert!(app.gallery.current_artwork().is_none());
        assert_eq!(app.gallery.artwork_history().front().map(|a| a.object_id), Some(7));

        app.update(&completed(second, 8));
        assert_eq!(app.gallery.current_artwork().map(|a| a.object_id), Some(8));
        assert!(app.logs.last().is_some_and(|entry| entry.message.contains("after 2 attempt(s)")));
    }

    #[test]
    fn shuffle_palette_archives_previous_palette() {
        let mut app = app();
        app.update(&Msg::ShufflePalette);
        let first = *app.gallery.palette().unwrap();
        assert!(app.update(&Msg::ShufflePalette).is_empty());
        assert_eq!(app.gallery.palette_history().front(), Some(&first));
    }

    #[test]
    fn shuffle_swatch_leaves_other_swatches_alone() {
        let mut app = app();
        app.update(&Msg::ShufflePalette);
        let before = *app.gallery.palette().unwrap();

        app.update(&Msg::ShuffleSwatch(4));
        let after = *app.gallery.palette().unwrap();
        for index in (0..PALETTE_SIZE).filter(|index| *index != 4) {
            assert_eq!(before.get(index), after.get(index));
        }
        assert_eq!(app.selected_swatch, 4);
        assert!(app.gallery.palette_history().is_empty());
    }

    #[test]
    fn swatch_shuffle_without_palette_is_logged() {
        let mut app = app();
        app.update(&Msg::ShuffleSwatch(0));
        assert!(app.gallery.palette().is_none());
        assert_eq!(app.logs.last().map(|e| e.level), Some(LogLevel::Warn));
    }

    #[test]
    fn selection_wraps_around() {
        let mut app = app();
        app.update(&Msg::SelectSwatch(-1));
        assert_eq!(app.selected_swatch, PALETTE_SIZE - 1);
        app.update(&Msg::SelectSwatch(1));
        assert_eq!(app.selected_swatch, 0);
    }

    #[test]
    fn copy_requests_the_selected_hex() {
        let mut app = app();
        assert!(app.update(&Msg::CopySelectedSwatch).is_empty());

        app.update(&Msg::ShufflePalette);
        app.update(&Msg::SelectSwatch(2));
        let expected = hsl_hex(app.gallery.palette().unwrap().get(2).unwrap());
        assert_eq!(
            app.update(&Msg::CopySelectedSwatch),
            vec![Effect::CopyToClipboardRequested(expected)]
        );
    }

    #[test]
    fn reset_history_empties_both_lists() {
        let mut app = app();
        let mut token = requested_token(&app.initialize());
        for id in 1..=3 {
            app.update(&completed(token, id));
            token = requested_token(&app.update(&Msg::ShuffleBoth));
        }
        assert_eq!(app.gallery.artwork_history().len(), 3);
        assert_eq!(app.gallery.palette_history().len(), 3);

        app.update(&Msg::ResetHistory);
        assert!(app.gallery.artwork_history().is_empty());
        assert!(app.gallery.palette_history().is_empty());
        assert!(app.gallery.palette().is_some());
    }

    #[test]
    fn failed_fetch_is_reported() {
        let mut app = app();
        let token = requested_token(&app.update(&Msg::ShuffleArtwork));
        app.update(&Msg::ExecCompleted(Box::new(ExecOutcome::ArtworkFetched {
            token,
            result: Err("the catalog index returned no object identifiers".into()),
        })));
        assert!(matches!(app.gallery.status(), ArtworkStatus::Failed(_)));
        assert_eq!(app.logs.last().map(|e| e.level), Some(LogLevel::Error));
    }

    #[test]
    fn tick_only_animates_while_loading() {
        let mut app = app();
        app.update(&Msg::Tick);
        assert_eq!(app.throbber_idx, 0);

        app.update(&Msg::ShuffleArtwork);
        app.update(&Msg::Tick);
        assert_eq!(app.throbber_idx, 1);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut first = app();
        let mut second = app();
        first.update(&Msg::ShufflePalette);
        second.update(&Msg::ShufflePalette);
        assert_eq!(first.gallery.palette(), second.gallery.palette());
        assert_eq!(first.next_task_seed(), second.next_task_seed());
    }
}
