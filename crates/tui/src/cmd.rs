//! # Command Execution Layer
//!
//! Translates application effects (`Effect`) into imperative commands
//! (`Cmd`) and executes them. This is the boundary where the pure state
//! updates in [`crate::app::App`] meet side effects:
//! - Sampling the museum catalog on a background task
//! - Writing to the system clipboard
//!
//! Background work is returned as [`PendingExec`] futures so the runtime can
//! await them alongside input and ticks. Each one always resolves to an
//! outcome, even when its task panics.

use artpal_api::fetch_random_artwork;
use artpal_types::{Effect, ExecOutcome, RequestToken};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::task::spawn;
use tracing::{debug, warn};

use crate::app::App;
use crate::ui::components::logs::LogLevel;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Sample the catalog for an artwork with a preview image.
    FetchArtwork { token: RequestToken, seed: u64 },
    /// Write text into the system clipboard.
    ClipboardSet(String),
}

/// Background work still in flight.
pub type PendingExec = BoxFuture<'static, ExecOutcome>;

/// Convert application [`Effect`]s into [`Cmd`]s.
///
/// `Effect::Quit` is handled by the runtime and never reaches this point.
pub fn from_effects(app: &mut App, effects: Vec<Effect>) -> Vec<Cmd> {
    let mut commands = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            Effect::FetchArtwork(token) => commands.push(Cmd::FetchArtwork {
                token,
                seed: app.next_task_seed(),
            }),
            Effect::CopyToClipboardRequested(text) => commands.push(Cmd::ClipboardSet(text)),
            Effect::Quit => {}
        }
    }
    commands
}

/// Execute commands. Clipboard writes happen in place; fetches are spawned
/// and returned for the runtime to await.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) -> Vec<PendingExec> {
    let mut pending = Vec::new();
    for command in commands {
        match command {
            Cmd::FetchArtwork { token, seed } => pending.push(spawn_fetch_artwork(app, token, seed)),
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
        }
    }
    pending
}

fn spawn_fetch_artwork(app: &App, token: RequestToken, seed: u64) -> PendingExec {
    let catalog = app.ctx.catalog.clone();
    let max_attempts = app.ctx.max_attempts;
    debug!(%token, seed, max_attempts, "spawning artwork request");

    spawn(async move {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = fetch_random_artwork(catalog.as_ref(), &mut rng, max_attempts)
            .await
            .map_err(|error| {
                warn!(%token, %error, "artwork request failed");
                error.to_string()
            });
        ExecOutcome::ArtworkFetched { token, result }
    })
    .map(move |joined| {
        joined.unwrap_or_else(|error| {
            warn!(%token, %error, "artwork task did not complete");
            ExecOutcome::ArtworkFetched {
                token,
                result: Err(format!("artwork task did not complete: {error}")),
            }
        })
    })
    .boxed()
}

fn execute_clipboard_set(app: &mut App, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => app.append_log_message(LogLevel::Info, format!("Copied {text} to the clipboard")),
        Err(error) => {
            warn!(%error, "clipboard unavailable");
            app.append_log_message(LogLevel::Warn, format!("Clipboard error: {error} ({text})"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use artpal_api::{ArtworkCatalog, CatalogError};
    use artpal_types::{Artwork, ArtworkStatus, Msg};
    use async_trait::async_trait;

    use super::*;
    use crate::TuiOptions;
    use crate::ui::theme::NordTheme;

    struct StaticCatalog {
        objects: HashMap<u64, Artwork>,
    }

    #[async_trait]
    impl ArtworkCatalog for StaticCatalog {
        async fn object_ids(&self) -> Result<Vec<u64>, CatalogError> {
            let mut ids = self.objects.keys().copied().collect::<Vec<_>>();
            ids.sort_unstable();
            Ok(ids)
        }

        async fn object(&self, id: u64) -> Result<Artwork, CatalogError> {
            self.objects.get(&id).cloned().ok_or(CatalogError::NotFound { id })
        }
    }

    fn artwork(id: u64, image: &str) -> Artwork {
        Artwork {
            object_id: id,
            title: format!("Object {id}"),
            primary_image_small: image.into(),
            ..Artwork::default()
        }
    }

    fn app_with(objects: Vec<Artwork>) -> App {
        let catalog = StaticCatalog {
            objects: objects.into_iter().map(|a| (a.object_id, a)).collect(),
        };
        let options = TuiOptions {
            catalog: Arc::new(catalog),
            max_attempts: 200,
            seed: Some(99),
        };
        App::with_theme(options, Box::new(NordTheme::new()))
    }

    async fn drain(app: &mut App, effects: Vec<Effect>) {
        let commands = from_effects(app, effects);
        for pending in run_cmds(app, commands) {
            let outcome = pending.await;
            app.update(&Msg::ExecCompleted(Box::new(outcome)));
        }
    }

    #[test]
    fn effects_map_to_commands() {
        let mut app = app_with(Vec::new());
        let commands = from_effects(
            &mut app,
            vec![
                Effect::FetchArtwork(RequestToken(3)),
                Effect::CopyToClipboardRequested("#3399cc".into()),
                Effect::Quit,
            ],
        );
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Cmd::FetchArtwork { token: RequestToken(3), .. }));
        assert_eq!(commands[1], Cmd::ClipboardSet("#3399cc".into()));
    }

    #[tokio::test]
    async fn only_artworks_with_images_are_shown() {
        let mut app = app_with(vec![artwork(1, ""), artwork(2, "https://img/2.jpg"), artwork(3, "")]);
        let effects = app.initialize();
        drain(&mut app, effects).await;

        assert_eq!(app.gallery.status(), &ArtworkStatus::Ready);
        assert_eq!(app.gallery.current_artwork().map(|a| a.object_id), Some(2));
    }

    #[tokio::test]
    async fn empty_catalog_fails_visibly() {
        let mut app = app_with(Vec::new());
        let effects = app.update(&Msg::ShuffleArtwork);
        drain(&mut app, effects).await;

        assert!(matches!(app.gallery.status(), ArtworkStatus::Failed(_)));
        assert!(app.gallery.current_artwork().is_none());
    }

    #[tokio::test]
    async fn last_request_wins_when_completions_race() {
        let mut app = app_with(vec![artwork(5, "https://img/5.jpg")]);
        let first = app.update(&Msg::ShuffleArtwork);
        let second = app.update(&Msg::ShuffleArtwork);

        let first_pending = {
            let commands = from_effects(&mut app, first);
            run_cmds(&mut app, commands)
        };
        drain(&mut app, second).await;
        assert_eq!(app.gallery.status(), &ArtworkStatus::Ready);
        let latest = app.gallery.latest_token();

        for pending in first_pending {
            let outcome = pending.await;
            app.update(&Msg::ExecCompleted(Box::new(outcome)));
        }
        assert_eq!(app.gallery.latest_token(), latest);
        assert_eq!(app.gallery.current_artwork().map(|a| a.object_id), Some(5));
        assert!(app.gallery.artwork_history().is_empty());
    }

    struct PanickingCatalog;

    #[async_trait]
    impl ArtworkCatalog for PanickingCatalog {
        async fn object_ids(&self) -> Result<Vec<u64>, CatalogError> {
            panic!("index unavailable");
        }

        async fn object(&self, id: u64) -> Result<Artwork, CatalogError> {
            Err(CatalogError::NotFound { id })
        }
    }

    #[tokio::test]
    async fn only_fetches_are_left_pending() {
        let mut app = app_with(vec![artwork(5, "https://img/5.jpg")]);
        let pending = run_cmds(
            &mut app,
            vec![
                Cmd::FetchArtwork {
                    token: RequestToken(1),
                    seed: 4,
                },
                Cmd::ClipboardSet("#000000".into()),
            ],
        );
        assert_eq!(pending.len(), 1);
        // clipboard result is reported in place, whether or not a clipboard exists
        assert!(app.logs.entries().back().is_some_and(|entry| entry.message.contains("#000000")));
    }

    #[tokio::test]
    async fn panicking_fetch_task_fails_the_request() {
        let options = TuiOptions {
            catalog: Arc::new(PanickingCatalog),
            max_attempts: 3,
            seed: Some(1),
        };
        let mut app = App::with_theme(options, Box::new(NordTheme::new()));
        let effects = app.update(&Msg::ShuffleArtwork);
        drain(&mut app, effects).await;

        match app.gallery.status() {
            ArtworkStatus::Failed(message) => assert!(message.contains("did not complete")),
            other => panic!("expected a failed status, got {other:?}"),
        }
        assert!(!app.gallery.status().is_loading());
    }
}
