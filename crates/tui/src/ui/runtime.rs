//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Run a single `tokio::select!` loop over terminal input, a ticker,
//!   in-flight background work and Ctrl+C.
//! - Route input to [`MainView`] and execute the `Effect`s it returns.
//!
//! Input comes from a dedicated OS thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel. The
//! ticker runs fast only while an artwork request is loading so the
//! throbber animates; otherwise it idles.

use std::io::Stdout;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use artpal_types::{Effect, Msg};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::TuiOptions;
use crate::app::App;
use crate::cmd::{self, PendingExec};
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

const FAST_TICK: Duration = Duration::from_millis(100);
const IDLE_TICK: Duration = Duration::from_millis(5000);

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Turn effects into commands and start them.
///
/// Returns `true` when a quit was requested.
fn process_effects(app: &mut App, mut effects: Vec<Effect>, pending_execs: &mut FuturesUnordered<PendingExec>) -> bool {
    let quit = effects.iter().any(|effect| matches!(effect, Effect::Quit));
    effects.retain(|effect| !matches!(effect, Effect::Quit));

    let commands = cmd::from_effects(app, effects);
    pending_execs.extend(cmd::run_cmds(app, commands));
    quit
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop until the user quits and restores the terminal.
pub async fn run_app(options: TuiOptions) -> Result<()> {
    let mut app = App::new(options);
    let mut main_view = MainView::new();
    main_view.init()?;

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    info!("terminal ready");

    let mut pending_execs: FuturesUnordered<PendingExec> = FuturesUnordered::new();
    let initial = app.initialize();
    let mut quit = process_effects(&mut app, initial, &mut pending_execs);

    let mut current_interval = FAST_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    while !quit {
        let target_interval = if app.gallery.status().is_loading() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects = Vec::new();
        let mut needs_render = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                effects.extend(handle_input_event(&mut app, &mut main_view, event));
                true
            }

            _ = ticker.tick() => {
                let animating = app.gallery.status().is_loading();
                effects.extend(main_view.handle_message(&mut app, &Msg::Tick));
                animating
            }

            Some(outcome) = pending_execs.next(), if !pending_execs.is_empty() => {
                effects.extend(main_view.handle_message(&mut app, &Msg::ExecCompleted(Box::new(outcome))));
                true
            }

            _ = signal::ctrl_c() => { break; }
        };

        if !effects.is_empty() {
            quit = process_effects(&mut app, effects, &mut pending_execs);
            needs_render = true;
        }

        if needs_render && !quit {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    info!(pending = pending_execs.len(), "shutting down");
    cleanup_terminal(&mut terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use artpal_api::{ArtworkCatalog, CatalogError};
    use artpal_types::{Artwork, ExecOutcome, RequestToken};
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
            max_attempts: 1,
            seed: Some(7),
        };
        App::with_theme(options, Box::new(NordTheme::new()))
    }

    #[tokio::test]
    async fn quit_is_reported_and_fetches_still_start() {
        let mut app = app();
        let mut pending_execs = FuturesUnordered::new();
        let quit = process_effects(
            &mut app,
            vec![Effect::FetchArtwork(RequestToken(1)), Effect::Quit],
            &mut pending_execs,
        );
        assert!(quit);
        assert_eq!(pending_execs.len(), 1);

        let outcome = pending_execs.next().await;
        assert!(matches!(
            outcome,
            Some(ExecOutcome::ArtworkFetched { token: RequestToken(1), result: Err(_) })
        ));
    }

    #[tokio::test]
    async fn effects_without_quit_keep_running() {
        let mut app = app();
        let mut pending_execs = FuturesUnordered::new();
        let initial = app.initialize();
        assert!(!process_effects(&mut app, initial, &mut pending_execs));
        assert_eq!(pending_execs.len(), 1);
        assert!(pending_execs.next().await.is_some());
        assert!(pending_execs.is_empty());
    }
}
