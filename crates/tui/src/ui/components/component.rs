//! Component system for the artpal TUI.
//!
//! Components are self-contained UI elements. Each one renders itself into
//! the `Rect` it is given and turns the input it receives into `Msg`s for
//! [`App::update`](crate::app::App::update), reporting side effects back as
//! `Effect`s rather than performing them.

use anyhow::Result;
use artpal_types::{Effect, Msg};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::app::App;

/// A UI component with its own local state and behavior.
///
/// # Lifecycle
///
/// 1. `init()` runs once when the component is created
/// 2. `handle_message()`, `handle_key_events()` and `handle_mouse_events()`
///    translate application messages and input into effects
/// 3. `render()` draws the component; hit-test areas are recorded here so
///    the next mouse event can be routed against what is on screen
pub trait Component {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle an application-level message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key press. Returns an empty vector when the key is not used.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event using the areas captured during the last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
