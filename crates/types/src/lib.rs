//! Shared type definitions for the artpal workspace.
//!
//! Holds the catalog record model, the colour model, and the message and
//! effect vocabulary exchanged between the TUI components and the runtime.

mod artwork;
mod color;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use artwork::{Artwork, FetchedArtwork, ObjectIndex, UNKNOWN_ARTIST};
pub use color::{Hsl, PALETTE_SIZE, Palette};

/// Generation number issued for each artwork request.
///
/// Completions carrying a token older than the latest one are stale and
/// are discarded by the gallery state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the current artwork slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtworkStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight; the slot is empty
    Loading,
    /// The slot holds an artwork
    Ready,
    /// The latest request failed with the given message
    Failed(String),
}

impl ArtworkStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Result of an asynchronous command execution.
#[derive(Debug, Clone)]
pub enum ExecOutcome {
    /// A background artwork fetch finished
    ArtworkFetched {
        token: RequestToken,
        result: Result<FetchedArtwork, String>,
    },
}

/// Messages that can be sent to update the application state.
///
/// This enum defines all the possible user actions and system events
/// that can trigger state changes in the application.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Archive the current artwork and request a new one
    ShuffleArtwork,
    /// Archive the current palette and generate a new one
    ShufflePalette,
    /// Shuffle artwork and palette independently
    ShuffleBoth,
    /// Regenerate a single swatch by index
    ShuffleSwatch(usize),
    /// Regenerate the currently selected swatch
    ShuffleSelectedSwatch,
    /// Move the swatch cursor by the given offset
    SelectSwatch(isize),
    /// Copy the selected swatch's hex code to the clipboard
    CopySelectedSwatch,
    /// Clear both history lists
    ResetHistory,
    /// Periodic UI tick (e.g., throbbers)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Background execution completed with outcome
    ExecCompleted(Box<ExecOutcome>),
    /// Leave the application
    Quit,
}

/// Side effects that can be triggered by state changes.
///
/// This enum defines actions that should be performed as a result
/// of state changes, such as starting network requests or writing
/// to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a catalog fetch tagged with the given token
    FetchArtwork(RequestToken),
    /// Request to copy text to the clipboard
    CopyToClipboardRequested(String),
    /// Stop the event loop
    Quit,
}
