//! UI components: artwork, palette, controls, history, log and hints.

pub mod artwork;
pub mod component;
pub mod controls;
pub mod hint_bar;
pub mod history;
pub mod logs;
pub mod palette;

pub use artwork::ArtworkComponent;
pub use component::*;
pub use controls::ControlsComponent;
pub use hint_bar::HintBarComponent;
pub use history::HistoryComponent;
pub use logs::LogsComponent;
pub use palette::PaletteComponent;
