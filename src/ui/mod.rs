pub mod notes;
pub mod status;

pub use notes::{NotesMode, NotesPane};
pub use status::{StatusMode, StatusPane};

/// Below this width the status bar switches to compact mode.
pub const COMPACT_WIDTH: u16 = 60;
/// Below this height there is no room for the status bar.
pub const MIN_HEIGHT: u16 = 2;
