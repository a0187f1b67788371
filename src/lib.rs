//! # Tilegrid
//!
//! Tile declarations for grid-based visualizations, plus two small helpers.
//!
//! ## Overview
//!
//! - **Tiles**: `TileType`, `Direction`, `Position` and `Tile` describe the
//!   cells of a grid built by the caller
//! - **Grid dump**: writes a grid to a diagnostic sink, one line per row
//! - **Cancellable delay**: an async sleep that fails with `Cancelled` as soon
//!   as a caller-owned `CancellationSignal` fires

pub mod grid;
pub mod utils;

pub use grid::*;
pub use utils::*;

pub use grid::{Direction, Position, Tile, TileType};
pub use utils::{sleep, CancellationSignal, DelayError, DelayResult, DelayState, Subscription};

/// Core error type for the tilegrid crate.
#[derive(thiserror::Error, Debug)]
pub enum TileGridError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Character does not name a tile type
    #[error("Invalid tile character: {0:?}")]
    InvalidTileChar(char),

    /// Character does not name a direction
    #[error("Invalid direction character: {0:?}")]
    InvalidDirectionChar(char),

    /// A delay did not complete
    #[error(transparent)]
    Delay(#[from] DelayError),
}

/// Result type used throughout the tilegrid codebase.
pub type TileGridResult<T> = Result<T, TileGridError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values.
pub mod config {
    /// Default delay used by the demo binary, in milliseconds
    pub const DEFAULT_DELAY_MS: u64 = 100;

    /// Grid dumped by the demo binary when no grid file is given
    pub const SAMPLE_GRID: &str = "\
S..O....
.O.O.OO.
.O...O..
.OOOOO.O
.......F
";
}
