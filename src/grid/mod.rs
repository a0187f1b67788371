//! # Grid Module
//!
//! Tile declarations and the textual grid dump.

pub mod display;
pub mod tile;

pub use display::*;
pub use tile::*;
