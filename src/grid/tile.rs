//! # Tile Types
//!
//! Cell declarations for grids built by callers: a tile type, its
//! coordinates, and an optional direction tag.

use crate::{TileGridError, TileGridResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a grid cell, identified by a single tag character.
///
/// # Examples
///
/// ```
/// use tilegrid::TileType;
///
/// assert_eq!(TileType::Start.to_char(), 'S');
/// assert_eq!(TileType::try_from('.').unwrap(), TileType::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum TileType {
    Start,
    Finish,
    Gray,
    Black,
    Obstacle,
    #[default]
    Empty,
}

impl TileType {
    /// Returns the tag character for this tile type.
    pub fn to_char(self) -> char {
        match self {
            TileType::Start => 'S',
            TileType::Finish => 'F',
            TileType::Gray => 'G',
            TileType::Black => 'B',
            TileType::Obstacle => 'O',
            TileType::Empty => '.',
        }
    }

    /// Returns all tile types.
    pub fn all() -> Vec<TileType> {
        vec![
            TileType::Start,
            TileType::Finish,
            TileType::Gray,
            TileType::Black,
            TileType::Obstacle,
            TileType::Empty,
        ]
    }
}

impl TryFrom<char> for TileType {
    type Error = TileGridError;

    fn try_from(c: char) -> TileGridResult<Self> {
        match c {
            'S' => Ok(TileType::Start),
            'F' => Ok(TileType::Finish),
            'G' => Ok(TileType::Gray),
            'B' => Ok(TileType::Black),
            'O' => Ok(TileType::Obstacle),
            '.' => Ok(TileType::Empty),
            other => Err(TileGridError::InvalidTileChar(other)),
        }
    }
}

impl From<TileType> for char {
    fn from(tile_type: TileType) -> Self {
        tile_type.to_char()
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Optional direction tag carried by a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the tag character for this direction.
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Returns all four directions.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

impl TryFrom<char> for Direction {
    type Error = TileGridError;

    fn try_from(c: char) -> TileGridResult<Self> {
        match c {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(TileGridError::InvalidDirectionChar(other)),
        }
    }
}

impl From<Direction> for char {
    fn from(direction: Direction) -> Self {
        direction.to_char()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single grid cell.
///
/// # Examples
///
/// ```
/// use tilegrid::{Direction, Position, Tile, TileType};
///
/// let tile = Tile::new(TileType::Gray, 2, 3).with_direction(Direction::Left);
/// assert_eq!(tile.position(), Position::new(2, 3));
/// assert_eq!(tile.direction, Some(Direction::Left));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "type")]
    pub tile_type: TileType,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Tile {
    /// Creates a tile without a direction tag.
    pub fn new(tile_type: TileType, x: i32, y: i32) -> Self {
        Self {
            tile_type,
            x,
            y,
            direction: None,
        }
    }

    /// Returns this tile with the direction tag set.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Returns the tile's coordinates.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Returns the tag character of the tile's type.
    pub fn to_char(&self) -> char {
        self.tile_type.to_char()
    }
}
