//! Wall geometry: directional instructions and the cursor walk.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in drawing units. The y axis grows downward, matching canvas
/// screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `(0, 0)`, where every wall walk starts.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
}

/// Axis-aligned wall direction. `Up` moves toward smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Step `distance` units from `from` along this direction.
    #[must_use]
    pub fn advance(self, from: Point, distance: f64) -> Point {
        match self {
            Self::Up => Point::new(from.x, from.y - distance),
            Self::Down => Point::new(from.x, from.y + distance),
            Self::Left => Point::new(from.x - distance, from.y),
            Self::Right => Point::new(from.x + distance, from.y),
        }
    }
}

/// One step of a floor plan: walk `distance` units in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallInstruction {
    pub direction: Direction,
    pub distance: f64,
}

impl WallInstruction {
    #[must_use]
    pub const fn new(direction: Direction, distance: f64) -> Self {
        Self { direction, distance }
    }
}

/// One wall edge. Derived from the instruction walk, never built by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

/// Instruction walk failures. Deterministic and structural; callers must
/// not retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A NaN or infinite distance would silently poison every coordinate
    /// downstream of it.
    #[error("instruction {index} has a non-finite distance")]
    NonFiniteDistance { index: usize },
}

/// Walk `instructions` from the origin, emitting one wall segment each.
///
/// The segments form a chain: each one starts where the previous one
/// ended. A distance of zero is legal and yields a zero-length segment.
///
/// # Errors
///
/// [`GeometryError::NonFiniteDistance`] if any instruction's distance is
/// NaN or infinite.
pub fn build_walls(instructions: &[WallInstruction]) -> Result<Vec<Segment>, GeometryError> {
    let mut walls = Vec::with_capacity(instructions.len());
    let mut cursor = Point::ORIGIN;
    for (index, instruction) in instructions.iter().enumerate() {
        if !instruction.distance.is_finite() {
            return Err(GeometryError::NonFiniteDistance { index });
        }
        let next = instruction.direction.advance(cursor, instruction.distance);
        walls.push(Segment { a: cursor, b: next });
        cursor = next;
    }
    Ok(walls)
}
