//! The craft-room floor plan and plan loading.
//!
//! The built-in plan is a compile-time constant; the drawing never changes
//! at runtime. [`walls_from_json`] exists for hosts that inject their own
//! plan instead.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use thiserror::Error;

use crate::geometry::{Direction, GeometryError, Segment, WallInstruction, build_walls};

/// The craft-room outline, one wall per instruction. The walk returns to
/// its starting point, closing the polygon.
pub const CRAFT_ROOM: [WallInstruction; 14] = [
    WallInstruction::new(Direction::Right, 77.5),
    WallInstruction::new(Direction::Up, 42.0),
    WallInstruction::new(Direction::Right, 76.0),
    WallInstruction::new(Direction::Down, 42.0),
    WallInstruction::new(Direction::Right, 101.75),
    WallInstruction::new(Direction::Down, 180.5),
    WallInstruction::new(Direction::Left, 255.0),
    WallInstruction::new(Direction::Up, 18.5),
    WallInstruction::new(Direction::Left, 6.75),
    WallInstruction::new(Direction::Up, 47.5),
    WallInstruction::new(Direction::Right, 30.0),
    WallInstruction::new(Direction::Up, 47.5),
    WallInstruction::new(Direction::Left, 23.5),
    WallInstruction::new(Direction::Up, 67.0),
];

/// Build the craft-room wall set. Callers build it once and keep the
/// result for the life of the process.
///
/// # Errors
///
/// Propagates [`GeometryError`] from the walk; the built-in plan's
/// distances are all finite, so in practice this succeeds.
pub fn craft_room_walls() -> Result<Vec<Segment>, GeometryError> {
    build_walls(&CRAFT_ROOM)
}

/// Failure to load an externally supplied plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Build a wall set from a JSON array of instructions, e.g.
/// `[{"direction": "right", "distance": 77.5}, …]`.
///
/// # Errors
///
/// [`PlanError::Parse`] for malformed JSON, [`PlanError::Geometry`] for a
/// non-finite distance.
pub fn walls_from_json(json: &str) -> Result<Vec<Segment>, PlanError> {
    let instructions: Vec<WallInstruction> = serde_json::from_str(json)?;
    Ok(build_walls(&instructions)?)
}
