//! Disk transition geometry.
//!
//! A transfer is animated in three equal phases: the disk rises off its
//! source peg to a fixed height above the tallest tower, slides across to
//! the destination column, and drops onto its new slot.
//!
//! Coordinates are in board units: `column` is the peg index (0..=2) and
//! `level` is the slot height, 0 being the bottom disk.

use crate::pegs::{Disk, Peg, PegId};

/// Default duration of one full transition, in milliseconds.
pub const DEFAULT_ANIMATION_MS: u64 = 1000;

/// Levels of clearance kept above the tallest possible tower while sliding.
const LIFT_CLEARANCE: f32 = 1.5;

/// A position on the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub column: f32,
    pub level: f32,
}

/// Which leg of the transition a disk is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lift,
    Slide,
    Drop,
    Done,
}

/// One completed move, as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub disk: Disk,
    pub from: PegId,
    pub to: PegId,
    /// Slot the disk occupied on the source peg.
    pub from_level: usize,
    /// Slot the disk now occupies on the destination peg.
    pub to_level: usize,
}

impl Transition {
    /// Describes a move that has already been applied to `from` and `to`.
    pub fn new(from: &Peg, to: &Peg, disk: Disk) -> Self {
        Self {
            disk,
            from: from.id(),
            to: to.id(),
            from_level: from.len(),
            to_level: to.len().saturating_sub(1),
        }
    }

    /// Level at which the disk travels between columns.
    pub fn travel_level(disk_count: usize) -> f32 {
        disk_count as f32 + LIFT_CLEARANCE
    }

    pub fn phase_at(progress: f32) -> Phase {
        match progress {
            p if p >= 1.0 => Phase::Done,
            p if p >= 2.0 / 3.0 => Phase::Drop,
            p if p >= 1.0 / 3.0 => Phase::Slide,
            _ => Phase::Lift,
        }
    }

    /// Position of the disk at `progress` (0.0 to 1.0) through the move.
    pub fn position(&self, progress: f32, disk_count: usize) -> Point {
        let progress = progress.clamp(0.0, 1.0);
        let travel = Self::travel_level(disk_count);
        let from_column = self.from.index() as f32;
        let to_column = self.to.index() as f32;
        let from_level = self.from_level as f32;
        let to_level = self.to_level as f32;

        // progress within the current phase
        let local = (progress * 3.0).fract();

        match Self::phase_at(progress) {
            Phase::Lift => Point {
                column: from_column,
                level: lerp(from_level, travel, local),
            },
            Phase::Slide => Point {
                column: lerp(from_column, to_column, local),
                level: travel,
            },
            Phase::Drop => Point {
                column: to_column,
                level: lerp(travel, to_level, local),
            },
            Phase::Done => Point {
                column: to_column,
                level: to_level,
            },
        }
    }
}

#[inline]
fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
