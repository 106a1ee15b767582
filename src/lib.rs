//! Tower of Hanoi Library
//!
//! Provides the peg model, the move generators and the timed move player
//! behind the `hanoi` binary.

pub mod animation;
pub mod error;
pub mod game;
pub mod pegs;
pub mod producer;
pub mod render;
pub mod solver;

/// Disk count used when none is given.
pub const DEFAULT_DISKS: u8 = 4;

/// Largest disk count accepted on the command line (about a million moves).
pub const MAX_DISKS: u8 = 20;
