//! Move generation for the Tower of Hanoi.
//!
//! Both generators produce the canonical minimal solution of
//! `2^n - 1` moves:
//! - `generate` / `generate_with` recurse on the disk count
//! - `generate_iterative` walks the same call tree with an explicit frame
//!   stack, so deep towers never hit the recursion limit

use crate::pegs::{Move, PegId};

/// Largest capacity reserved up front when collecting moves.
const MAX_RESERVED_MOVES: u64 = 1 << 20;

/// Number of moves in the minimal solution for `disk_count` disks.
///
/// Saturates at `u64::MAX` past 64 disks.
#[inline]
pub const fn move_count(disk_count: u8) -> u64 {
    if disk_count >= 64 {
        u64::MAX
    } else {
        (1u64 << disk_count) - 1
    }
}

fn reserved_moves(disk_count: u8) -> usize {
    let count = move_count(disk_count);
    if count < MAX_RESERVED_MOVES {
        count as usize
    } else {
        MAX_RESERVED_MOVES as usize
    }
}

/// Returns the minimal move sequence taking `disk_count` disks from `from`
/// to `to`, using `via` as the spare peg.
pub fn generate(disk_count: u8, from: PegId, via: PegId, to: PegId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(reserved_moves(disk_count));
    generate_with(disk_count, from, via, to, &mut |mv| moves.push(mv));
    moves
}

/// Streams the minimal move sequence into `sink`, in execution order.
pub fn generate_with<F>(disk_count: u8, from: PegId, via: PegId, to: PegId, sink: &mut F)
where
    F: FnMut(Move),
{
    match disk_count {
        0 => {}
        1 => sink(Move::between(from, to)),
        _ => {
            // clear the smaller disks out of the way, move the largest,
            // then stack the smaller disks back on top
            generate_with(disk_count - 1, from, to, via, sink);
            sink(Move::between(from, to));
            generate_with(disk_count - 1, via, from, to, sink);
        }
    }
}

/// A pending step in the iterative walk.
#[derive(Clone, Copy)]
enum Frame {
    /// Solve a sub-tower of `disk_count` disks.
    Solve {
        disk_count: u8,
        from: PegId,
        via: PegId,
        to: PegId,
    },
    /// Emit a single move.
    Emit(Move),
}

/// Same sequence as [`generate`], without recursion.
pub fn generate_iterative(disk_count: u8, from: PegId, via: PegId, to: PegId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(reserved_moves(disk_count));

    // the stack never holds more than two frames per disk
    let mut stack = Vec::with_capacity(2 * disk_count as usize + 1);
    stack.push(Frame::Solve {
        disk_count,
        from,
        via,
        to,
    });

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Emit(mv) => moves.push(mv),
            Frame::Solve { disk_count: 0, .. } => {}
            Frame::Solve {
                disk_count: 1,
                from,
                to,
                ..
            } => moves.push(Move::between(from, to)),
            Frame::Solve {
                disk_count,
                from,
                via,
                to,
            } => {
                // pushed in reverse so they pop in execution order
                stack.push(Frame::Solve {
                    disk_count: disk_count - 1,
                    from: via,
                    via: from,
                    to,
                });
                stack.push(Frame::Emit(Move::between(from, to)));
                stack.push(Frame::Solve {
                    disk_count: disk_count - 1,
                    from,
                    via: to,
                    to: via,
                });
            }
        }
    }

    moves
}
