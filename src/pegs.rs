//! Peg, disk and move types.
//!
//! A peg is a stack of disks ordered bottom to top. Disks are ranked by
//! size, 1 being the smallest, and a disk may only rest on a larger one.

use std::fmt;

use crate::error::HanoiError;

/// Number of pegs on the board.
pub const NUM_PEGS: usize = 3;

/// A disk, identified by its size rank (1 = smallest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(pub u8);

impl Disk {
    #[inline]
    pub fn size(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three pegs, numbered 1 to 3 from left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PegId {
    First = 1,
    Second = 2,
    Third = 3,
}

impl PegId {
    pub const ALL: [PegId; NUM_PEGS] = [PegId::First, PegId::Second, PegId::Third];

    /// The 1-based number used in moves and messages.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The 0-based slot in a peg array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for PegId {
    type Error = HanoiError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(PegId::First),
            2 => Ok(PegId::Second),
            3 => Ok(PegId::Third),
            peg => Err(HanoiError::UnknownPeg { peg }),
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Transfer of the top disk from one peg to another.
///
/// Peg numbers are kept raw so that a move may name a peg that does not
/// exist. They are only checked when the move is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: u8,
    pub to: u8,
}

impl Move {
    pub const fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    pub fn between(from: PegId, to: PegId) -> Self {
        Self::new(from.number(), to.number())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A single peg holding disks bottom to top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peg {
    id: PegId,
    disks: Vec<Disk>,
}

impl Peg {
    pub fn new(id: PegId) -> Self {
        Self {
            id,
            disks: Vec::new(),
        }
    }

    pub fn id(&self) -> PegId {
        self.id
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Puts `disk` on top of the peg.
    ///
    /// Fails with [`HanoiError::InvalidMove`] unless `disk` is strictly
    /// smaller than the current top disk, leaving the peg untouched.
    pub fn push(&mut self, disk: Disk) -> Result<(), HanoiError> {
        if let Some(top) = self.top() {
            if top <= disk {
                return Err(HanoiError::InvalidMove {
                    peg: self.id.number(),
                    disk: disk.size(),
                    top: top.size(),
                });
            }
        }

        self.disks.push(disk);
        Ok(())
    }

    /// Removes the top disk.
    pub fn pop(&mut self) -> Result<Disk, HanoiError> {
        self.disks.pop().ok_or(HanoiError::EmptyPeg {
            peg: self.id.number(),
        })
    }
}

/// The three pegs of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pegs {
    pegs: [Peg; NUM_PEGS],
}

impl Pegs {
    /// Builds the starting position: `disk_count` disks on the first peg,
    /// largest at the bottom.
    pub fn new(disk_count: u8) -> Self {
        let mut first = Peg::new(PegId::First);
        first.disks = (1..=disk_count).rev().map(Disk).collect();

        Self {
            pegs: [first, Peg::new(PegId::Second), Peg::new(PegId::Third)],
        }
    }

    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peg> {
        self.pegs.iter()
    }

    /// Total number of disks across all pegs.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Peg::len).sum()
    }

    /// Moves the top disk of `mv.from` onto `mv.to` and returns it.
    ///
    /// The source peg is resolved before the destination. On failure the
    /// pegs are left exactly as they were.
    pub fn transfer(&mut self, mv: Move) -> Result<Disk, HanoiError> {
        let from = PegId::try_from(mv.from)?;
        let to = PegId::try_from(mv.to)?;

        let disk = self.pegs[from.index()].pop()?;
        if let Err(error) = self.pegs[to.index()].push(disk) {
            // the disk came off this peg, so it always fits back
            self.pegs[from.index()].disks.push(disk);
            return Err(error);
        }

        Ok(disk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_onto_empty_peg() {
        let mut peg = Peg::new(PegId::Second);
        assert_eq!(peg.push(Disk(5)), Ok(()));
        assert_eq!(peg.top(), Some(Disk(5)));
    }

    #[test]
    fn test_push_smaller_disk_succeeds() {
        let mut peg = Peg::new(PegId::First);
        peg.push(Disk(3)).unwrap();
        peg.push(Disk(1)).unwrap();
        assert_eq!(peg.disks(), &[Disk(3), Disk(1)]);
    }

    #[test]
    fn test_push_larger_disk_fails_and_keeps_state() {
        let mut peg = Peg::new(PegId::Third);
        peg.push(Disk(2)).unwrap();

        let result = peg.push(Disk(4));
        assert_eq!(
            result,
            Err(HanoiError::InvalidMove {
                peg: 3,
                disk: 4,
                top: 2
            })
        );
        assert_eq!(peg.disks(), &[Disk(2)]);
    }

    #[test]
    fn test_push_equal_disk_fails() {
        let mut peg = Peg::new(PegId::First);
        peg.push(Disk(2)).unwrap();

        assert_eq!(
            peg.push(Disk(2)),
            Err(HanoiError::InvalidMove {
                peg: 1,
                disk: 2,
                top: 2
            })
        );
        assert_eq!(peg.disks(), &[Disk(2)]);
    }

    #[test]
    fn test_invalid_move_message() {
        let error = HanoiError::InvalidMove {
            peg: 3,
            disk: 4,
            top: 2,
        };
        assert_eq!(
            error.to_string(),
            "A disk can not be put on a smaller one (tower 3 : disk 4 can not be on disk 2)"
        );
    }

    #[test]
    fn test_pop_returns_most_recent_disk() {
        let mut peg = Peg::new(PegId::First);
        peg.push(Disk(4)).unwrap();
        peg.push(Disk(2)).unwrap();

        assert_eq!(peg.pop(), Ok(Disk(2)));
        assert_eq!(peg.len(), 1);
    }

    #[test]
    fn test_pop_empty_peg_fails() {
        let mut peg = Peg::new(PegId::Second);
        assert_eq!(peg.pop(), Err(HanoiError::EmptyPeg { peg: 2 }));
        assert_eq!(
            HanoiError::EmptyPeg { peg: 2 }.to_string(),
            "No disk to remove from tower 2"
        );
    }

    #[test]
    fn test_starting_position() {
        let pegs = Pegs::new(4);
        assert_eq!(
            pegs.peg(PegId::First).disks(),
            &[Disk(4), Disk(3), Disk(2), Disk(1)]
        );
        assert!(pegs.peg(PegId::Second).is_empty());
        assert!(pegs.peg(PegId::Third).is_empty());
        assert_eq!(pegs.disk_count(), 4);
    }

    #[test]
    fn test_peg_id_lookup() {
        for id in PegId::ALL {
            assert_eq!(PegId::try_from(id.number()), Ok(id));
        }
        assert_eq!(PegId::try_from(0), Err(HanoiError::UnknownPeg { peg: 0 }));
        assert_eq!(PegId::try_from(9), Err(HanoiError::UnknownPeg { peg: 9 }));
    }

    #[test]
    fn test_transfer_moves_top_disk() {
        let mut pegs = Pegs::new(2);
        assert_eq!(pegs.transfer(Move::new(1, 3)), Ok(Disk(1)));
        assert_eq!(pegs.peg(PegId::First).disks(), &[Disk(2)]);
        assert_eq!(pegs.peg(PegId::Third).disks(), &[Disk(1)]);
    }

    #[test]
    fn test_failed_transfer_leaves_pegs_unchanged() {
        let mut pegs = Pegs::new(2);
        pegs.transfer(Move::new(1, 3)).unwrap();
        let before = pegs.clone();

        let result = pegs.transfer(Move::new(1, 3));
        assert!(matches!(result, Err(HanoiError::InvalidMove { .. })));
        assert_eq!(pegs, before);
    }

    #[test]
    fn test_transfer_checks_source_first() {
        let mut pegs = Pegs::new(1);
        assert_eq!(
            pegs.transfer(Move::new(9, 7)),
            Err(HanoiError::UnknownPeg { peg: 9 })
        );
        assert_eq!(
            pegs.transfer(Move::new(1, 7)),
            Err(HanoiError::UnknownPeg { peg: 7 })
        );
        assert_eq!(pegs.peg(PegId::First).disks(), &[Disk(1)]);
    }

    #[test]
    fn test_transfer_from_empty_peg() {
        let mut pegs = Pegs::new(1);
        assert_eq!(
            pegs.transfer(Move::new(2, 3)),
            Err(HanoiError::EmptyPeg { peg: 2 })
        );
    }
}
