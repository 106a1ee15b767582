//! Solution producers.
//!
//! A producer is handed a [`Registrar`] and registers the moves of its
//! solution in execution order. Any closure taking the registrar is a
//! producer; [`Strategy`] covers the producers that can be named on the
//! command line.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::HanoiError;
use crate::pegs::{Move, PegId};
use crate::solver;

/// Handle used by producers to append moves to a game's queue.
///
/// Only exists while a producer runs, so moves cannot be registered once a
/// game has started.
pub struct Registrar<'a> {
    queue: &'a mut VecDeque<Move>,
    disk_count: u8,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(queue: &'a mut VecDeque<Move>, disk_count: u8) -> Self {
        Self { queue, disk_count }
    }

    /// Queues a move of the top disk of `from` onto `to`.
    ///
    /// Peg numbers are not checked here; an unknown peg fails the run when
    /// the move is executed.
    pub fn register_move(&mut self, from: u8, to: u8) {
        self.queue.push_back(Move::new(from, to));
    }

    /// Number of disks in the game being solved.
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }
}

/// Producers that can be named in text.
///
/// Syntax:
/// - `recursive`: the recursive solution from peg 1 to peg 3
/// - `iterative`: the same solution from the explicit-stack generator
/// - `1-3,1-2,3-2`: an explicit list of moves, executed as written
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Recursive,
    Iterative,
    Moves(Vec<Move>),
}

impl Strategy {
    /// Registers this strategy's moves.
    pub fn produce(self, registrar: &mut Registrar<'_>) -> Result<(), HanoiError> {
        let disk_count = registrar.disk_count();
        match self {
            Strategy::Recursive => {
                solver::generate_with(
                    disk_count,
                    PegId::First,
                    PegId::Second,
                    PegId::Third,
                    &mut |mv| registrar.register_move(mv.from, mv.to),
                );
            }
            Strategy::Iterative => {
                for mv in
                    solver::generate_iterative(disk_count, PegId::First, PegId::Second, PegId::Third)
                {
                    registrar.register_move(mv.from, mv.to);
                }
            }
            Strategy::Moves(moves) => {
                for mv in moves {
                    registrar.register_move(mv.from, mv.to);
                }
            }
        }
        Ok(())
    }
}

/// Parses one `from-to` pair.
fn parse_move(text: &str) -> Option<Move> {
    let (from, to) = text.split_once('-')?;
    Some(Move::new(from.trim().parse().ok()?, to.trim().parse().ok()?))
}

impl FromStr for Strategy {
    type Err = HanoiError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || HanoiError::InvalidProducer {
            input: input.to_string(),
        };

        match trimmed.to_lowercase().as_str() {
            "recursive" => return Ok(Strategy::Recursive),
            "iterative" => return Ok(Strategy::Iterative),
            "" => return Err(invalid()),
            _ => {}
        }

        trimmed
            .split(',')
            .map(parse_move)
            .collect::<Option<Vec<_>>>()
            .map(Strategy::Moves)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
            Strategy::Moves(moves) => {
                for (i, mv) in moves.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", mv)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produce(strategy: Strategy, disk_count: u8) -> Vec<Move> {
        let mut queue = VecDeque::new();
        let mut registrar = Registrar::new(&mut queue, disk_count);
        strategy.produce(&mut registrar).unwrap();
        queue.into_iter().collect()
    }

    #[test]
    fn test_parse_named_strategies() {
        assert_eq!("recursive".parse::<Strategy>(), Ok(Strategy::Recursive));
        assert_eq!(" Iterative ".parse::<Strategy>(), Ok(Strategy::Iterative));
    }

    #[test]
    fn test_parse_move_list() {
        assert_eq!(
            "1-3, 9-2".parse::<Strategy>(),
            Ok(Strategy::Moves(vec![Move::new(1, 3), Move::new(9, 2)]))
        );
    }

    #[test]
    fn test_parse_rejects_non_producers() {
        for input in ["", "   ", "solve", "1-", "1-3,", "a-b", "1:3", "300-1"] {
            assert_eq!(
                input.parse::<Strategy>(),
                Err(HanoiError::InvalidProducer {
                    input: input.to_string()
                }),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_invalid_producer_message() {
        let error = "solve".parse::<Strategy>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "The solution should be a producer, got `solve`"
        );
    }

    #[test]
    fn test_display_round_trips_move_list() {
        let strategy: Strategy = "1-3,1-2,3-2".parse().unwrap();
        assert_eq!(strategy.to_string(), "1-3,1-2,3-2");
    }

    #[test]
    fn test_recursive_and_iterative_register_same_moves() {
        let recursive = produce(Strategy::Recursive, 5);
        assert_eq!(recursive.len(), 31);
        assert_eq!(recursive, produce(Strategy::Iterative, 5));
        assert_eq!(
            recursive,
            solver::generate(5, PegId::First, PegId::Second, PegId::Third)
        );
    }

    #[test]
    fn test_registrar_appends_in_order() {
        let mut queue = VecDeque::new();
        let mut registrar = Registrar::new(&mut queue, 2);
        registrar.register_move(1, 2);
        registrar.register_move(9, 3);
        assert_eq!(registrar.disk_count(), 2);
        assert_eq!(queue, VecDeque::from(vec![Move::new(1, 2), Move::new(9, 3)]));
    }

    #[test]
    fn test_move_list_keeps_unknown_pegs() {
        assert_eq!(
            produce("9-2,1-3".parse().unwrap(), 1),
            vec![Move::new(9, 2), Move::new(1, 3)]
        );
    }
}
