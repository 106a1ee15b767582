use thiserror::Error;

/// Everything that can stop a game.
///
/// Every variant is terminal for the current run. The game reports the
/// `Display` text through its renderer and never hands the error back to
/// the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HanoiError {
    #[error("A disk can not be put on a smaller one (tower {peg} : disk {disk} can not be on disk {top})")]
    InvalidMove { peg: u8, disk: u8, top: u8 },
    #[error("No disk to remove from tower {peg}")]
    EmptyPeg { peg: u8 },
    #[error("Tower {peg} does not exist")]
    UnknownPeg { peg: u8 },
    #[error("The solution should be a producer, got `{input}`")]
    InvalidProducer { input: String },
    #[error("The solution has already been started")]
    AlreadyStarted,
}
