//! Presentation of a running game.
//!
//! The game core talks to the outside world only through [`Renderer`]: one
//! call per executed move, and one message sink shared by success and
//! failure notifications.

use crate::animation::Transition;
use crate::pegs::{Disk, Move, Peg, Pegs};

/// Rendering collaborator of a [`Game`](crate::game::Game).
pub trait Renderer {
    /// Shows a completed move of `disk` from `from` to `to`.
    ///
    /// Both pegs already reflect the move. The game does not wait for the
    /// animation to finish.
    fn animate(&mut self, from: &Peg, to: &Peg, disk: Disk);

    /// Shows a message to the user.
    fn display_message(&mut self, message: &str);
}

/// Keeps everything it is given. Used for headless playback.
#[derive(Default, Debug)]
pub struct RecordingRenderer {
    pub transitions: Vec<Transition>,
    pub messages: Vec<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn animate(&mut self, from: &Peg, to: &Peg, disk: Disk) {
        self.transitions.push(Transition::new(from, to, disk));
    }

    fn display_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Prints moves and messages to stdout.
#[derive(Default)]
pub struct TerminalRenderer {
    moves_shown: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the move and returns its numbered line.
    fn numbered_line(&mut self, from: &Peg, to: &Peg, disk: Disk) -> String {
        self.moves_shown += 1;
        format!("{:>4}. {}", self.moves_shown, describe_move(from, to, disk))
    }
}

impl Renderer for TerminalRenderer {
    fn animate(&mut self, from: &Peg, to: &Peg, disk: Disk) {
        println!("{}", self.numbered_line(from, to, disk));
    }

    fn display_message(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// One line describing a completed move and the two pegs it touched.
pub fn describe_move(from: &Peg, to: &Peg, disk: Disk) -> String {
    format!(
        "disk {} : tower {} -> tower {}  [{}: {}] [{}: {}]",
        disk,
        from.id(),
        to.id(),
        from.id(),
        format_disks(from),
        to.id(),
        format_disks(to)
    )
}

/// Disks of a peg bottom to top, or `-` when empty.
fn format_disks(peg: &Peg) -> String {
    if peg.is_empty() {
        return "-".to_string();
    }
    peg.disks()
        .iter()
        .map(Disk::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Character shown for a disk in the tower picture.
fn disk_char(disk: Disk) -> char {
    match disk.size() {
        size if size < 10 => char::from(b'0' + size),
        // letters for sizes 10 and up
        size if size < 36 => char::from(b'A' + size - 10),
        _ => '#',
    }
}

/// Draws the three pegs side by side, tallest level first.
///
/// Empty slots show as '|'. The bottom row numbers the pegs.
pub fn format_pegs(pegs: &Pegs) -> String {
    let height = pegs.disk_count().max(1);
    let mut output = String::new();

    for level in (0..height).rev() {
        for (column, peg) in pegs.iter().enumerate() {
            if column > 0 {
                output.push_str("  ");
            }
            let cell = peg.disks().get(level).map_or('|', |&disk| disk_char(disk));
            output.push(cell);
        }
        output.push('\n');
    }

    output.push_str("=======\n");
    output.push_str("1  2  3\n");
    output
}

/// Numbered move list, one move per line.
pub fn format_moves(moves: &[Move]) -> String {
    let width = moves.len().to_string().len();
    let mut output = String::new();
    for (i, mv) in moves.iter().enumerate() {
        output.push_str(&format!(
            "{:>width$}. {} -> {}\n",
            i + 1,
            mv.from,
            mv.to,
            width = width
        ));
    }
    output
}
