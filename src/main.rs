//! Tower of Hanoi Player
//!
//! Solves the Tower of Hanoi for a given number of disks and plays the
//! solution back one move per tick, either in the terminal or in an
//! interactive 3D viewer.

mod visualization;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use hanoi::animation::DEFAULT_ANIMATION_MS;
use hanoi::game::{Game, DEFAULT_CADENCE_MS};
use hanoi::pegs::PegId;
use hanoi::render::{format_moves, format_pegs, TerminalRenderer};
use hanoi::{solver, DEFAULT_DISKS, MAX_DISKS};

/// Solves the Tower of Hanoi and plays the solution back.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the minimal move list.
    Solve(SolveArgs),
    /// Print the number of moves in the minimal solution.
    Count(DiskArgs),
    /// Play a solution back in the terminal.
    Play(GameArgs),
    /// Play a solution back in an interactive 3D viewer.
    Display(DisplayArgs),
}

#[derive(Args)]
struct DiskArgs {
    /// Number of disks.
    #[arg(short, long, default_value_t = DEFAULT_DISKS, value_parser = parse_disks)]
    disks: u8,
}

#[derive(Args)]
struct SolveArgs {
    #[command(flatten)]
    disks: DiskArgs,
    /// Peg holding the tower at the start.
    #[arg(long, default_value = "1", value_parser = parse_peg)]
    from: PegId,
    /// Spare peg.
    #[arg(long, default_value = "2", value_parser = parse_peg)]
    via: PegId,
    /// Peg the tower must end on.
    #[arg(long, default_value = "3", value_parser = parse_peg)]
    to: PegId,
}

#[derive(Args)]
struct GameArgs {
    #[command(flatten)]
    disks: DiskArgs,
    /// Solution to play: `recursive`, `iterative`, or moves such as `1-3,1-2`.
    #[arg(short, long, default_value = "recursive")]
    producer: String,
    /// Milliseconds between two moves.
    #[arg(short, long, default_value_t = DEFAULT_CADENCE_MS)]
    interval: u64,
}

#[derive(Args)]
struct DisplayArgs {
    #[command(flatten)]
    game: GameArgs,
    /// Milliseconds taken by one disk transition.
    #[arg(short, long, default_value_t = DEFAULT_ANIMATION_MS)]
    animation: u64,
}

impl Default for DisplayArgs {
    fn default() -> Self {
        Self {
            game: GameArgs {
                disks: DiskArgs {
                    disks: DEFAULT_DISKS,
                },
                producer: "recursive".to_string(),
                interval: DEFAULT_CADENCE_MS,
            },
            animation: DEFAULT_ANIMATION_MS,
        }
    }
}

fn parse_disks(input: &str) -> Result<u8, String> {
    let disks: u8 = input
        .parse()
        .map_err(|_| format!("`{}` is not a disk count", input))?;
    if !(1..=MAX_DISKS).contains(&disks) {
        return Err(format!("disk count must be between 1 and {}", MAX_DISKS));
    }
    Ok(disks)
}

fn parse_peg(input: &str) -> Result<PegId, String> {
    let number: u8 = input
        .parse()
        .map_err(|_| format!("`{}` is not a peg number", input))?;
    PegId::try_from(number).map_err(|error| error.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve(args)) => run_solve(args),
        Some(Command::Count(args)) => run_count(args),
        Some(Command::Play(args)) => run_play(args),
        Some(Command::Display(args)) => run_display(args),
        // default: play back the standard solution in the viewer
        None => run_display(DisplayArgs::default()),
    }
}

/// Prints the move list.
fn run_solve(args: SolveArgs) {
    if args.from == args.via || args.from == args.to || args.via == args.to {
        eprintln!("--from, --via and --to must name three different pegs");
        return;
    }

    let moves = solver::generate(args.disks.disks, args.from, args.via, args.to);
    print!("{}", format_moves(&moves));
}

/// Prints the move count.
fn run_count(args: DiskArgs) {
    println!("{} moves", solver::move_count(args.disks));
}

/// Plays the solution back in the terminal.
fn run_play(args: GameArgs) {
    let mut game = Game::new(args.disks.disks, TerminalRenderer::new());
    print!("{}", format_pegs(game.pegs()));

    game.resolve_named(&args.producer);
    game.play(Duration::from_millis(args.interval));

    print!("{}", format_pegs(game.pegs()));
}

/// Plays the solution back in the 3D viewer.
fn run_display(args: DisplayArgs) {
    let mut game = Game::new(args.game.disks.disks, visualization::SceneRenderer::default());
    game.resolve_named(&args.game.producer);

    visualization::display(
        game,
        Duration::from_millis(args.game.interval),
        Duration::from_millis(args.animation),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_disks_bounds() {
        assert_eq!(parse_disks("1"), Ok(1));
        assert_eq!(parse_disks("20"), Ok(20));
        assert!(parse_disks("0").is_err());
        assert!(parse_disks("21").is_err());
        assert!(parse_disks("four").is_err());
    }

    #[test]
    fn test_parse_peg() {
        assert_eq!(parse_peg("2"), Ok(PegId::Second));
        assert_eq!(parse_peg("9"), Err("Tower 9 does not exist".to_string()));
        assert!(parse_peg("x").is_err());
    }

    #[test]
    fn test_play_arguments() {
        let cli = Cli::try_parse_from(["hanoi", "play", "-d", "3", "-p", "9-2", "-i", "0"]).unwrap();
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.disks.disks, 3);
                assert_eq!(args.producer, "9-2");
                assert_eq!(args.interval, 0);
            }
            _ => panic!("expected the play command"),
        }
    }

    #[test]
    fn test_rejects_too_many_disks() {
        assert!(Cli::try_parse_from(["hanoi", "count", "--disks", "64"]).is_err());
    }
}
