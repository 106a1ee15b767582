//! Move queue and timed playback.
//!
//! A game goes through `Idle -> Staged -> Running` and ends either
//! `Finished` (queue drained) or `Failed` (a move could not be executed).
//! Moves are registered by a producer during [`Game::resolve`], then
//! executed one per tick in registration order.
//!
//! Errors never leave the game: each one is reported through the
//! renderer's message sink and, once running, ends the run.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::HanoiError;
use crate::pegs::{Move, PegId, Pegs};
use crate::producer::{Registrar, Strategy};
use crate::render::Renderer;

/// Default time between two ticks, in milliseconds.
pub const DEFAULT_CADENCE_MS: u64 = 1500;

/// Message shown once when a run ends, however it ends.
pub const GAME_OVER: &str = "Game over";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// No moves staged yet.
    Idle,
    /// Moves registered, waiting for `run`.
    Staged,
    /// Draining the queue, one move per tick.
    Running,
    /// Every move was executed.
    Finished,
    /// A move failed; the rest of the queue was dropped.
    Failed(HanoiError),
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Finished | State::Failed(_))
    }
}

/// A Tower of Hanoi game: three pegs, a queue of pending moves and the
/// renderer that shows them.
pub struct Game<R: Renderer> {
    pegs: Pegs,
    queue: VecDeque<Move>,
    state: State,
    renderer: R,
    disk_count: u8,
    executed: usize,
}

impl<R: Renderer> Game<R> {
    /// Starts a game with `disk_count` disks on the first peg.
    ///
    /// A count of 0 is accepted: the pegs start empty, every producer that
    /// moves a disk fails with [`HanoiError::EmptyPeg`], and an empty
    /// solution finishes on its first tick. The command line only allows
    /// 1 to [`MAX_DISKS`](crate::MAX_DISKS).
    pub fn new(disk_count: u8, renderer: R) -> Self {
        Self {
            pegs: Pegs::new(disk_count),
            queue: VecDeque::new(),
            state: State::Idle,
            renderer,
            disk_count,
            executed: 0,
        }
    }

    pub fn pegs(&self) -> &Pegs {
        &self.pegs
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Number of moves executed so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Moves still waiting in the queue, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Move> {
        self.queue.iter()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Runs `producer` to fill the move queue.
    ///
    /// On success the game is `Staged`. If the producer fails, the moves it
    /// registered are discarded, the failure is reported and the state is
    /// unchanged. Calling this once the run has started only reports
    /// [`HanoiError::AlreadyStarted`].
    pub fn resolve<F>(&mut self, producer: F)
    where
        F: FnOnce(&mut Registrar<'_>) -> Result<(), HanoiError>,
    {
        if !matches!(self.state, State::Idle | State::Staged) {
            warn!("resolve called while {:?}", self.state);
            self.report(&HanoiError::AlreadyStarted);
            return;
        }

        let already_staged = self.queue.len();
        let mut registrar = Registrar::new(&mut self.queue, self.disk_count);

        match producer(&mut registrar) {
            Ok(()) => {
                debug!(
                    "staged {} moves ({} total)",
                    self.queue.len() - already_staged,
                    self.queue.len()
                );
                self.state = State::Staged;
            }
            Err(error) => {
                self.queue.truncate(already_staged);
                self.report(&error);
            }
        }
    }

    /// Parses `input` as a [`Strategy`] and resolves with it.
    ///
    /// Text that does not name a producer reports
    /// [`HanoiError::InvalidProducer`] and does nothing further.
    pub fn resolve_named(&mut self, input: &str) {
        match input.parse::<Strategy>() {
            Ok(strategy) => self.resolve(|registrar| strategy.produce(registrar)),
            Err(error) => self.report(&error),
        }
    }

    /// Starts draining the staged moves. Nothing is executed until the
    /// first [`tick`](Self::tick).
    pub fn run(&mut self) {
        match self.state {
            State::Staged => {
                debug!("running {} moves", self.queue.len());
                self.state = State::Running;
            }
            State::Idle => warn!("run called with no moves staged"),
            _ => warn!("run called while {:?}", self.state),
        }
    }

    /// Executes the oldest pending move, or finishes the run if there is
    /// none. Does nothing unless the game is running.
    pub fn tick(&mut self) -> &State {
        if self.state != State::Running {
            return &self.state;
        }

        match self.queue.pop_front() {
            None => {
                info!("finished after {} moves", self.executed);
                self.state = State::Finished;
                self.renderer.display_message(GAME_OVER);
            }
            Some(mv) => {
                if let Err(error) = self.execute(mv) {
                    info!(
                        "move {} failed after {} moves, dropping {} pending: {}",
                        mv,
                        self.executed,
                        self.queue.len(),
                        error
                    );
                    self.queue.clear();
                    self.report(&error);
                    self.state = State::Failed(error);
                    self.renderer.display_message(GAME_OVER);
                }
            }
        }

        &self.state
    }

    /// Runs the staged moves to the end, one tick every `cadence`.
    ///
    /// The first tick happens immediately. Blocks the calling thread until
    /// the game is finished or failed.
    pub fn play(&mut self, cadence: Duration) -> &State {
        self.run();
        if self.state != State::Running {
            return &self.state;
        }

        while !self.tick().is_terminal() {
            thread::sleep(cadence);
        }

        &self.state
    }

    fn execute(&mut self, mv: Move) -> Result<(), HanoiError> {
        let from = PegId::try_from(mv.from)?;
        let to = PegId::try_from(mv.to)?;

        let disk = self.pegs.transfer(mv)?;
        self.executed += 1;
        debug!("move {}: disk {} {}", self.executed, disk, mv);

        self.renderer
            .animate(self.pegs.peg(from), self.pegs.peg(to), disk);
        Ok(())
    }

    fn report(&mut self, error: &HanoiError) {
        self.renderer.display_message(&error.to_string());
    }
}
