//! Maps user intents onto game-state transitions.
//!
//! The controller owns the single current [`GameState`] and swaps it for the
//! value each core call returns. It has no timers: after a user attack it
//! reports that a computer reply is due and the caller decides when to run
//! [`Controller::computer_reply`].

use log::{debug, info};
use rand::Rng;

use crate::{
    common::{AttackResult, BoardError, Position},
    display::{project, DisplaySnapshot},
    game::{GameState, Phase},
};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Clicked a cell on the opponent grid.
    Attack(Position),
    /// Start over with fresh boards.
    PlayAgain,
    /// Re-roll the user's ship layout.
    Randomize,
}

/// What handling an [`Intent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed; no redraw needed.
    Ignored,
    /// The user's shot landed.
    Attacked {
        result: AttackResult,
        /// The game is still running and the computer moves next.
        computer_reply_due: bool,
    },
    /// A new game was started.
    Restarted,
    /// The user's board was re-randomized.
    Randomized,
}

pub struct Controller<R: Rng> {
    state: GameState,
    rng: R,
}

impl<R: Rng> Controller<R> {
    /// Start a new game driven by `rng`.
    pub fn new(mut rng: R) -> Result<Self, BoardError> {
        let state = GameState::new_game(&mut rng)?;
        Ok(Self { state, rng })
    }

    /// Controller resuming from a prepared state.
    pub fn with_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        project(&self.state)
    }

    pub fn handle(&mut self, intent: Intent) -> Result<Outcome, BoardError> {
        match intent {
            Intent::Attack(pos) => self.user_attack(pos),
            Intent::PlayAgain => {
                self.state = GameState::new_game(&mut self.rng)?;
                info!("new game started");
                Ok(Outcome::Restarted)
            }
            Intent::Randomize => {
                if !self.state.can_randomize() {
                    debug!("randomize ignored: attacks already made");
                    return Ok(Outcome::Ignored);
                }
                self.state = self.state.randomize_user_board(&mut self.rng)?;
                Ok(Outcome::Randomized)
            }
        }
    }

    fn user_attack(&mut self, pos: Position) -> Result<Outcome, BoardError> {
        if self.state.phase() != Phase::UserTurn {
            debug!("attack at ({}, {}) ignored: not the user's turn", pos.row(), pos.col());
            return Ok(Outcome::Ignored);
        }
        match self.state.user_attack(pos) {
            Ok((next, result)) => {
                self.state = next;
                let computer_reply_due = !self.state.is_game_over();
                if !computer_reply_due {
                    self.announce_winner();
                }
                Ok(Outcome::Attacked {
                    result,
                    computer_reply_due,
                })
            }
            Err(BoardError::AlreadyAttacked { row, col }) => {
                debug!("cell ({}, {}) already attacked; click ignored", row, col);
                Ok(Outcome::Ignored)
            }
            Err(e) => Err(e),
        }
    }

    /// Let the computer fire once. Returns `None` if it is not the
    /// computer's turn or the game is over.
    pub fn computer_reply(&mut self) -> Result<Option<(Position, AttackResult)>, BoardError> {
        if self.state.phase() != Phase::ComputerTurn {
            return Ok(None);
        }
        let (next, target, result) = self.state.computer_attack(&mut self.rng)?;
        self.state = next;
        if self.state.is_game_over() {
            self.announce_winner();
        }
        Ok(Some((target, result)))
    }

    fn announce_winner(&self) {
        if let Some(side) = self.state.winner() {
            info!("game over: {:?} wins", side);
        }
    }
}
