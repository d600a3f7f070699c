use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{AttackResult, BoardError, Position},
    ship::standard_fleet,
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    User,
    Computer,
}

/// Where a game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    UserTurn,
    ComputerTurn,
    GameOver,
}

/// Both boards plus the turn flag.
///
/// Every transition returns a new `GameState`; nothing here mutates shared
/// state, so a caller holds exactly one current value and drops the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    user_board: Board,
    computer_board: Board,
    is_user_turn: bool,
}

impl GameState {
    /// Fresh game: both boards randomly populated with the standard fleet,
    /// user to move.
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let user_board = Board::random_placement(&standard_fleet()?, rng)?;
        let computer_board = Board::random_placement(&standard_fleet()?, rng)?;
        Ok(Self::from_boards(user_board, computer_board))
    }

    /// State from prepared boards, user to move.
    pub fn from_boards(user_board: Board, computer_board: Board) -> Self {
        Self {
            user_board,
            computer_board,
            is_user_turn: true,
        }
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn is_user_turn(&self) -> bool {
        self.is_user_turn
    }

    /// Attack the computer's board at `pos` and hand the turn over.
    ///
    /// Turn ownership is the caller's concern and is not checked here.
    pub fn apply_user_attack(&self, pos: Position) -> Result<Self, BoardError> {
        self.user_attack(pos).map(|(state, _)| state)
    }

    /// [`Self::apply_user_attack`], also reporting the shot's result.
    pub fn user_attack(&self, pos: Position) -> Result<(Self, AttackResult), BoardError> {
        let (computer_board, result) = self.computer_board.attack(pos)?;
        let next = GameState {
            user_board: self.user_board.clone(),
            computer_board,
            is_user_turn: false,
        };
        Ok((next, result))
    }

    /// Attack a uniformly random open cell of the user's board and hand the
    /// turn back.
    ///
    /// At least one open cell must remain; otherwise this fails with
    /// `NoTargetsRemaining`.
    pub fn apply_computer_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, BoardError> {
        self.computer_attack(rng).map(|(state, _, _)| state)
    }

    /// [`Self::apply_computer_attack`], also reporting the target and result.
    pub fn computer_attack<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Self, Position, AttackResult), BoardError> {
        let target = ai::select_target(&self.user_board, rng)?;
        let (user_board, result) = self.user_board.attack(target)?;
        let next = GameState {
            user_board,
            computer_board: self.computer_board.clone(),
            is_user_turn: true,
        };
        Ok((next, target, result))
    }

    /// Replace the user's board with a new random layout.
    ///
    /// Only allowed while [`Self::can_randomize`] holds; fails with
    /// `GameAlreadyStarted` afterwards.
    pub fn randomize_user_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, BoardError> {
        if !self.can_randomize() {
            return Err(BoardError::GameAlreadyStarted);
        }
        Ok(GameState {
            user_board: Board::random_placement(&standard_fleet()?, rng)?,
            ..self.clone()
        })
    }

    /// Neither board has been attacked yet.
    pub fn can_randomize(&self) -> bool {
        !self.user_board.has_received_any_attack() && !self.computer_board.has_received_any_attack()
    }

    pub fn is_game_over(&self) -> bool {
        self.user_board.all_ships_sunk() || self.computer_board.all_ships_sunk()
    }

    /// The user wins if the computer's fleet is gone; that check comes first.
    pub fn winner(&self) -> Option<Side> {
        if self.computer_board.all_ships_sunk() {
            Some(Side::User)
        } else if self.user_board.all_ships_sunk() {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else if self.is_user_turn {
            Phase::UserTurn
        } else {
            Phase::ComputerTurn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Orientation, Ship};
    use rand::{rngs::SmallRng, SeedableRng};

    fn one_ship_board(row: usize, col: usize) -> Board {
        let ship = Ship::new("destroyer", 2).unwrap();
        Board::new()
            .place_ship(&ship, Position::new(row, col).unwrap(), Orientation::Horizontal)
            .unwrap()
    }

    #[test]
    fn empty_boards_are_a_user_win() {
        // both fleets vacuously sunk: user precedence
        let state = GameState::from_boards(Board::new(), Board::new());
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Side::User));
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn user_attack_passes_turn() {
        let state = GameState::from_boards(one_ship_board(0, 0), one_ship_board(5, 5));
        assert_eq!(state.phase(), Phase::UserTurn);
        let (next, result) = state.user_attack(Position::new(5, 5).unwrap()).unwrap();
        assert_eq!(result, AttackResult::Hit);
        assert_eq!(next.phase(), Phase::ComputerTurn);
        assert_eq!(next.user_board(), state.user_board());
        assert!(state.is_user_turn());
    }

    #[test]
    fn sinking_last_ship_ends_game() {
        let state = GameState::from_boards(one_ship_board(0, 0), one_ship_board(5, 5));
        let state = state.apply_user_attack(Position::new(5, 5).unwrap()).unwrap();
        let (state, result) = state.user_attack(Position::new(5, 6).unwrap()).unwrap();
        assert!(matches!(result, AttackResult::Sunk(ref id) if id.as_str() == "destroyer"));
        assert_eq!(state.winner(), Some(Side::User));
    }

    #[test]
    fn randomize_rejected_after_first_attack() {
        let mut rng = SmallRng::seed_from_u64(11);
        let state = GameState::new_game(&mut rng).unwrap();
        assert!(state.can_randomize());
        let reshuffled = state.randomize_user_board(&mut rng).unwrap();
        assert_eq!(reshuffled.computer_board(), state.computer_board());
        assert_eq!(reshuffled.user_board().ship_cell_count(), 17);

        let started = state.apply_computer_attack(&mut rng).unwrap();
        assert!(!started.can_randomize());
        assert_eq!(
            started.randomize_user_board(&mut rng),
            Err(BoardError::GameAlreadyStarted)
        );
    }
}
