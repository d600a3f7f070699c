use broadside::{
    standard_fleet, AttackResult, Board, BoardError, CellState, ErrorKind, Orientation, Position,
    Ship, STANDARD_FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn count(board: &Board, state: CellState) -> usize {
    board
        .cell_states()
        .iter()
        .flatten()
        .filter(|s| **s == state)
        .count()
}

#[test]
fn test_empty_board() {
    let board = Board::new();
    assert_eq!(count(&board, CellState::Empty), 100);
    assert_eq!(board.ship_count(), 0);
    assert!(!board.has_received_any_attack());
    // no ships means nothing left afloat
    assert!(board.all_ships_sunk());
}

#[test]
fn test_attack_empty_board_is_miss() {
    let board = Board::new().receive_attack(pos(0, 0)).unwrap();
    let states = board.cell_states();
    assert_eq!(states[0][0], CellState::Miss);
    assert_eq!(count(&board, CellState::Empty), 99);
    assert!(board.has_received_any_attack());
}

#[test]
fn test_place_and_sink_destroyer() {
    let ship = Ship::new("destroyer", 2).unwrap();
    let board = Board::new()
        .place_ship(&ship, pos(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(count(&board, CellState::Ship), 2);
    assert!(!board.all_ships_sunk());

    let (board, first) = board.attack(pos(0, 0)).unwrap();
    assert_eq!(first, AttackResult::Hit);
    let (board, second) = board.attack(pos(0, 1)).unwrap();
    assert!(matches!(second, AttackResult::Sunk(ref id) if id.as_str() == "destroyer"));

    assert!(board.ship("destroyer").unwrap().is_sunk());
    assert!(board.all_ships_sunk());
    let states = board.cell_states();
    assert_eq!(states[0][0], CellState::Hit);
    assert_eq!(states[0][1], CellState::Hit);
}

#[test]
fn test_repeated_attack_conflicts() {
    let board = Board::new().receive_attack(pos(3, 4)).unwrap();
    let err = board.receive_attack(pos(3, 4)).unwrap_err();
    assert_eq!(err, BoardError::AlreadyAttacked { row: 3, col: 4 });
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn test_place_out_of_bounds() {
    let ship = Ship::new("carrier", 5).unwrap();
    let err = Board::new()
        .place_ship(&ship, pos(0, 6), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    let err = Board::new()
        .place_ship(&ship, pos(6, 0), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    // touching the last row/column is fine
    assert!(Board::new()
        .place_ship(&ship, pos(5, 9), Orientation::Vertical)
        .is_ok());
}

#[test]
fn test_position_out_of_range() {
    let err = Position::new(10, 0).unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: 10, col: 0 });
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(Position::try_from((0, 10)).is_err());
}

#[test]
fn test_overlap_leaves_board_unchanged() {
    let cruiser = Ship::new("cruiser", 3).unwrap();
    let sub = Ship::new("submarine", 3).unwrap();
    let board = Board::new()
        .place_ship(&cruiser, pos(2, 2), Orientation::Horizontal)
        .unwrap();
    let before = board.clone();
    let err = board
        .place_ship(&sub, pos(0, 3), Orientation::Vertical)
        .unwrap_err();
    assert!(matches!(err, BoardError::ShipOverlaps { .. }));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(board, before);
    assert!(board.ship("submarine").is_none());
}

#[test]
fn test_duplicate_placement_conflicts() {
    let ship = Ship::new("destroyer", 2).unwrap();
    let board = Board::new()
        .place_ship(&ship, pos(0, 0), Orientation::Horizontal)
        .unwrap();
    let err = board
        .place_ship(&ship, pos(5, 5), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::ShipAlreadyPlaced {
            id: "destroyer".into()
        }
    );
}

#[test]
fn test_operations_do_not_mutate_input() {
    let ship = Ship::new("battleship", 4).unwrap();
    let empty = Board::new();
    let placed = empty
        .place_ship(&ship, pos(1, 1), Orientation::Vertical)
        .unwrap();
    assert_eq!(empty, Board::new());
    let attacked = placed.receive_attack(pos(1, 1)).unwrap();
    assert!(!placed.is_attacked(pos(1, 1)));
    assert_eq!(placed.ship("battleship").unwrap().hits(), 0);
    assert_eq!(attacked.ship("battleship").unwrap().hits(), 1);
}

#[test]
fn test_random_placement_standard_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::random_placement(&standard_fleet().unwrap(), &mut rng).unwrap();
    assert_eq!(board.ship_count(), STANDARD_FLEET.len());
    assert_eq!(board.ship_cell_count(), TOTAL_SHIP_CELLS);
    assert_eq!(count(&board, CellState::Ship), TOTAL_SHIP_CELLS);
    for def in STANDARD_FLEET {
        let covered = Position::all()
            .filter(|p| board.cell(*p).ship_id().map(|id| id.as_str()) == Some(def.name()))
            .count();
        assert_eq!(covered, def.length(), "{} footprint", def.name());
    }
}

#[test]
fn test_random_placement_is_reproducible() {
    let fleet = standard_fleet().unwrap();
    let a = Board::random_placement(&fleet, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Board::random_placement(&fleet, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}
