use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    parse_coordinate, BoardError, CellState, Coordinate, Direction, GameConfig, GameEngine,
    GameStatus, Orientation, Outcome, PlayerId,
};

fn at(label: &str) -> Coordinate {
    parse_coordinate(label).unwrap()
}

/// One single-cell ship each: Player One at A1, Player Two at J10.
fn duel() -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::with_ships(1).unwrap()).unwrap();
    engine
        .place_ship(PlayerId::One, 1, at("A1"), Orientation::Horizontal, Direction::Right)
        .unwrap();
    engine
        .place_ship(PlayerId::Two, 1, at("J10"), Orientation::Vertical, Direction::Down)
        .unwrap();
    engine
}

#[test]
fn config_bounds() {
    assert_eq!(GameConfig::new(10, 0), Err(BoardError::InvalidShipCount(0)));
    assert_eq!(GameConfig::new(10, 6), Err(BoardError::InvalidShipCount(6)));
    assert_eq!(GameConfig::new(3, 4), Err(BoardError::InvalidShipCount(4)));
    assert_eq!(GameConfig::new(0, 1), Err(BoardError::InvalidBoardSize(0)));
    assert_eq!(GameConfig::new(27, 1), Err(BoardError::InvalidBoardSize(27)));

    assert_eq!(GameConfig::max_ships(10), 5);
    assert_eq!(GameConfig::max_ships(3), 3);
    assert!(GameConfig::new(3, GameConfig::max_ships(3)).is_ok());
    assert!(GameConfig::new(3, GameConfig::max_ships(3) + 1).is_err());

    let config = GameConfig::default();
    assert_eq!(config.board_size(), 10);
    assert_eq!(config.ship_sizes().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn firing_waits_for_both_fleets() {
    let mut engine = GameEngine::new(GameConfig::with_ships(2).unwrap()).unwrap();
    assert_eq!(engine.status(), GameStatus::Placing);
    assert_eq!(engine.fire(at("A1")), Err(BoardError::PlacementIncomplete));

    let mut rng = SmallRng::seed_from_u64(3);
    engine.place_all_random(PlayerId::One, &mut rng).unwrap();
    assert_eq!(engine.status(), GameStatus::Placing);
    engine.place_all_random(PlayerId::Two, &mut rng).unwrap();
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn each_size_is_placed_once() {
    let mut engine = GameEngine::new(GameConfig::with_ships(3).unwrap()).unwrap();
    engine
        .place_ship(PlayerId::One, 3, at("A1"), Orientation::Horizontal, Direction::Right)
        .unwrap();
    assert_eq!(engine.pending_ships(PlayerId::One), &[1, 2]);
    assert_eq!(
        engine.place_ship(PlayerId::One, 3, at("A5"), Orientation::Horizontal, Direction::Right),
        Err(BoardError::ShipAlreadyPlaced(3))
    );
    assert_eq!(
        engine.place_ship(PlayerId::One, 4, at("A5"), Orientation::Horizontal, Direction::Right),
        Err(BoardError::InvalidShipSize(4))
    );
    // the other player's fleet is independent
    assert_eq!(engine.pending_ships(PlayerId::Two), &[1, 2, 3]);
}

#[test]
fn rejected_placement_leaves_size_pending() {
    let mut engine = GameEngine::new(GameConfig::with_ships(5).unwrap()).unwrap();
    assert!(matches!(
        engine.place_ship(PlayerId::One, 5, at("J1"), Orientation::Horizontal, Direction::Right),
        Err(BoardError::OutOfBounds { .. })
    ));
    assert!(engine.pending_ships(PlayerId::One).contains(&5));
    assert_eq!(engine.board(PlayerId::One).count(CellState::ShipPresent), 0);
}

#[test]
fn turns_alternate_and_repeats_keep_the_turn() {
    let mut engine = duel();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), PlayerId::One);

    assert_eq!(engine.fire(at("B2")), Ok(Outcome::Miss));
    assert_eq!(engine.current_player(), PlayerId::Two);
    assert_eq!(engine.fire(at("C3")), Ok(Outcome::Miss));
    assert_eq!(engine.current_player(), PlayerId::One);

    assert_eq!(engine.fire(at("B2")), Ok(Outcome::AlreadyTargeted));
    assert_eq!(engine.current_player(), PlayerId::One);

    // Player One's shots land on Player Two's board only
    assert_eq!(engine.board(PlayerId::Two).cell(at("B2")).unwrap(), CellState::Miss);
    assert_eq!(engine.board(PlayerId::One).cell(at("B2")).unwrap(), CellState::Empty);
}

#[test]
fn sinking_the_last_ship_wins() {
    let mut engine = duel();
    assert_eq!(engine.fire(at("B2")), Ok(Outcome::Miss));
    assert_eq!(engine.fire(at("A1")), Ok(Outcome::HitAndSunk(1)));
    assert_eq!(engine.status(), GameStatus::Won(PlayerId::Two));
    assert!(engine.fleet(PlayerId::One).all_sunk());
    assert_eq!(engine.fire(at("J10")), Err(BoardError::GameOver));
}

#[test]
fn a_hit_passes_the_turn() {
    let mut engine = GameEngine::new(GameConfig::with_ships(2).unwrap()).unwrap();
    for player in [PlayerId::One, PlayerId::Two] {
        engine
            .place_ship(player, 1, at("A1"), Orientation::Horizontal, Direction::Right)
            .unwrap();
        engine
            .place_ship(player, 2, at("C3"), Orientation::Vertical, Direction::Up)
            .unwrap();
    }
    assert_eq!(engine.fire(at("C3")), Ok(Outcome::Hit));
    assert_eq!(engine.current_player(), PlayerId::Two);
    assert_eq!(engine.fire(at("A1")), Ok(Outcome::HitAndSunk(1)));
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), PlayerId::One);
}

#[test]
fn seeded_random_fleets_are_reproducible() {
    let mut a = GameEngine::new(GameConfig::default()).unwrap();
    let mut b = GameEngine::new(GameConfig::default()).unwrap();
    let mut rng_a = SmallRng::seed_from_u64(12345);
    let mut rng_b = SmallRng::seed_from_u64(12345);
    for player in [PlayerId::One, PlayerId::Two] {
        a.place_all_random(player, &mut rng_a).unwrap();
        b.place_all_random(player, &mut rng_b).unwrap();
        assert_eq!(a.board(player), b.board(player));
        assert_eq!(a.board(player).count(CellState::ShipPresent), 15);
        assert_eq!(a.fleet(player).len(), 5);
    }
}

#[test]
fn off_grid_shot_does_not_pass_the_turn() {
    let mut engine = duel();
    assert!(engine.fire(Coordinate::new(10, 0)).is_err());
    assert_eq!(engine.current_player(), PlayerId::One);
}
