use salvo::{
    apply_placement, create_board, is_fleet_destroyed, parse_coordinate, resolve_fire,
    validate_placement, Board, BoardError, CellState, Coordinate, Direction, Fleet, Outcome,
};

fn at(label: &str) -> Coordinate {
    parse_coordinate(label).unwrap()
}

fn setup(ships: &[(usize, &str, Direction)]) -> (Board, Fleet) {
    let mut board = create_board(10).unwrap();
    let mut fleet = Fleet::new();
    for &(size, anchor, d) in ships {
        let cells = validate_placement(&board, size, at(anchor), d.orientation(), d).unwrap();
        apply_placement(&mut board, &mut fleet, cells, size).unwrap();
    }
    (board, fleet)
}

#[test]
fn three_hits_sink_a_lone_cruiser() {
    let (mut board, mut fleet) = setup(&[(3, "A1", Direction::Right)]);

    assert_eq!(resolve_fire(&mut board, &mut fleet, at("A1")), Ok(Outcome::Hit));
    assert!(!is_fleet_destroyed(&fleet));
    assert_eq!(resolve_fire(&mut board, &mut fleet, at("B1")), Ok(Outcome::Hit));
    assert!(!is_fleet_destroyed(&fleet));
    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("C1")),
        Ok(Outcome::HitAndSunk(3))
    );
    assert!(is_fleet_destroyed(&fleet));
    assert_eq!(board.count(CellState::Hit), 3);
}

#[test]
fn firing_twice_at_water_is_a_miss_then_a_repeat() {
    let (mut board, mut fleet) = setup(&[(2, "E5", Direction::Down)]);

    assert_eq!(resolve_fire(&mut board, &mut fleet, at("A1")), Ok(Outcome::Miss));
    assert_eq!(board.cell(at("A1")).unwrap(), CellState::Miss);
    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("A1")),
        Ok(Outcome::AlreadyTargeted)
    );
    assert_eq!(board.cell(at("A1")).unwrap(), CellState::Miss);
}

#[test]
fn repeat_hit_does_not_touch_the_fleet() {
    let (mut board, mut fleet) = setup(&[(2, "E5", Direction::Down)]);

    assert_eq!(resolve_fire(&mut board, &mut fleet, at("E5")), Ok(Outcome::Hit));
    let board_after = board.clone();
    let fleet_after = fleet.clone();
    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("E5")),
        Ok(Outcome::AlreadyTargeted)
    );
    assert_eq!(board, board_after);
    assert_eq!(fleet, fleet_after);
    assert_eq!(fleet.ships()[0].remaining(), &[at("E6")]);
}

#[test]
fn sinking_is_reported_with_the_ship_size() {
    let (mut board, mut fleet) = setup(&[(1, "A1", Direction::Right), (2, "C3", Direction::Left)]);

    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("A1")),
        Ok(Outcome::HitAndSunk(1))
    );
    assert!(!is_fleet_destroyed(&fleet));
    assert_eq!(fleet.afloat(), 1);
    assert_eq!(resolve_fire(&mut board, &mut fleet, at("B3")), Ok(Outcome::Hit));
    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("C3")),
        Ok(Outcome::HitAndSunk(2))
    );
    assert!(is_fleet_destroyed(&fleet));
}

#[test]
fn adjacent_ships_are_tracked_separately() {
    let (mut board, mut fleet) = setup(&[(2, "A1", Direction::Right), (2, "A2", Direction::Right)]);

    assert_eq!(resolve_fire(&mut board, &mut fleet, at("A1")), Ok(Outcome::Hit));
    assert_eq!(resolve_fire(&mut board, &mut fleet, at("A2")), Ok(Outcome::Hit));
    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("B2")),
        Ok(Outcome::HitAndSunk(2))
    );
    assert!(!is_fleet_destroyed(&fleet));
}

#[test]
fn off_grid_target_is_an_error() {
    let (mut board, mut fleet) = setup(&[(2, "A1", Direction::Right)]);
    assert_eq!(
        resolve_fire(&mut board, &mut fleet, Coordinate::new(3, 10)),
        Err(BoardError::OutOfBounds { row: 3, col: 10 })
    );
}

#[test]
fn ship_cell_without_owner_is_reported_and_left_alone() {
    let mut board = create_board(10).unwrap();
    let mut fleet = Fleet::new();
    board.place(&[at("D4")]).unwrap();

    assert_eq!(
        resolve_fire(&mut board, &mut fleet, at("D4")),
        Err(BoardError::UntrackedHit(at("D4")))
    );
    assert_eq!(board.cell(at("D4")).unwrap(), CellState::ShipPresent);
}

#[test]
fn outcome_turn_rules() {
    assert!(Outcome::Hit.consumes_turn());
    assert!(Outcome::Miss.consumes_turn());
    assert!(Outcome::HitAndSunk(4).consumes_turn());
    assert!(!Outcome::AlreadyTargeted.consumes_turn());
    assert!(Outcome::HitAndSunk(4).is_hit());
    assert!(!Outcome::Miss.is_hit());
}

#[test]
fn repeat_converts_to_an_error() {
    let (mut board, mut fleet) = setup(&[(2, "E5", Direction::Down)]);
    let first = resolve_fire(&mut board, &mut fleet, at("E5")).unwrap();
    assert_eq!(first.into_result(at("E5")), Ok(Outcome::Hit));

    let again = resolve_fire(&mut board, &mut fleet, at("E5")).unwrap();
    let err = again.into_result(at("E5")).unwrap_err();
    assert_eq!(err, BoardError::AlreadyTargeted(at("E5")));
    assert_eq!(err.to_string(), "Already fired at E5");
}
