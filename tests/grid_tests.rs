use std::cell::Cell;
use std::rc::Rc;

use seabattle::{
    AttackOutcome, GridConfig, GridError, Heading, PlacementError, SeaGrid, ShipKind, TileView,
};

fn grid() -> SeaGrid {
    SeaGrid::new(GridConfig::default())
}

fn counter(grid: &mut SeaGrid) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    grid.on_changed(move || seen.set(seen.get() + 1));
    count
}

#[test]
fn destroyer_sinks_on_third_hit() {
    let mut grid = grid();
    grid.move_ship(0, 0, ShipKind::Destroyer, Heading::LeftRight)
        .unwrap();
    assert_eq!(
        grid.ship(ShipKind::Destroyer).tiles(),
        &[(0, 0), (0, 1), (0, 2)]
    );

    let first = grid.hit_tile(0, 0).unwrap();
    assert_eq!(first.outcome(), AttackOutcome::Hit);
    assert_eq!(first.ship(), Some(ShipKind::Destroyer));
    assert_eq!(grid.hit_tile(0, 1).unwrap().outcome(), AttackOutcome::Hit);
    let last = grid.hit_tile(0, 2).unwrap();
    assert_eq!(last.outcome(), AttackOutcome::Destroyed);
    assert_eq!(last.ship(), Some(ShipKind::Destroyer));
    assert_eq!(grid.ships_killed(), 1);
    assert!(grid.ship(ShipKind::Destroyer).is_sunk());
}

#[test]
fn miss_then_already_shot() {
    let mut grid = grid();
    let first = grid.hit_tile(5, 5).unwrap();
    assert_eq!(first.outcome(), AttackOutcome::Miss);
    assert_eq!(first.ship(), None);
    assert_eq!((first.row(), first.col()), (5, 5));
    assert_eq!(
        grid.hit_tile(5, 5).unwrap().outcome(),
        AttackOutcome::AlreadyShot
    );
    assert_eq!(grid.tile(5, 5).unwrap(), TileView::Miss);
}

#[test]
fn sunk_ship_is_counted_once() {
    let mut grid = grid();
    grid.move_ship(4, 4, ShipKind::Tug, Heading::UpDown).unwrap();
    assert_eq!(
        grid.hit_tile(4, 4).unwrap().outcome(),
        AttackOutcome::Destroyed
    );
    let again = grid.hit_tile(4, 4).unwrap();
    assert_eq!(again.outcome(), AttackOutcome::AlreadyShot);
    assert_eq!(again.ship(), None);
    assert_eq!(grid.ships_killed(), 1);
}

#[test]
fn attack_outside_grid_is_rejected() {
    let mut grid = grid();
    let changes = counter(&mut grid);
    assert_eq!(
        grid.hit_tile(10, 0).unwrap_err(),
        GridError::TileOutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        grid.hit_tile(0, 10).unwrap_err(),
        GridError::TileOutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(changes.get(), 0);
}

#[test]
fn placement_must_stay_on_grid() {
    let mut grid = grid();
    assert_eq!(
        grid.move_ship(0, 8, ShipKind::Destroyer, Heading::LeftRight),
        Err(PlacementError::ShipOutOfBounds)
    );
    assert_eq!(
        grid.move_ship(8, 0, ShipKind::Destroyer, Heading::UpDown),
        Err(PlacementError::ShipOutOfBounds)
    );
    assert_eq!(
        grid.move_ship(10, 0, ShipKind::Tug, Heading::UpDown),
        Err(PlacementError::ShipOutOfBounds)
    );
    assert!(!grid.ship(ShipKind::Destroyer).is_deployed());

    grid.move_ship(0, 7, ShipKind::Destroyer, Heading::LeftRight)
        .unwrap();
    grid.move_ship(5, 9, ShipKind::Submarine, Heading::UpDown)
        .unwrap();
    assert_eq!(grid.ships_deployed(), 2);
}

#[test]
fn overlapping_placement_is_rejected() {
    let mut grid = grid();
    grid.move_ship(2, 2, ShipKind::Battleship, Heading::LeftRight)
        .unwrap();
    assert_eq!(
        grid.move_ship(0, 3, ShipKind::Destroyer, Heading::UpDown),
        Err(PlacementError::ShipOverlaps(ShipKind::Battleship))
    );
    assert!(!grid.ship(ShipKind::Destroyer).is_deployed());
    assert_eq!(
        grid.ship(ShipKind::Battleship).tiles(),
        &[(2, 2), (2, 3), (2, 4), (2, 5)]
    );
}

#[test]
fn ship_can_slide_over_its_own_tiles() {
    let mut grid = grid();
    grid.move_ship(2, 2, ShipKind::Battleship, Heading::LeftRight)
        .unwrap();
    grid.move_ship(2, 3, ShipKind::Battleship, Heading::LeftRight)
        .unwrap();
    assert_eq!(grid.tile(2, 2).unwrap(), TileView::Sea);
    assert_eq!(grid.tile(2, 6).unwrap(), TileView::Ship);
    assert_eq!(grid.ship(ShipKind::Battleship).origin(), Some((2, 3)));
}

#[test]
fn failed_relocation_keeps_old_position() {
    let mut grid = grid();
    grid.move_ship(0, 0, ShipKind::Destroyer, Heading::LeftRight)
        .unwrap();
    grid.move_ship(5, 5, ShipKind::Battleship, Heading::UpDown)
        .unwrap();
    let changes = counter(&mut grid);

    assert_eq!(
        grid.move_ship(5, 4, ShipKind::Destroyer, Heading::LeftRight),
        Err(PlacementError::ShipOverlaps(ShipKind::Battleship))
    );
    assert_eq!(grid.ship(ShipKind::Destroyer).origin(), Some((0, 0)));
    assert_eq!(grid.tile(0, 0).unwrap(), TileView::Ship);
    assert_eq!(grid.tile(5, 4).unwrap(), TileView::Sea);
    assert_eq!(changes.get(), 0);
}

#[test]
fn all_deployed_once_every_ship_is_placed() {
    let mut grid = grid();
    for (row, kind) in ShipKind::ALL.iter().enumerate() {
        assert!(!grid.all_deployed());
        grid.move_ship(row, 0, *kind, Heading::LeftRight).unwrap();
    }
    assert!(grid.all_deployed());
    assert_eq!(grid.ships_deployed(), ShipKind::COUNT);
}

#[test]
fn owner_sees_ships_and_shots() {
    let mut grid = grid();
    grid.move_ship(1, 1, ShipKind::Submarine, Heading::UpDown)
        .unwrap();
    grid.hit_tile(1, 1).unwrap();
    grid.hit_tile(0, 0).unwrap();
    assert_eq!(grid.tile(1, 1).unwrap(), TileView::Hit);
    assert_eq!(grid.tile(2, 1).unwrap(), TileView::Ship);
    assert_eq!(grid.tile(0, 0).unwrap(), TileView::Miss);
    assert_eq!(grid.tile(9, 9).unwrap(), TileView::Sea);
    assert!(grid.tile(9, 10).is_err());
}

#[test]
fn listeners_fire_after_each_change() {
    let mut grid = grid();
    let changes = counter(&mut grid);
    grid.move_ship(0, 0, ShipKind::Tug, Heading::LeftRight)
        .unwrap();
    assert_eq!(changes.get(), 1);
    grid.hit_tile(3, 3).unwrap();
    assert_eq!(changes.get(), 2);
    grid.hit_tile(3, 3).unwrap();
    assert_eq!(changes.get(), 3);
    grid.hit_tile(0, 0).unwrap();
    assert_eq!(changes.get(), 4);
}

#[test]
fn grid_config_enforces_minimum_size() {
    assert_eq!(
        GridConfig::new(9, 12).unwrap_err(),
        GridError::GridTooSmall {
            width: 9,
            height: 12
        }
    );
    let config = GridConfig::new(11, 12).unwrap();
    let grid = SeaGrid::new(config);
    assert_eq!((grid.width(), grid.height()), (11, 12));
    assert!(grid.contains(11, 10));
    assert!(!grid.contains(10, 11));
}

#[test]
fn relocating_sunk_ship_restores_it() {
    let mut grid = grid();
    grid.move_ship(0, 0, ShipKind::Submarine, Heading::LeftRight)
        .unwrap();
    grid.hit_tile(0, 0).unwrap();
    assert_eq!(
        grid.hit_tile(0, 1).unwrap().outcome(),
        AttackOutcome::Destroyed
    );
    assert_eq!(grid.ships_killed(), 1);

    grid.move_ship(6, 6, ShipKind::Submarine, Heading::UpDown)
        .unwrap();
    assert_eq!(grid.ships_killed(), 0);
    let ship = grid.ship(ShipKind::Submarine);
    assert!(!ship.is_sunk());
    assert_eq!(ship.hits(), 0);
    assert_eq!(grid.tile(0, 0).unwrap(), TileView::Miss);
    assert_eq!(grid.tile(0, 1).unwrap(), TileView::Miss);

    grid.hit_tile(6, 6).unwrap();
    assert_eq!(
        grid.hit_tile(7, 6).unwrap().outcome(),
        AttackOutcome::Destroyed
    );
    assert_eq!(grid.ships_killed(), 1);
}

#[test]
fn ship_cannot_move_onto_shot_tile() {
    let mut grid = grid();
    assert_eq!(grid.hit_tile(5, 5).unwrap().outcome(), AttackOutcome::Miss);
    let changes = counter(&mut grid);

    assert_eq!(
        grid.move_ship(5, 5, ShipKind::Tug, Heading::UpDown),
        Err(PlacementError::TileAlreadyShot { row: 5, col: 5 })
    );
    assert_eq!(
        grid.move_ship(5, 3, ShipKind::Destroyer, Heading::LeftRight),
        Err(PlacementError::TileAlreadyShot { row: 5, col: 5 })
    );
    assert!(!grid.ship(ShipKind::Tug).is_deployed());
    assert_eq!(grid.tile(5, 5).unwrap(), TileView::Miss);
    assert_eq!(changes.get(), 0);
}

#[test]
fn damaged_ship_cannot_return_to_its_hit_tile() {
    let mut grid = grid();
    grid.move_ship(0, 0, ShipKind::Submarine, Heading::LeftRight)
        .unwrap();
    assert_eq!(grid.hit_tile(0, 0).unwrap().outcome(), AttackOutcome::Hit);

    assert_eq!(
        grid.move_ship(0, 0, ShipKind::Submarine, Heading::UpDown),
        Err(PlacementError::TileAlreadyShot { row: 0, col: 0 })
    );
    let ship = grid.ship(ShipKind::Submarine);
    assert_eq!(ship.tiles(), &[(0, 0), (0, 1)]);
    assert_eq!(ship.hits(), 1);

    assert_eq!(
        grid.hit_tile(0, 1).unwrap().outcome(),
        AttackOutcome::Destroyed
    );
    assert_eq!(grid.ships_killed(), 1);
}
