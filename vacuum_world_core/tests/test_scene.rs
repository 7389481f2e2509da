use vacuum_world_core::scene::{
    CELL_SIZE, Scene, action_label, floor_cells, percept_label, robot_sprite,
};
use vacuum_world_core::world::{Action, NUM_FLOORS, Percept, World};

#[test]
fn test_floor_cells_use_the_two_column_layout() {
    let world = World::new(NUM_FLOORS);

    let cells = floor_cells(&world);
    let positions: Vec<(f64, f64)> = cells.iter().map(|cell| (cell.x, cell.y)).collect();

    assert_eq!(
        positions,
        vec![(150.0, 225.0), (150.0, 450.0), (450.0, 225.0), (450.0, 450.0)]
    );
    for cell in &cells {
        assert_eq!(cell.width, CELL_SIZE);
        assert_eq!(cell.height, CELL_SIZE / 4.0);
    }
}

#[test]
fn test_floor_cells_mirror_dirt() {
    let mut world = World::new(NUM_FLOORS);
    world.mark_dirty_floor(0).unwrap();
    world.mark_dirty_floor(3).unwrap();

    let cells = floor_cells(&world);
    let dirty: Vec<bool> = cells.iter().map(|cell| cell.dirty).collect();

    assert_eq!(dirty, vec![true, false, false, true]);
}

#[test]
fn test_robot_hovers_over_its_column() {
    // Move the robot to each location and check the circle center.
    let cases = [
        (Action::Up, (200.0, 150.0)),    // location 0, left column, top row
        (Action::Left, (200.0, 375.0)),  // location 1, left column, bottom row
        (Action::Right, (500.0, 150.0)), // location 2, right column, top row
        (Action::Down, (500.0, 375.0)),  // location 3, right column, bottom row
    ];

    for (action, (cx, cy)) in cases {
        let mut world = World::new(NUM_FLOORS);
        world.simulate(action);

        let robot = robot_sprite(&world);
        assert_eq!((robot.cx, robot.cy), (cx, cy), "{action:?}");
        assert_eq!(robot.radius, CELL_SIZE / 2.0);
    }
}

#[test]
fn test_percept_labels() {
    assert_eq!(percept_label(None), "");
    assert_eq!(
        percept_label(Some(Percept {
            location: 0,
            dirty: true
        })),
        "It's dirty"
    );
    assert_eq!(
        percept_label(Some(Percept {
            location: 0,
            dirty: false
        })),
        "It's clean"
    );
}

#[test]
fn test_action_labels() {
    assert_eq!(action_label(None), "Waiting");
    assert_eq!(action_label(Some(Action::Wait)), "Waiting");
    assert_eq!(action_label(Some(Action::Suck)), "Vacuuming");
    assert_eq!(action_label(Some(Action::Up)), "Going up");
    assert_eq!(action_label(Some(Action::Down)), "Going down");
    assert_eq!(action_label(Some(Action::Left)), "Going left");
    assert_eq!(action_label(Some(Action::Right)), "Going right");
}

#[test]
fn test_snapshot_bundles_the_frame() {
    let mut world = World::new(NUM_FLOORS);
    world.mark_dirty_floor(1).unwrap();
    let percept = world.percept();

    let scene = Scene::snapshot(&world, Some(percept), Some(Action::Suck));

    assert_eq!(scene.floors, floor_cells(&world));
    assert_eq!(scene.robot, robot_sprite(&world));
    assert_eq!(scene.percept_label, "It's dirty");
    assert_eq!(scene.action_label, "Vacuuming");
}
