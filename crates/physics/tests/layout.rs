use approx::assert_relative_eq;
use physics::layout::initial_layout;
use physics::{Container, Entity, LayoutConfig};

fn skills(n: usize) -> Vec<Entity> {
    (0..n).map(|i| Entity::new(format!("tech-{i}"))).collect()
}

#[test]
fn grid_is_centred_and_wraps() {
    // 900 wide: pitch 142, six columns, 852 px of grid, 48 px left over.
    let container = Container::new(900.0, 650.0);
    let mut rng = fastrand::Rng::with_seed(9);
    let balls = initial_layout(&skills(8), &container, &LayoutConfig::default(), &mut rng).unwrap();

    let start_x = 24.0 + 15.0;
    assert_relative_eq!(balls[5].pos.x, start_x + 5.0 * 142.0);
    assert_relative_eq!(balls[0].pos.x, start_x);
    assert_relative_eq!(balls[1].pos.x, start_x + 142.0);
    assert_relative_eq!(balls[0].pos.y, 20.0);

    // Seventh ball starts the second row, back in the first column.
    assert_relative_eq!(balls[6].pos.x, start_x);
    assert_relative_eq!(balls[6].pos.y, 20.0 + 142.0);
}

#[test]
fn spawned_balls_do_not_overlap() {
    let container = Container::new(900.0, 650.0);
    let mut rng = fastrand::Rng::with_seed(2);
    let balls = initial_layout(&skills(12), &container, &LayoutConfig::default(), &mut rng).unwrap();
    for (i, a) in balls.iter().enumerate() {
        for b in &balls[i + 1..] {
            assert!(a.pos.distance(b.pos) >= container.ball_diameter, "{} overlaps {}", a.id, b.id);
        }
    }
}

#[test]
fn spawned_balls_start_above_the_floor_and_inside() {
    let container = Container::new(420.0, 650.0);
    let mut rng = fastrand::Rng::with_seed(5);
    let layout = LayoutConfig::default();
    let balls = initial_layout(&skills(10), &container, &layout, &mut rng).unwrap();
    for ball in &balls {
        assert!(container.contains(ball.pos), "{ball:?}");
        assert!(ball.pos.x >= layout.wall_inset);
        assert!(ball.pos.x <= container.max_x() - layout.wall_inset);
    }
}

#[test]
fn initial_motion_is_a_small_horizontal_jitter() {
    let container = Container::new(900.0, 650.0);
    let mut rng = fastrand::Rng::with_seed(11);
    let layout = LayoutConfig::default();
    let balls = initial_layout(&skills(30), &container, &layout, &mut rng).unwrap();
    for ball in &balls {
        assert!(ball.vel.x.abs() <= layout.jitter);
        assert_eq!(ball.vel.y, 0.0);
        assert!(!ball.is_settled);
        assert!(!ball.is_dragging);
    }
}

#[test]
fn very_narrow_container_still_lays_out() {
    let container = Container::new(60.0, 650.0);
    let mut rng = fastrand::Rng::with_seed(1);
    let balls = initial_layout(&skills(3), &container, &LayoutConfig::default(), &mut rng).unwrap();
    assert_eq!(balls.len(), 3);
    for ball in &balls {
        assert_eq!(ball.pos.x, 0.0);
        assert!(container.contains(ball.pos));
    }
}

#[test]
fn zero_width_produces_nothing() {
    let mut rng = fastrand::Rng::with_seed(1);
    let layout = LayoutConfig::default();
    assert!(initial_layout(&skills(3), &Container::new(0.0, 650.0), &layout, &mut rng).is_none());
}

#[test]
fn empty_entity_list_is_an_empty_layout() {
    let mut rng = fastrand::Rng::with_seed(1);
    let balls = initial_layout(&[], &Container::new(900.0, 650.0), &LayoutConfig::default(), &mut rng);
    assert_eq!(balls, Some(Vec::new()));
}
