use approx::assert_relative_eq;
use physics::collision::resolve_ball_collisions;
use physics::{Ball, BallSim, Container, SimulationConfig, StepReport, Vec2};

fn container() -> Container {
    Container::new(900.0, 650.0)
}

#[test]
fn resting_pair_at_half_distance_is_pushed_to_contact() {
    let config = SimulationConfig::weightless();
    let min = config.min_collision_distance;
    let mut sim = BallSim::with_seed(config, 0);
    sim.load(
        vec![
            Ball::new("a", Vec2::new(300.0, 200.0), Vec2::ZERO),
            Ball::new("b", Vec2::new(300.0 + 0.5 * min, 200.0), Vec2::ZERO),
        ],
        container(),
    );

    let report = sim.step(1.0);
    assert_eq!(report.collisions, 1);

    let a = sim.ball("a").unwrap();
    let b = sim.ball("b").unwrap();
    assert_relative_eq!(a.pos.distance(b.pos), min, epsilon = 1e-9);
    assert!(container().contains(a.pos));
    assert!(container().contains(b.pos));
    // At rest means no impulse.
    assert_eq!(a.vel, Vec2::ZERO);
    assert_eq!(b.vel, Vec2::ZERO);
}

#[test]
fn overlapping_pairs_end_at_least_min_distance_apart() {
    let config = SimulationConfig::default();
    let min = config.min_collision_distance;
    let mut rng = fastrand::Rng::with_seed(2024);

    for _ in 0..500 {
        let a = Vec2::new(200.0 + rng.f64() * 300.0, 150.0 + rng.f64() * 200.0);
        let angle = rng.f64() * std::f64::consts::TAU;
        let gap = 0.01 + rng.f64() * (min - 0.02);
        let b = a + Vec2::new(angle.cos(), angle.sin()) * gap;
        let mut balls = vec![
            Ball::new("a", a, Vec2::new(rng.f64() * 8.0 - 4.0, rng.f64() * 8.0 - 4.0)),
            Ball::new("b", b, Vec2::new(rng.f64() * 8.0 - 4.0, rng.f64() * 8.0 - 4.0)),
        ];

        let mut report = StepReport::default();
        resolve_ball_collisions(&mut balls, &container(), &config, &mut report);

        assert_eq!(report.collisions, 1);
        let distance = balls[0].pos.distance(balls[1].pos);
        assert!(distance >= min - 1e-9, "distance {distance} < {min}");
    }
}

#[test]
fn approaching_pair_exchanges_momentum_symmetrically() {
    let config = SimulationConfig::weightless();
    let mut balls = vec![
        Ball::new("a", Vec2::new(300.0, 200.0), Vec2::new(3.0, 0.0)),
        Ball::new("b", Vec2::new(380.0, 200.0), Vec2::new(-1.0, 0.0)),
    ];
    let momentum_before = balls[0].vel + balls[1].vel;

    resolve_ball_collisions(&mut balls, &container(), &config, &mut StepReport::default());

    let momentum_after = balls[0].vel + balls[1].vel;
    assert_relative_eq!(momentum_before.x, momentum_after.x, epsilon = 1e-12);
    // Closing speed 4 comes back as 4 * restitution.
    assert_relative_eq!(balls[1].vel.x - balls[0].vel.x, 4.0 * config.restitution, epsilon = 1e-12);
}

#[test]
fn coincident_balls_are_left_alone() {
    let config = SimulationConfig::weightless();
    let mut balls = vec![
        Ball::new("a", Vec2::new(300.0, 200.0), Vec2::ZERO),
        Ball::new("b", Vec2::new(300.0, 200.0), Vec2::ZERO),
    ];
    let mut report = StepReport::default();
    resolve_ball_collisions(&mut balls, &container(), &config, &mut report);
    assert_eq!(report.collisions, 0);
    assert_eq!(balls[0].pos, balls[1].pos);
}

#[test]
fn separation_never_leaves_the_container() {
    let config = SimulationConfig::weightless();
    let c = container();
    // Jammed into the bottom-left corner.
    let mut balls = vec![
        Ball::new("a", Vec2::new(0.0, c.max_y()), Vec2::new(-2.0, 2.0)),
        Ball::new("b", Vec2::new(10.0, c.max_y() - 10.0), Vec2::new(-4.0, 4.0)),
    ];
    resolve_ball_collisions(&mut balls, &c, &config, &mut StepReport::default());
    for ball in &balls {
        assert!(c.contains(ball.pos), "{ball:?}");
    }
}

#[test]
fn struck_settled_ball_resumes() {
    let config = SimulationConfig::default();
    let c = container();
    let mut resting = Ball::new("rest", Vec2::new(400.0, c.max_y()), Vec2::ZERO);
    resting.is_settled = true;
    let falling = Ball::new("fall", Vec2::new(430.0, c.max_y() - 120.0), Vec2::new(0.0, 12.0));

    let mut sim = BallSim::with_seed(config, 0);
    sim.load(vec![resting, falling], c);
    let mut woke = false;
    for _ in 0..10 {
        sim.step(1.0);
        if !sim.ball("rest").unwrap().is_settled {
            woke = true;
            break;
        }
    }
    assert!(woke);
}

#[test]
fn pair_order_is_deterministic() {
    let config = SimulationConfig::weightless();
    let cluster = || {
        vec![
            Ball::new("a", Vec2::new(300.0, 200.0), Vec2::new(1.0, 0.0)),
            Ball::new("b", Vec2::new(340.0, 210.0), Vec2::new(0.0, -1.0)),
            Ball::new("c", Vec2::new(320.0, 250.0), Vec2::new(-1.0, 0.5)),
        ]
    };
    let mut first = cluster();
    let mut second = cluster();
    resolve_ball_collisions(&mut first, &container(), &config, &mut StepReport::default());
    resolve_ball_collisions(&mut second, &container(), &config, &mut StepReport::default());
    assert_eq!(first, second);
}
