use approx::assert_relative_eq;
use physics::{Ball, BallSim, Container, SimulationConfig, Vec2};

/// Floor line at y = 500 with the default badge size.
fn tall_container() -> Container {
    Container::new(900.0, 500.0 + 112.0 + 25.0)
}

fn frictionless() -> SimulationConfig {
    SimulationConfig {
        friction: 1.0,
        ..SimulationConfig::default()
    }
}

fn single(ball: Ball, config: SimulationConfig) -> BallSim {
    let mut sim = BallSim::with_seed(config, 0);
    sim.load(vec![ball], tall_container());
    sim
}

#[test]
fn left_wall_rebound_keeps_bounce_fraction() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("a", Vec2::new(5.0, 200.0), Vec2::new(-10.0, 0.0)), config);
    let report = sim.step(1.0);
    let ball = sim.ball("a").unwrap();
    assert_eq!(report.wall_bounces, 1);
    assert_eq!(ball.pos.x, 0.0);
    assert_relative_eq!(ball.vel.x, 10.0 * config.bounce_coefficient);
    assert!(ball.vel.x < 10.0);
}

#[test]
fn right_wall_rebound_keeps_bounce_fraction() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("a", Vec2::new(780.0, 200.0), Vec2::new(12.0, 0.0)), config);
    sim.step(1.0);
    let ball = sim.ball("a").unwrap();
    assert_eq!(ball.pos.x, 788.0);
    assert_relative_eq!(ball.vel.x, -12.0 * config.bounce_coefficient);
}

#[test]
fn floor_rebound_keeps_bounce_fraction() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("a", Vec2::new(300.0, 495.0), Vec2::new(0.0, 10.0)), config);
    let report = sim.step(1.0);
    let ball = sim.ball("a").unwrap();
    assert_eq!(report.floor_bounces, 1);
    assert_eq!(ball.pos.y, 500.0);
    assert_relative_eq!(ball.vel.y, -7.0);
    assert!(!ball.is_settled);
}

#[test]
fn friction_applies_after_the_bounce() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..SimulationConfig::default()
    };
    let mut sim = single(Ball::new("a", Vec2::new(300.0, 495.0), Vec2::new(0.0, 10.0)), config);
    sim.step(1.0);
    assert_relative_eq!(sim.ball("a").unwrap().vel.y, -7.0 * 0.98, epsilon = 1e-12);
}

#[test]
fn dropped_ball_bounces_then_settles() {
    // Friction is off here. With the default 0.98 this drop ends in a small
    // floor cycle (|vy| about 0.16) and never settles.
    let config = frictionless();
    let mut sim = single(Ball::new("drop", Vec2::new(300.0, 0.0), Vec2::ZERO), config);

    // Fall to the first floor contact.
    let mut checked_first_bounce = false;
    for _ in 0..200 {
        let before = sim.ball("drop").unwrap().vel.y;
        let report = sim.step(1.0);
        if report.floor_bounces > 0 {
            let impact = before + config.gravity;
            let after = sim.ball("drop").unwrap().vel.y;
            assert!(impact > 0.0);
            assert_relative_eq!(after, -impact * config.bounce_coefficient);
            checked_first_bounce = true;
            break;
        }
    }
    assert!(checked_first_bounce, "ball never reached the floor");

    // Geometric decay ends in a settled ball.
    let mut steps = 0;
    while !sim.ball("drop").unwrap().is_settled {
        sim.step(1.0);
        steps += 1;
        assert!(steps < 400, "ball did not settle");
    }
    let ball = sim.ball("drop").unwrap();
    assert_eq!(ball.pos.y, 500.0);
    assert_eq!(ball.vel.y, 0.0);
    assert!(sim.all_settled());
}

#[test]
fn settled_ball_stays_put() {
    let mut sim = single(Ball::new("drop", Vec2::new(300.0, 0.0), Vec2::ZERO), frictionless());
    for _ in 0..600 {
        sim.step(1.0);
        if sim.ball("drop").unwrap().is_settled {
            break;
        }
    }
    let rested = sim.ball("drop").unwrap().clone();
    assert!(rested.is_settled);

    for _ in 0..100 {
        let report = sim.step(1.0);
        assert!(report.is_idle());
    }
    assert_eq!(sim.ball("drop").unwrap(), &rested);
}

#[test]
fn settling_requires_slow_horizontal_motion_too() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("roll", Vec2::new(300.0, 499.99), Vec2::new(3.0, 0.05)), config);
    sim.step(1.0);
    assert!(!sim.ball("roll").unwrap().is_settled);
}

#[test]
fn slow_floor_contact_settles_and_damps_vx() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("rest", Vec2::new(300.0, 499.99), Vec2::new(0.05, 0.05)), config);
    let report = sim.step(1.0);
    let ball = sim.ball("rest").unwrap();
    assert_eq!(report.settled, 1);
    assert!(ball.is_settled);
    assert_eq!(ball.vel.y, 0.0);
    assert_relative_eq!(ball.vel.x, 0.05 * config.settle_friction);
}

#[test]
fn ceiling_does_not_hold_a_ball() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("up", Vec2::new(300.0, 1.0), Vec2::new(0.0, -1.2)), config);
    sim.step(1.0);
    let ball = sim.ball("up").unwrap();
    assert_eq!(ball.pos.y, 0.0);
    assert_relative_eq!(ball.vel.y, config.ceiling_nudge);
    sim.step(1.0);
    assert!(sim.ball("up").unwrap().pos.y > 0.0);
}

#[test]
fn ball_thrown_into_ceiling_stops_there() {
    let config = SimulationConfig {
        gravity: 0.0,
        ..frictionless()
    };
    let mut sim = single(Ball::new("throw", Vec2::new(300.0, 5.0), Vec2::new(0.0, -10.0)), config);
    let report = sim.step(1.0);
    let ball = sim.ball("throw").unwrap();
    assert_eq!(report.wall_bounces, 1);
    assert_eq!(ball.pos.y, 0.0);
    assert_relative_eq!(ball.vel.y, config.ceiling_nudge);
}

#[test]
fn default_friction_drop_can_keep_bouncing() {
    let mut sim = single(Ball::new("drop", Vec2::new(300.0, 0.0), Vec2::ZERO), SimulationConfig::default());
    sim.run(5000);
    let ball = sim.ball("drop").unwrap();
    assert!(!ball.is_settled);
    assert!(ball.vel.y.abs() > SimulationConfig::default().settle_velocity_threshold);
}
