//! # Physics Integration
//!
//! Advances every free ball by one frame: gravity, explicit Euler
//! integration, boundary bounces, settle detection and friction, in that
//! order. Dragging and settled balls are not touched here at all.
//!
//! `delta_scale` normalizes frame time so that one canonical frame (about
//! 16.67 ms) equals `1.0`; see [`crate::clock::FrameClock`].

use crate::config::SimulationConfig;
use crate::simulation::StepReport;
use crate::types::{Ball, Container};

/// Integrate all free balls in place.
pub fn integrate_balls(
    balls: &mut [Ball],
    container: &Container,
    config: &SimulationConfig,
    delta_scale: f64,
    report: &mut StepReport,
) {
    for ball in balls.iter_mut().filter(|b| b.is_free()) {
        integrate_ball(ball, container, config, delta_scale, report);
        report.moved += 1;
    }
}

/// One ball, one frame.
pub fn integrate_ball(
    ball: &mut Ball,
    container: &Container,
    config: &SimulationConfig,
    delta_scale: f64,
    report: &mut StepReport,
) {
    ball.vel.y += config.gravity * delta_scale;

    ball.pos.x += ball.vel.x * delta_scale;
    ball.pos.y += ball.vel.y * delta_scale;

    let max_x = container.max_x();
    if ball.pos.x <= 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x = -ball.vel.x * config.bounce_coefficient;
        report.wall_bounces += 1;
    } else if ball.pos.x >= max_x {
        ball.pos.x = max_x;
        ball.vel.x = -ball.vel.x * config.bounce_coefficient;
        report.wall_bounces += 1;
    }

    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y * config.bounce_coefficient;
        // Anything short of a firm upward push leaves the ball drifting down.
        if ball.vel.y > -config.ceiling_nudge {
            ball.vel.y = config.ceiling_nudge;
        }
        report.wall_bounces += 1;
    }

    let floor = container.max_y();
    if ball.pos.y >= floor {
        ball.pos.y = floor;
        ball.vel.y = -ball.vel.y * config.bounce_coefficient;
        report.floor_bounces += 1;

        let threshold = config.settle_velocity_threshold;
        if ball.vel.y.abs() < threshold && ball.vel.x.abs() < threshold {
            ball.vel.y = 0.0;
            ball.vel.x *= config.settle_friction;
            ball.is_settled = true;
            report.settled += 1;
            tracing::trace!(id = %ball.id, "ball settled");
        }
    }

    ball.vel *= config.friction;

    contain(ball, container);
}

/// Final safety net: keep the ball inside the container and drop velocity
/// components that are no longer finite.
fn contain(ball: &mut Ball, container: &Container) {
    if !ball.vel.x.is_finite() {
        ball.vel.x = 0.0;
    }
    if !ball.vel.y.is_finite() {
        ball.vel.y = 0.0;
    }
    ball.pos = container.clamp(ball.pos);
}
