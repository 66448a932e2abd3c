//! # Collision Detection and Response
//!
//! Ball-to-ball contacts are found by testing every pair (see
//! [`broad_phase`]) and resolved with a positional split followed by an
//! impulse along the line of centers. The pass runs after integration so it
//! sees the positions the frame actually produced.

mod ball_ball;
mod broad_phase;

pub use ball_ball::*;
pub use broad_phase::*;

use crate::config::SimulationConfig;
use crate::simulation::StepReport;
use crate::types::{Ball, Container, Vec2};

/// Contact information for a single overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from ball A to ball B.
    pub normal: Vec2,
    /// Current center distance.
    pub distance: f64,
    /// How far the pair must move apart to stop overlapping.
    pub overlap: f64,
}

/// Detect and resolve every overlapping pair, in pair order.
///
/// Pairs are visited as `(0,1), (0,2), ..., (1,2), ...`, so the result is
/// deterministic for a given ball ordering.
pub fn resolve_ball_collisions(
    balls: &mut [Ball],
    container: &Container,
    config: &SimulationConfig,
    report: &mut StepReport,
) {
    for (i, j) in candidate_pairs(balls.len()) {
        let (head, tail) = balls.split_at_mut(j);
        let (a, b) = (&mut head[i], &mut tail[0]);
        if let Some(contact) = detect_ball_collision(a, b, config.min_collision_distance) {
            resolve_ball_collision(a, b, &contact, container, config.restitution);
            report.collisions += 1;
        }
    }
}
