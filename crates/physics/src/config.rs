//! # Simulation Tuning
//!
//! Every constant the simulation uses lives in one of the structs below so a
//! host (or a test) can override it precisely. The defaults reproduce the
//! feel of the skills view: quick falls, a soft 70% bounce and badges that
//! come to rest in a second or two.
//!
//! Values are not validated. Negative or zero coefficients are a caller
//! error and simply produce odd motion.

use crate::types::DEFAULT_BALL_DIAMETER;

/// Physics constants for [`crate::integrator`] and [`crate::collision`].
///
/// All rates are expressed per canonical frame (`delta_scale == 1.0`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Downward acceleration added to `vy` every frame.
    pub gravity: f64,
    /// Fraction of velocity kept (sign-flipped) on wall, floor or ceiling impact.
    pub bounce_coefficient: f64,
    /// Per-step velocity multiplier applied to every moving ball.
    pub friction: f64,
    /// Both axes must be below this after a floor bounce for the ball to settle.
    pub settle_velocity_threshold: f64,
    /// Center-to-center distance under which two balls overlap.
    pub min_collision_distance: f64,
    /// Ball-to-ball restitution, kept a little below `bounce_coefficient`.
    pub restitution: f64,
    /// Downward `vy` a ball leaves the ceiling with, unless the rebound
    /// still points up faster than this.
    pub ceiling_nudge: f64,
    /// Extra `vx` decay applied at the moment a ball settles.
    pub settle_friction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let bounce_coefficient = 0.7;
        Self {
            gravity: 0.4,
            bounce_coefficient,
            friction: 0.98,
            settle_velocity_threshold: 0.1,
            min_collision_distance: DEFAULT_BALL_DIAMETER * 0.85,
            restitution: bounce_coefficient * 0.8,
            ceiling_nudge: 0.5,
            settle_friction: 0.9,
        }
    }
}

impl SimulationConfig {
    /// Same tuning, no gravity. Handy for collision-only setups.
    #[must_use]
    pub fn weightless() -> Self {
        Self {
            gravity: 0.0,
            ..Self::default()
        }
    }
}

/// How a pointer release turns into a throw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Velocity per pixel of net drag displacement.
    pub release_gain: f64,
    /// Per-axis cap on the release velocity.
    pub max_velocity: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            release_gain: 0.15,
            max_velocity: 8.0,
        }
    }
}

/// Grid placement used by [`crate::layout::initial_layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Gap added to the ball diameter to get the column pitch.
    pub spacing_margin: f64,
    /// Width subtracted from the container before counting columns.
    pub side_margin: f64,
    /// y of the first row.
    pub top_offset: f64,
    /// Minimum gap kept between a ball and the side walls at spawn.
    pub wall_inset: f64,
    /// Row pitch. `None` uses the column pitch so rows never overlap.
    pub row_spacing: Option<f64>,
    /// Initial `vx` is drawn uniformly from `[-jitter, jitter)`.
    pub jitter: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing_margin: 30.0,
            side_margin: 40.0,
            top_offset: 20.0,
            wall_inset: 15.0,
            row_spacing: None,
            jitter: 0.25,
        }
    }
}
