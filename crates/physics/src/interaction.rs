//! # Pointer Interaction
//!
//! Turns a drag gesture into ball state changes. Each ball moves through a
//! small state machine that sits alongside the settle flag:
//!
//! ```text
//! FREE ──begin──▶ HELD ──end──▶ FREE (unsettled)
//! FREE ──settle──▶ SETTLED ──collision / begin──▶ FREE / HELD
//! ```
//!
//! While HELD, the pointer alone positions the ball; the integrator skips it
//! and the collision pass treats it as an immovable obstacle.

use std::collections::HashMap;

use crate::config::DragConfig;
use crate::error::PhysicsError;
use crate::types::{Ball, Container, Vec2};

/// Book-keeping for one active gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Ball position when the gesture started.
    pub anchor: Vec2,
    /// Cumulative pointer movement since the gesture started.
    pub displacement: Vec2,
}

#[derive(Debug, Default)]
pub struct DragController {
    config: DragConfig,
    sessions: HashMap<String, DragSession>,
}

impl DragController {
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Forget every gesture, e.g. when the ball set is rebuilt.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    /// Grab `ball`. Residual velocity is dropped so it does not fight the grip.
    ///
    /// Starting a new gesture on a held ball re-anchors it.
    pub fn begin(&mut self, ball: &mut Ball, anchor: Vec2) {
        ball.is_dragging = true;
        ball.is_settled = false;
        ball.vel = Vec2::ZERO;
        self.sessions.insert(
            ball.id.clone(),
            DragSession {
                anchor,
                displacement: Vec2::ZERO,
            },
        );
        tracing::debug!(id = %ball.id, x = anchor.x, y = anchor.y, "drag started");
    }

    /// Move a held ball to `anchor + displacement`, kept inside the container.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::NotDragging`] if no gesture is active for `ball`.
    pub fn update(
        &mut self,
        ball: &mut Ball,
        displacement: Vec2,
        container: &Container,
    ) -> Result<(), PhysicsError> {
        let session = self
            .sessions
            .get_mut(&ball.id)
            .ok_or_else(|| PhysicsError::NotDragging(ball.id.clone()))?;
        session.displacement = displacement;
        ball.pos = container.clamp(session.anchor + displacement);
        Ok(())
    }

    /// Let go of a held ball and throw it with the gesture's net movement.
    ///
    /// Returns the release velocity.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::NotDragging`] if no gesture is active for `ball`.
    pub fn end(&mut self, ball: &mut Ball, dx: f64, dy: f64) -> Result<Vec2, PhysicsError> {
        self.sessions
            .remove(&ball.id)
            .ok_or_else(|| PhysicsError::NotDragging(ball.id.clone()))?;
        ball.is_dragging = false;
        ball.is_settled = false;
        ball.vel = release_velocity(dx, dy, &self.config);
        tracing::debug!(id = %ball.id, vx = ball.vel.x, vy = ball.vel.y, "drag released");
        Ok(ball.vel)
    }
}

/// `clamp(d * release_gain, -max_velocity, max_velocity)` per axis.
///
/// Non-finite displacements produce no throw.
#[must_use]
pub fn release_velocity(dx: f64, dy: f64, config: &DragConfig) -> Vec2 {
    let axis = |d: f64| {
        let v = d * config.release_gain;
        if v.is_finite() {
            v.min(config.max_velocity).max(-config.max_velocity)
        } else {
            0.0
        }
    };
    Vec2::new(axis(dx), axis(dy))
}
