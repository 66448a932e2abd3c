//! # Simulation Core
//!
//! [`BallSim`] is the one owned simulation instance a host view holds. It
//! bundles the ball list, the container it was laid out for, the tuning and
//! the drag book-keeping, and exposes the whole control surface:
//! initialize, step, and the three drag calls.
//!
//! The host serializes calls (frame callback and pointer events run on the
//! same thread), so nothing here is shared or locked.

use crate::collision::resolve_ball_collisions;
use crate::config::{DragConfig, LayoutConfig, SimulationConfig};
use crate::error::PhysicsError;
use crate::integrator::integrate_balls;
use crate::interaction::DragController;
use crate::layout::initial_layout;
use crate::types::{Ball, Container, Entity, Vec2};

/// What happened during one [`BallSim::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Balls advanced by the integrator.
    pub moved: usize,
    /// Side-wall and ceiling impacts.
    pub wall_bounces: usize,
    pub floor_bounces: usize,
    /// Balls that came to rest this step.
    pub settled: usize,
    /// Overlapping pairs resolved.
    pub collisions: usize,
}

impl StepReport {
    /// Nothing moved and nothing touched.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.moved == 0 && self.collisions == 0
    }
}

/// Main simulation container
#[derive(Debug)]
pub struct BallSim {
    balls: Vec<Ball>,
    container: Option<Container>,
    config: SimulationConfig,
    layout: LayoutConfig,
    drag: DragController,
    rng: fastrand::Rng,
}

impl BallSim {
    /// Create an empty simulation with randomly seeded spawn jitter.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Create an empty simulation whose spawn jitter is reproducible.
    #[must_use]
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: SimulationConfig, rng: fastrand::Rng) -> Self {
        Self {
            balls: Vec::new(),
            container: None,
            config,
            layout: LayoutConfig::default(),
            drag: DragController::default(),
            rng,
        }
    }

    #[must_use]
    pub fn with_drag_config(mut self, drag: DragConfig) -> Self {
        self.drag = DragController::new(drag);
        self
    }

    #[must_use]
    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Lay out one ball per entity inside a `width` x `height` container with
    /// the default ball size.
    ///
    /// See [`initialize_in`](Self::initialize_in).
    pub fn initialize(&mut self, entities: &[Entity], width: f64, height: f64) -> bool {
        self.initialize_in(entities, Container::new(width, height))
    }

    /// Replace the whole ball set with a fresh layout.
    ///
    /// Returns `false` and leaves the current state untouched if the
    /// container is not measurable yet; the caller should retry once it is.
    pub fn initialize_in(&mut self, entities: &[Entity], container: Container) -> bool {
        let Some(balls) = initial_layout(entities, &container, &self.layout, &mut self.rng) else {
            return false;
        };
        self.balls = balls;
        self.container = Some(container);
        self.drag.clear();
        tracing::debug!(
            balls = self.balls.len(),
            width = container.width,
            height = container.height,
            "simulation initialized"
        );
        true
    }

    /// Replace the ball set with explicit states, e.g. a saved scenario.
    ///
    /// Positions are clamped into `container`.
    pub fn load(&mut self, balls: Vec<Ball>, container: Container) {
        self.balls = balls
            .into_iter()
            .map(|mut ball| {
                ball.pos = container.clamp(ball.pos);
                ball
            })
            .collect();
        self.container = Some(container);
        self.drag.clear();
    }

    /// Drop every ball. Used when the host view goes away.
    pub fn clear(&mut self) {
        self.balls.clear();
        self.container = None;
        self.drag.clear();
    }

    /// Advance the simulation by one frame scaled by `delta_scale`.
    ///
    /// Free balls are integrated first, then every overlapping pair is
    /// resolved. Held balls only ever move through
    /// [`update_drag`](Self::update_drag).
    pub fn step(&mut self, delta_scale: f64) -> StepReport {
        let mut report = StepReport::default();
        let Some(container) = self.container else {
            return report;
        };

        integrate_balls(&mut self.balls, &container, &self.config, delta_scale, &mut report);
        resolve_ball_collisions(&mut self.balls, &container, &self.config, &mut report);

        tracing::trace!(?report, "step complete");
        report
    }

    /// Run `steps` canonical frames.
    pub fn run(&mut self, steps: usize) -> StepReport {
        let mut total = StepReport::default();
        for _ in 0..steps {
            let report = self.step(1.0);
            total.moved += report.moved;
            total.wall_bounces += report.wall_bounces;
            total.floor_bounces += report.floor_bounces;
            total.settled += report.settled;
            total.collisions += report.collisions;
        }
        total
    }

    /// Grab a ball with the pointer.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBall`] if `id` is not in the simulation.
    pub fn begin_drag(&mut self, id: &str, anchor: Vec2) -> Result<(), PhysicsError> {
        let index = self.index_of(id)?;
        self.drag.begin(&mut self.balls[index], anchor);
        Ok(())
    }

    /// Grab a ball at its current position.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBall`] if `id` is not in the simulation.
    pub fn begin_drag_in_place(&mut self, id: &str) -> Result<(), PhysicsError> {
        let index = self.index_of(id)?;
        let anchor = self.balls[index].pos;
        self.drag.begin(&mut self.balls[index], anchor);
        Ok(())
    }

    /// Move a held ball to its anchor plus the cumulative pointer movement.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBall`] for an unknown id,
    /// [`PhysicsError::NotDragging`] if the ball is not held.
    pub fn update_drag(&mut self, id: &str, displacement: Vec2) -> Result<(), PhysicsError> {
        let index = self.index_of(id)?;
        let container = self.container.unwrap_or(Container::new(0.0, 0.0));
        self.drag.update(&mut self.balls[index], displacement, &container)
    }

    /// Release a held ball and throw it with the gesture's net movement.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBall`] for an unknown id,
    /// [`PhysicsError::NotDragging`] if the ball is not held.
    pub fn end_drag(&mut self, id: &str, dx: f64, dy: f64) -> Result<Vec2, PhysicsError> {
        let index = self.index_of(id)?;
        self.drag.end(&mut self.balls[index], dx, dy)
    }

    #[must_use]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[must_use]
    pub fn ball(&self, id: &str) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replace the tuning. Takes effect from the next step.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config;
    }

    /// Replace the drag tuning. Gestures in progress are dropped.
    pub fn set_drag_config(&mut self, drag: DragConfig) {
        for ball in &mut self.balls {
            ball.is_dragging = false;
        }
        self.drag = DragController::new(drag);
    }

    #[must_use]
    pub fn drag_config(&self) -> &DragConfig {
        self.drag.config()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.container.is_some()
    }

    /// Every ball is resting and nobody is holding one.
    #[must_use]
    pub fn all_settled(&self) -> bool {
        self.balls.iter().all(|b| b.is_settled && !b.is_dragging)
    }

    fn index_of(&self, id: &str) -> Result<usize, PhysicsError> {
        self.balls
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| PhysicsError::UnknownBall(id.to_owned()))
    }
}

impl Default for BallSim {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
