//! The host view: one board per mounted skills section.

use physics::clock::CANONICAL_FRAME_MS;
use physics::{
    BallSim, Container, DragConfig, Entity, FrameClock, PhysicsError, SimulationConfig, StepReport,
    Vec2,
};
use render::{RenderAdapter, VisualState};

/// Which view the board shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BoardMode {
    /// Static grid; no simulation runs.
    #[default]
    Grid,
    /// Falling, bouncing balls.
    Gravity,
}

impl BoardMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            BoardMode::Grid => BoardMode::Gravity,
            BoardMode::Gravity => BoardMode::Grid,
        }
    }
}

#[derive(Debug)]
struct Grab {
    id: String,
    origin: Vec2,
}

/// Owns the simulation, its clock and the render adapter for one view.
///
/// Any change to the inputs (entities, measured size, mode) throws the ball
/// set away and lays it out again from scratch.
pub struct SkillsBoard {
    entities: Vec<Entity>,
    container: Option<Container>,
    mode: BoardMode,
    sim: BallSim,
    clock: FrameClock,
    adapter: Box<dyn RenderAdapter>,
    grab: Option<Grab>,
}

impl SkillsBoard {
    /// A board in grid mode with no entities and no measured size.
    #[must_use]
    pub fn new(sim: BallSim, adapter: Box<dyn RenderAdapter>) -> Self {
        Self {
            entities: Vec::new(),
            container: None,
            mode: BoardMode::Grid,
            sim,
            clock: FrameClock::new(),
            adapter,
            grab: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BoardMode) {
        if mode == self.mode {
            return;
        }
        tracing::debug!(?mode, "board mode changed");
        self.mode = mode;
        self.rebuild();
    }

    /// Flip between grid and gravity, returning the new mode.
    pub fn toggle_mode(&mut self) -> BoardMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// The host measured (or re-measured) its area.
    pub fn resize(&mut self, container: Container) {
        self.container = Some(container);
        self.rebuild();
    }

    /// The technology list changed.
    pub fn set_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.rebuild();
    }

    /// New physics and drag tuning. The ball set is laid out again.
    pub fn set_tuning(&mut self, config: SimulationConfig, drag: DragConfig) {
        self.sim.set_config(config);
        self.sim.set_drag_config(drag);
        self.rebuild();
    }

    /// The view went away. Nothing steps until it is fed new inputs.
    pub fn unmount(&mut self) {
        self.discard();
        self.entities.clear();
        self.container = None;
        tracing::debug!("board unmounted");
    }

    /// Advance one frame.
    ///
    /// Does nothing in grid mode. If the previous layout attempt was a no-op
    /// (size not known yet), it is retried here first.
    pub fn frame(&mut self, timestamp_ms: f64) -> StepReport {
        if self.mode != BoardMode::Gravity {
            return StepReport::default();
        }
        if !self.sim.is_initialized() && !self.try_initialize() {
            return StepReport::default();
        }

        let delta_scale = self.clock.tick(timestamp_ms);
        let report = self.sim.step(delta_scale);
        self.adapter
            .sync(self.sim.balls(), delta_scale * CANONICAL_FRAME_MS);
        report
    }

    /// Pointer pressed on the badge `id` at `at`.
    ///
    /// A grab still in progress is released first, without a throw.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBall`] if no ball carries `id`.
    pub fn pointer_down(&mut self, id: &str, at: Vec2) -> Result<(), PhysicsError> {
        if let Some(previous) = self.grab.take() {
            self.sim.end_drag(&previous.id, 0.0, 0.0)?;
        }
        self.sim.begin_drag_in_place(id)?;
        self.grab = Some(Grab {
            id: id.to_owned(),
            origin: at,
        });
        Ok(())
    }

    /// Pointer moved to `at`. Ignored when nothing is held.
    ///
    /// # Errors
    ///
    /// Propagates [`PhysicsError`] if the held ball vanished underneath.
    pub fn pointer_move(&mut self, at: Vec2) -> Result<(), PhysicsError> {
        match &self.grab {
            Some(grab) => self.sim.update_drag(&grab.id, at - grab.origin),
            None => Ok(()),
        }
    }

    /// Pointer released at `at`. Returns the throw velocity, or `None` when
    /// nothing was held.
    ///
    /// # Errors
    ///
    /// Propagates [`PhysicsError`] if the held ball vanished underneath.
    pub fn pointer_up(&mut self, at: Vec2) -> Result<Option<Vec2>, PhysicsError> {
        let Some(grab) = self.grab.take() else {
            return Ok(None);
        };
        let delta = at - grab.origin;
        self.sim.end_drag(&grab.id, delta.x, delta.y).map(Some)
    }

    #[must_use]
    pub fn sim(&self) -> &BallSim {
        &self.sim
    }

    #[must_use]
    pub fn adapter(&self) -> &dyn RenderAdapter {
        self.adapter.as_ref()
    }

    #[must_use]
    pub fn visual(&self, id: &str) -> Option<&VisualState> {
        self.adapter.visual(id)
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// The badge image for `id` could not be loaded.
    pub fn icon_failed(&mut self, id: &str) {
        self.adapter.icon_failed(id);
    }

    fn rebuild(&mut self) {
        self.discard();
        self.try_initialize();
    }

    fn discard(&mut self) {
        self.sim.clear();
        self.adapter.forget_all();
        self.clock.reset();
        self.grab = None;
    }

    fn try_initialize(&mut self) -> bool {
        if self.mode != BoardMode::Gravity || self.entities.is_empty() {
            return false;
        }
        let Some(container) = self.container else {
            return false;
        };
        if !self.sim.initialize_in(&self.entities, container) {
            tracing::debug!("container not ready, layout deferred");
            return false;
        }
        self.adapter.mount(&self.entities);
        self.clock.reset();
        true
    }
}
