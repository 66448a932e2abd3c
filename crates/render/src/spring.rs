//! Damped springs and the adapter that drives badges with them.
//!
//! A [`Spring`] chases a target with a tension/friction model integrated in
//! 1 ms substeps, so the result does not depend on how the host slices its
//! frames.

use std::collections::{HashMap, HashSet};
use std::ops::{Add, Mul, Sub};

use glam::Vec2;
use physics::{Ball, Entity};

use crate::adapter::{to_view, AdapterKind, Badge, RenderAdapter, VisualState, GRAB_SCALE, GRAB_Z_INDEX};
use crate::fallback::glyph_for;

/// Delay between successive badges fading in.
pub const FADE_STAGGER_MS: f64 = 200.0;

/// Below this distance and speed a spring snaps onto its target.
const REST_PRECISION: f32 = 0.01;

/// Longer gaps (a backgrounded tab, a debugger pause) jump straight to the
/// target instead of replaying every substep.
const MAX_SUBSTEPS: f64 = 1000.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    pub const DEFAULT: Self = Self { tension: 170.0, friction: 26.0 };
    /// Snappy response while the pointer holds the badge.
    pub const GRAB: Self = Self { tension: 300.0, friction: 20.0 };
    /// Following free flight.
    pub const PHYSICS: Self = Self { tension: 300.0, friction: 30.0 };
    /// Softer follow once the ball rests.
    pub const SETTLE: Self = Self { tension: 250.0, friction: 25.0 };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Values a [`Spring`] can animate.
pub trait Animatable: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {
    const ZERO: Self;
    fn magnitude(self) -> f32;
}

impl Animatable for f32 {
    const ZERO: Self = 0.0;
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Animatable for Vec2 {
    const ZERO: Self = Vec2::ZERO;
    fn magnitude(self) -> f32 {
        self.length()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<T> {
    value: T,
    velocity: T,
    target: T,
    config: SpringConfig,
}

impl<T: Animatable> Spring<T> {
    /// A spring resting at `value`.
    pub fn new(value: T, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::ZERO;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.magnitude() == 0.0 && (self.target - self.value).magnitude() == 0.0
    }

    /// Advance by `dt_ms` milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, dt_ms: f64) {
        if !dt_ms.is_finite() || dt_ms <= 0.0 || self.is_at_rest() {
            return;
        }
        let substeps = dt_ms.ceil();
        if substeps > MAX_SUBSTEPS {
            self.snap_to(self.target);
            return;
        }
        let h = (dt_ms / substeps) as f32;
        let stiffness = -self.config.tension * 1e-6;
        let damping = -self.config.friction * 1e-3;

        for _ in 0..substeps as usize {
            let accel = (self.value - self.target) * stiffness + self.velocity * damping;
            self.velocity = self.velocity + accel * h;
            self.value = self.value + self.velocity * h;
        }

        if (self.target - self.value).magnitude() < REST_PRECISION
            && self.velocity.magnitude() < REST_PRECISION
        {
            self.snap_to(self.target);
        }
    }
}

#[derive(Debug)]
struct Entry {
    index: usize,
    age_ms: f64,
    pos: Spring<Vec2>,
    scale: Spring<f32>,
    opacity: Spring<f32>,
    visual: VisualState,
}

impl Entry {
    fn new(index: usize, ball: &Ball, icon: Option<String>) -> Self {
        let pos = to_view(ball.pos);
        Self {
            index,
            age_ms: 0.0,
            pos: Spring::new(pos, SpringConfig::PHYSICS),
            scale: Spring::new(1.0, SpringConfig::GRAB),
            opacity: Spring::new(0.0, SpringConfig::DEFAULT),
            visual: VisualState {
                pos,
                scale: 1.0,
                opacity: 0.0,
                z_index: 0,
                grabbing: false,
                badge: Badge::Decal(icon),
            },
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, ball: &Ball, dt_ms: f64) {
        self.age_ms += dt_ms;

        let config = if ball.is_dragging {
            SpringConfig::GRAB
        } else if ball.is_settled {
            SpringConfig::SETTLE
        } else {
            SpringConfig::PHYSICS
        };
        self.pos.set_config(config);
        self.pos.set_target(to_view(ball.pos));
        self.scale
            .set_target(if ball.is_dragging { GRAB_SCALE } else { 1.0 });
        if self.age_ms >= self.index as f64 * FADE_STAGGER_MS {
            self.opacity.set_target(1.0);
        }

        self.pos.advance(dt_ms);
        self.scale.advance(dt_ms);
        self.opacity.advance(dt_ms);

        self.visual.pos = self.pos.value();
        self.visual.scale = self.scale.value();
        self.visual.opacity = self.opacity.value().clamp(0.0, 1.0);
        self.visual.grabbing = ball.is_dragging;
        self.visual.z_index = if ball.is_dragging { GRAB_Z_INDEX } else { 0 };
    }
}

/// Smooth adapter for hosts that can draw the full badge.
#[derive(Debug, Default)]
pub struct SpringAdapter {
    icons: HashMap<String, Option<String>>,
    failed: HashSet<String>,
    entries: HashMap<String, Entry>,
}

impl SpringAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderAdapter for SpringAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Spring
    }

    fn mount(&mut self, entities: &[Entity]) {
        self.icons = entities
            .iter()
            .map(|e| (e.id.clone(), e.icon.clone()))
            .collect();
        self.failed.clear();
        self.entries.clear();
    }

    fn sync(&mut self, balls: &[Ball], dt_ms: f64) {
        self.entries
            .retain(|id, _| balls.iter().any(|b| &b.id == id));

        for (index, ball) in balls.iter().enumerate() {
            let (icons, failed) = (&self.icons, &self.failed);
            let entry = self.entries.entry(ball.id.clone()).or_insert_with(|| {
                let mut entry = Entry::new(index, ball, icons.get(&ball.id).cloned().flatten());
                if failed.contains(&ball.id) {
                    entry.visual.badge = Badge::Glyph(glyph_for(&ball.id));
                }
                entry
            });
            entry.update(ball, dt_ms);
        }
    }

    fn visual(&self, id: &str) -> Option<&VisualState> {
        self.entries.get(id).map(|e| &e.visual)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn forget_all(&mut self) {
        self.entries.clear();
        self.icons.clear();
        self.failed.clear();
    }

    /// The decal could not be loaded; draw the flat letter badge instead.
    fn icon_failed(&mut self, id: &str) {
        tracing::debug!(id, "badge decal failed to load, showing glyph");
        self.failed.insert(id.to_owned());
        if let Some(entry) = self.entries.get_mut(id) {
            entry.visual.badge = Badge::Glyph(glyph_for(id));
        }
    }
}
