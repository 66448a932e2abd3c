//! Plain data types shared by every stage of the simulation.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Default badge diameter in container pixels.
pub const DEFAULT_BALL_DIAMETER: f64 = 112.0;
/// Space reserved under each badge for its caption.
pub const DEFAULT_LABEL_HEIGHT: f64 = 25.0;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// One tracked item handed to the simulation, e.g. a technology badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    /// Opaque to the simulation; only the render side looks at it.
    pub icon: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A single simulated circular body.
///
/// `pos` is the top-left corner of the badge's bounding square, matching the
/// coordinate system of the host view (y grows downward).
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub id: String,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Held by a pointer. The integrator never moves a dragging ball.
    pub is_dragging: bool,
    /// Resting on the floor; skipped by the integrator until disturbed.
    pub is_settled: bool,
}

impl Ball {
    #[must_use]
    pub fn new(id: impl Into<String>, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id: id.into(),
            pos,
            vel,
            is_dragging: false,
            is_settled: false,
        }
    }

    /// Whether the integrator advances this ball.
    #[must_use]
    pub fn is_free(&self) -> bool {
        !self.is_dragging && !self.is_settled
    }
}

/// The bounded region the balls live in. Owned by the host view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    pub ball_diameter: f64,
    pub label_height: f64,
}

impl Container {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ball_diameter: DEFAULT_BALL_DIAMETER,
            label_height: DEFAULT_LABEL_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_ball_diameter(mut self, ball_diameter: f64) -> Self {
        self.ball_diameter = ball_diameter;
        self
    }

    #[must_use]
    pub fn with_label_height(mut self, label_height: f64) -> Self {
        self.label_height = label_height;
        self
    }

    /// False until the host has a real, positive width to lay out against.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite()
    }

    /// Right-most valid x.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        (self.width - self.ball_diameter).max(0.0)
    }

    /// Floor line: the lowest valid y.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        (self.height - self.ball_diameter - self.label_height).max(0.0)
    }

    #[must_use]
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.max_x()).contains(&pos.x) && (0.0..=self.max_y()).contains(&pos.y)
    }

    /// Clamp into `[0, max_x] x [0, max_y]`.
    ///
    /// Uses `min`/`max` rather than `f64::clamp` so degenerate containers and
    /// NaN coordinates are pulled onto the boundary instead of panicking.
    #[must_use]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.min(self.max_x()).max(0.0),
            pos.y.min(self.max_y()).max(0.0),
        )
    }
}
