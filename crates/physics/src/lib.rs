#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Tumble Physics
//!
//! A small, deterministic 2D simulation for draggable badges: one circular
//! ball per technology, falling under gravity inside a bounded container,
//! bouncing off its walls, knocking into each other and eventually settling
//! on the floor.
//!
//! ## Key Components
//!
//! -   **State model:** [`Ball`], [`Container`] and [`Vec2`] in the [`types`]
//!     module. A ball carries no rendering state; renderers keep their own
//!     side tables keyed by [`Ball::id`].
//! -   **Layout:** [`layout::initial_layout`] places a fresh set of balls on
//!     a centred grid.
//! -   **Integration:** [`integrator`] applies gravity, bounces, settling and
//!     friction; [`collision`] resolves overlapping pairs.
//! -   **Interaction:** [`interaction::DragController`] converts pointer drags
//!     into positions and release velocities.
//! -   **Simulation:** [`BallSim`] owns all of the above and is the only
//!     entry point a host needs.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{BallSim, Entity, SimulationConfig, Vec2};
//!
//! let mut sim = BallSim::with_seed(SimulationConfig::default(), 7);
//! let entities = [Entity::new("Rust"), Entity::new("TypeScript")];
//! assert!(sim.initialize(&entities, 900.0, 650.0));
//!
//! for _ in 0..60 {
//!     sim.step(1.0);
//! }
//!
//! sim.begin_drag_in_place("Rust")?;
//! sim.update_drag("Rust", Vec2::new(40.0, -20.0))?;
//! sim.end_drag("Rust", 40.0, -20.0)?;
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod integrator;
pub mod interaction;
pub mod layout;
pub mod simulation;
pub mod types;

pub use clock::FrameClock;
pub use config::{DragConfig, LayoutConfig, SimulationConfig};
pub use error::PhysicsError;
pub use simulation::{BallSim, StepReport};
pub use types::{Ball, Container, Entity, Vec2};
