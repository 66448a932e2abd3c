//! # Render Adapters
//!
//! The simulation never draws anything. Each frame the host hands the ball
//! list to a [`RenderAdapter`], which keeps its own side table keyed by
//! [`physics::Ball::id`] and turns simulation state into something a view
//! layer can paint: a position, a scale, an opacity and a badge.
//!
//! Two variants exist, picked once at mount time by [`select_adapter`]:
//!
//! -   [`SpringAdapter`] for hosts that can render the full 3D badge. Every
//!     visual value chases its physics target through a damped spring, so
//!     motion stays smooth even when frames are uneven.
//! -   [`FallbackAdapter`] for hosts without that capability. Positions snap
//!     straight to the simulation and badges degrade to a flat icon or a
//!     single letter.

pub mod adapter;
pub mod fallback;
pub mod spring;

pub use adapter::{select_adapter, AdapterKind, Badge, RenderAdapter, VisualState};
pub use fallback::FallbackAdapter;
pub use spring::{Spring, SpringAdapter, SpringConfig};
