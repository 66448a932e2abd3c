//! # Tumble
//!
//! Technology badges as physical balls: they drop into a bounded area,
//! bounce off its walls and each other, come to rest on the floor, and can be
//! picked up and thrown with the pointer.
//!
//! ## The Crates
//!
//! -   **`tumble`:** This crate. It holds the host view, [`SkillsBoard`],
//!     which glues the other crates together, and the headless runtime
//!     binary.
//! -   **[`physics`]:** The simulation itself: layout, integration,
//!     collisions and drag handling behind a single owned
//!     [`physics::BallSim`].
//! -   **[`render`]:** Adapters that turn ball state into something a view
//!     can paint, either animated through springs or snapped flat.
//! -   **[`scene`]:** JSON skill-set documents listing the technologies and
//!     optional tuning.
//!
//! ## Frame Flow
//!
//! The host calls [`SkillsBoard::frame`] from its frame callback with a
//! millisecond timestamp. The board converts it to a delta scale, steps the
//! simulation once, and syncs the render adapter with the new ball states.
//! Pointer events go through [`SkillsBoard::pointer_down`],
//! [`SkillsBoard::pointer_move`] and [`SkillsBoard::pointer_up`] on the same
//! thread, so no locking is involved anywhere.

pub mod board;

pub use board::{BoardMode, SkillsBoard};

pub use physics;
pub use render;
pub use scene;
