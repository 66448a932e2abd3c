//! # Initial Placement
//!
//! Spreads a fresh set of balls over a centred grid near the top of the
//! container so the first frames show them dropping into place. The grid is
//! recomputed from scratch on every (re)initialization; nothing is carried
//! over from a previous layout.

use crate::config::LayoutConfig;
use crate::types::{Ball, Container, Entity, Vec2};

/// Build one ball per entity, in entity order.
///
/// Returns `None` when the container has no usable width yet (the host view
/// has not been measured). The caller is expected to try again once layout
/// information is available; no ball is ever created against undefined
/// bounds.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initial_layout(
    entities: &[Entity],
    container: &Container,
    layout: &LayoutConfig,
    rng: &mut fastrand::Rng,
) -> Option<Vec<Ball>> {
    if !container.is_measurable() {
        tracing::debug!(width = container.width, "container not measurable, skipping layout");
        return None;
    }

    let spacing = container.ball_diameter + layout.spacing_margin;
    let row_spacing = layout.row_spacing.unwrap_or(spacing);
    let cols = column_count(container.width, layout.side_margin, spacing);

    // Leftover width split evenly, each ball centred in its cell.
    let total_grid_width = cols as f64 * spacing;
    let start_x = (container.width - total_grid_width) / 2.0 + layout.spacing_margin / 2.0;

    let (min_x, max_x) = horizontal_spawn_range(container, layout.wall_inset);

    let balls = entities
        .iter()
        .enumerate()
        .map(|(index, entity)| {
            let col = index % cols;
            let row = index / cols;
            let x = start_x + col as f64 * spacing;
            let y = layout.top_offset + row as f64 * row_spacing;

            let pos = container.clamp(Vec2::new(x.min(max_x).max(min_x), y));
            let vx = (rng.f64() - 0.5) * 2.0 * layout.jitter;
            Ball::new(entity.id.clone(), pos, Vec2::new(vx, 0.0))
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = balls.len(), cols, "laid out balls");
    Some(balls)
}

/// Number of grid columns that fit, never less than one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_count(width: f64, side_margin: f64, spacing: f64) -> usize {
    let fit = ((width - side_margin) / spacing).floor();
    if fit.is_finite() && fit >= 1.0 {
        fit as usize
    } else {
        1
    }
}

/// Horizontal spawn bounds with the wall inset applied, falling back to the
/// plain container bounds when the container is too narrow for the inset.
fn horizontal_spawn_range(container: &Container, inset: f64) -> (f64, f64) {
    let lo = inset;
    let hi = container.max_x() - inset;
    if hi >= lo {
        (lo, hi)
    } else {
        (0.0, container.max_x())
    }
}
