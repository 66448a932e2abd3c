//! Ball-ball collision detection and response

use super::Contact;
use crate::types::{Ball, Container};

/// Detect an overlap between two equally sized balls.
///
/// Coincident centers (`distance == 0`) have no usable normal and are left
/// alone for this step rather than treated as an error.
#[must_use]
pub fn detect_ball_collision(ball_a: &Ball, ball_b: &Ball, min_distance: f64) -> Option<Contact> {
    let delta = ball_b.pos - ball_a.pos;
    let distance = delta.length();

    if distance > 0.0 && distance < min_distance {
        Some(Contact {
            normal: delta / distance,
            distance,
            overlap: min_distance - distance,
        })
    } else {
        None
    }
}

/// Push an overlapping pair apart and exchange momentum along the normal.
///
/// A dragging ball is an immovable obstacle: it is neither repositioned nor
/// given an impulse, and the other ball takes the whole separation.
pub fn resolve_ball_collision(
    ball_a: &mut Ball,
    ball_b: &mut Ball,
    contact: &Contact,
    container: &Container,
    restitution: f64,
) {
    // A struck ball has to resume simulation.
    if ball_a.is_settled || ball_b.is_settled {
        ball_a.is_settled = false;
        ball_b.is_settled = false;
    }

    let normal = contact.normal;
    let (share_a, share_b) = match (ball_a.is_dragging, ball_b.is_dragging) {
        (false, false) => (0.5, 0.5),
        (true, false) => (0.0, 1.0),
        (false, true) => (1.0, 0.0),
        (true, true) => (0.0, 0.0),
    };
    ball_a.pos -= normal * (contact.overlap * share_a);
    ball_b.pos += normal * (contact.overlap * share_b);

    // Receding or sliding contacts only get separated.
    let velocity_along_normal = (ball_b.vel - ball_a.vel).dot(normal);
    if velocity_along_normal < 0.0 {
        let impulse = -(1.0 + restitution) * velocity_along_normal / 2.0;
        if !ball_a.is_dragging {
            ball_a.vel -= normal * impulse;
        }
        if !ball_b.is_dragging {
            ball_b.vel += normal * impulse;
        }
    }

    ball_a.pos = container.clamp(ball_a.pos);
    ball_b.pos = container.clamp(ball_b.pos);
}
