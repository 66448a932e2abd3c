//! Flat badges for hosts without full rendering support.
//!
//! No animation: positions come straight from the simulation every frame.

use std::collections::{HashMap, HashSet};

use physics::{Ball, Entity};

use crate::adapter::{to_view, AdapterKind, Badge, RenderAdapter, VisualState, GRAB_SCALE, GRAB_Z_INDEX};

/// Shown when an entity has neither an icon nor a name to take a letter from.
pub const PLACEHOLDER_GLYPH: char = '⚡';

#[derive(Debug, Default)]
pub struct FallbackAdapter {
    icons: HashMap<String, Option<String>>,
    failed: HashSet<String>,
    visuals: HashMap<String, VisualState>,
}

impl FallbackAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn badge_for(&self, id: &str) -> Badge {
        match self.icons.get(id).cloned().flatten() {
            Some(icon) if !self.failed.contains(id) => Badge::Icon(icon),
            _ => Badge::Glyph(glyph_for(id)),
        }
    }
}

/// First character of the name, as written.
pub fn glyph_for(name: &str) -> char {
    name.chars().next().unwrap_or(PLACEHOLDER_GLYPH)
}

impl RenderAdapter for FallbackAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Fallback
    }

    fn mount(&mut self, entities: &[Entity]) {
        self.icons = entities
            .iter()
            .map(|e| (e.id.clone(), e.icon.clone()))
            .collect();
        self.failed.clear();
        self.visuals.clear();
    }

    fn sync(&mut self, balls: &[Ball], _dt_ms: f64) {
        self.visuals.retain(|id, _| balls.iter().any(|b| &b.id == id));

        for ball in balls {
            let visual = VisualState {
                pos: to_view(ball.pos),
                scale: if ball.is_dragging { GRAB_SCALE } else { 1.0 },
                opacity: 1.0,
                z_index: if ball.is_dragging { GRAB_Z_INDEX } else { 0 },
                grabbing: ball.is_dragging,
                badge: self.badge_for(&ball.id),
            };
            self.visuals.insert(ball.id.clone(), visual);
        }
    }

    fn visual(&self, id: &str) -> Option<&VisualState> {
        self.visuals.get(id)
    }

    fn len(&self) -> usize {
        self.visuals.len()
    }

    fn forget_all(&mut self) {
        self.visuals.clear();
        self.icons.clear();
        self.failed.clear();
    }

    fn icon_failed(&mut self, id: &str) {
        tracing::debug!(id, "badge icon failed to load, showing glyph");
        self.failed.insert(id.to_owned());
        if let Some(visual) = self.visuals.get_mut(id) {
            visual.badge = Badge::Glyph(glyph_for(id));
        }
    }
}
