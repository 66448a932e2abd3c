//! The adapter seam between simulation state and the view layer.

use glam::Vec2;
use physics::{Ball, Entity};

/// Scale applied to a badge while it is held.
pub const GRAB_SCALE: f32 = 1.1;
/// Stacking order of a held badge, so it draws above its neighbours.
pub const GRAB_Z_INDEX: i32 = 999;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdapterKind {
    Spring,
    Fallback,
}

/// What to paint inside the badge circle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Badge {
    /// Full 3D ball with the icon as a decal.
    Decal(Option<String>),
    /// Flat image.
    Icon(String),
    /// Last resort: a single character.
    Glyph(char),
}

/// Everything a view needs to draw one badge this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub pos: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Show a grabbing cursor.
    pub grabbing: bool,
    pub badge: Badge,
}

pub trait RenderAdapter {
    fn kind(&self) -> AdapterKind;

    /// Record the entity list the next ball set is built from.
    ///
    /// Clears the side table; entries are recreated on the next
    /// [`sync`](Self::sync).
    fn mount(&mut self, entities: &[Entity]);

    /// Bring the side table in line with `balls` and advance any animation
    /// by `dt_ms`. Entries for ids no longer present are dropped.
    fn sync(&mut self, balls: &[Ball], dt_ms: f64);

    fn visual(&self, id: &str) -> Option<&VisualState>;

    /// Number of badges currently tracked.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry, e.g. on unmount.
    fn forget_all(&mut self);

    /// The badge image for `id` failed to load. Later frames draw the
    /// letter badge for it.
    fn icon_failed(&mut self, id: &str);
}

/// Pick the adapter for this host once, at mount.
///
/// `capable` is the host's answer to "can I render the full badge?"; the
/// simulation itself never sees the choice.
#[must_use]
pub fn select_adapter(capable: bool) -> Box<dyn RenderAdapter> {
    if capable {
        tracing::debug!("using spring render adapter");
        Box::new(crate::SpringAdapter::new())
    } else {
        tracing::info!("full badge rendering unavailable, using fallback adapter");
        Box::new(crate::FallbackAdapter::new())
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_view(pos: physics::Vec2) -> Vec2 {
    Vec2::new(pos.x as f32, pos.y as f32)
}
