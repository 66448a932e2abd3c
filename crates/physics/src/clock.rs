//! Frame timing.
//!
//! The host's frame callback hands in a timestamp; the simulation wants a
//! dimensionless `delta_scale` where one canonical 60 Hz frame is `1.0`.

/// Length of the canonical frame in milliseconds.
pub const CANONICAL_FRAME_MS: f64 = 16.67;

#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a frame timestamp into a delta scale.
    ///
    /// The first tick after construction or [`reset`](Self::reset) is one
    /// canonical frame. A timestamp that does not move forward (or is not
    /// finite) yields `0.0` and leaves the reference time unchanged.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        match self.previous_ms {
            None => {
                self.previous_ms = Some(timestamp_ms);
                1.0
            }
            Some(previous) if timestamp_ms > previous => {
                self.previous_ms = Some(timestamp_ms);
                (timestamp_ms - previous) / CANONICAL_FRAME_MS
            }
            Some(_) => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.previous_ms = None;
    }
}
