//! Frame clock. Turns monotonic timestamps into clamped simulation deltas.

use christmas_defense_core::constants::MAX_FRAME_DT;

/// Derives `dt` from successive timestamps (seconds).
///
/// The first sample yields 0. Deltas are clamped to `[0, max_dt]` so a frame
/// hitch cannot make projectiles or enemies tunnel through their targets.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self { last: None, max_dt }
    }

    /// Clamped seconds elapsed since the previous call.
    /// Timestamps that go backwards (or are not finite) yield 0 and are ignored.
    pub fn delta(&mut self, now_secs: f64) -> f64 {
        if !now_secs.is_finite() {
            return 0.0;
        }
        match self.last {
            None => {
                self.last = Some(now_secs);
                0.0
            }
            Some(prev) if now_secs < prev => 0.0,
            Some(prev) => {
                self.last = Some(now_secs);
                clamp_dt(now_secs - prev, self.max_dt)
            }
        }
    }

    /// Forget the previous timestamp, e.g. after the driver was suspended.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Clamp a raw delta into `[0, max_dt]`. Non-finite input yields 0.
pub fn clamp_dt(dt: f64, max_dt: f64) -> f64 {
    if dt.is_finite() {
        dt.clamp(0.0, max_dt)
    } else {
        0.0
    }
}
