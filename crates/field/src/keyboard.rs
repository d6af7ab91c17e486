//! Soft keyboard dismissal detection by viewport polling.
//!
//! Some mobile browsers give no event when the soft keyboard is closed with
//! the system back button. The viewport shrinks while the keyboard is shown,
//! so the watch waits for a shrink and then for the size to come back.

use std::time::Duration;

/// Interval between viewport samples.
pub const KEYBOARD_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Clone, Debug)]
pub struct KeyboardWatch {
    baseline: (f32, f32),
    shrunk: bool,
    elapsed: Duration,
}

impl KeyboardWatch {
    /// Start watching; `baseline` is the viewport size before the keyboard opened.
    pub fn start(baseline: (f32, f32)) -> Self {
        Self {
            baseline,
            shrunk: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `dt`, sampling `viewport` once per elapsed interval.
    ///
    /// Returns `true` once the keyboard was seen and then dismissed. The
    /// caller drops the watch at that point.
    pub fn poll(&mut self, dt: Duration, viewport: (f32, f32)) -> bool {
        self.elapsed += dt;
        if self.elapsed < KEYBOARD_POLL_INTERVAL {
            return false;
        }
        self.elapsed = Duration::ZERO;

        let (w, h) = viewport;
        let (bw, bh) = self.baseline;
        if w < bw || h < bh {
            if !self.shrunk {
                log::trace!(target: "field.keyboard", "viewport shrank to {w}x{h}");
            }
            self.shrunk = true;
            return false;
        }
        self.shrunk
    }

    pub fn keyboard_seen(&self) -> bool {
        self.shrunk
    }
}
