//=========================================================================
// Frame Clock
//=========================================================================
//
// Monotonic millisecond timestamps from a shared epoch.
//
// The platform thread stamps pointer samples and the core thread drives
// `RotationController::tick` with the *same* clock, so the controller's
// monotonicity precondition holds across both streams by construction.
//
//=========================================================================

use std::time::Instant;

//=== FrameClock ==========================================================

/// Cheap, copyable handle to a shared monotonic epoch.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    epoch: Instant,
}

impl FrameClock {
    /// Creates a clock whose epoch is the moment of the call.
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }

    /// Returns milliseconds elapsed since the epoch.
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
