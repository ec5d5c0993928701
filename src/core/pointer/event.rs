//=========================================================================
// Pointer Event Types
//
// Defines the internal representation of normalized pointer samples.
//
// This module abstracts away platform-specific input (e.g. winit, SDL)
// into a unified format consumed by the rotation controller.
//
// Responsibilities:
// - Represent pointer down/move/up/cancel in a stable, portable way
// - Carry per-sample timestamps so flick velocity can be recomputed
//   from the most recent sample pair
//
// Design:
// Every variant carries the millisecond timestamp at which the platform
// observed the sample, taken from the shared `FrameClock` epoch. Samples
// must never be reordered or coalesced: the controller's velocity
// estimate depends on each move keeping its own timestamp.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    PointerEvent (this module)
//         ↓
//    CoreLoop (hit-tests Down via SceneBinding)
//         ↓
//    RotationController
// ```
//
//=========================================================================

//=== PointerEvent ========================================================

/// Normalized pointer sample from the platform layer.
///
/// Coordinates are in physical window pixels, top-left origin. The
/// rotation controller only consumes the horizontal component; `y` is
/// carried so the hit-test collaborator can intersect the full ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed. Whether this starts a drag session is
    /// decided downstream by the hit test.
    Down { x: f64, y: f64, time_ms: f64 },

    /// Cursor moved. Relevant only during a drag session; the
    /// controller ignores it otherwise.
    Move { x: f64, y: f64, time_ms: f64 },

    /// Primary button released.
    Up { time_ms: f64 },

    /// Pointer interrupted (cursor left the window, focus lost).
    /// Treated identically to `Up` so a drag can never get stuck.
    Cancel { time_ms: f64 },
}

impl PointerEvent {
    /// Returns the timestamp at which the platform observed the sample.
    pub fn time_ms(&self) -> f64 {
        match *self {
            Self::Down { time_ms, .. }
            | Self::Move { time_ms, .. }
            | Self::Up { time_ms }
            | Self::Cancel { time_ms } => time_ms,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ms_extracted_from_every_variant() {
        let samples = [
            PointerEvent::Down { x: 1.0, y: 2.0, time_ms: 10.0 },
            PointerEvent::Move { x: 3.0, y: 4.0, time_ms: 20.0 },
            PointerEvent::Up { time_ms: 30.0 },
            PointerEvent::Cancel { time_ms: 40.0 },
        ];

        let times: Vec<f64> = samples.iter().map(|s| s.time_ms()).collect();
        assert_eq!(times, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn events_are_comparable() {
        let a = PointerEvent::Up { time_ms: 5.0 };
        let b = PointerEvent::Up { time_ms: 5.0 };
        assert_eq!(a, b);
        assert_ne!(a, PointerEvent::Cancel { time_ms: 5.0 });
    }
}
