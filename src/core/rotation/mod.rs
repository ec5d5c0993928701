//=========================================================================
// Rotation Subsystem
//
// The interaction core of the viewer: a finite-state model deciding
// whether the shape is under direct user control (Dragging), coasting
// under simulated inertia (Inertia), or idle (Passive, which covers the
// cooling-off period and steady auto-rotation), plus the per-frame
// physics integration that produces the yaw angle.
//
// Responsibilities:
// - Consume normalized pointer samples and frame ticks
// - Apply momentum, exponential damping, and frame-delta clamping
// - Expose the yaw output and the drag-active signal to the host
//
// Notes:
// This module is deliberately free of windowing and rendering concerns;
// it operates on scalars and timestamps only, which keeps the state
// machine testable in isolation.
//
//=========================================================================

//=== Submodules ==========================================================

mod config;
mod controller;

//=== Public Exports ======================================================

pub use config::{ConfigError, RotationConfig};
pub use controller::{Phase, RotationController};
