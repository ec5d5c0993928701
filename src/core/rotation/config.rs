//=========================================================================
// Rotation Configuration
//=========================================================================
//
// Policy knobs for the rotation interaction, fixed at controller
// construction. Every numeric field must be finite and non-negative;
// `validate()` enforces this before a controller can exist.
//
//=========================================================================

use std::fmt;

//=== RotationConfig ======================================================

/// Tunables governing drag response, inertia, and idle auto-rotation.
///
/// Units are noted per field. All numeric values must be finite and
/// non-negative (see [`RotationConfig::validate`]); `reduced_motion`
/// should mirror the OS-level accessibility preference of the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationConfig {
    /// Angular rate applied while passively idle, in rad/s.
    pub auto_rotate_speed: f64,

    /// Yaw produced per pixel of horizontal drag, in rad/px.
    pub drag_sensitivity: f64,

    /// Idle time required after a drag or inertia phase ends before
    /// auto-rotation resumes, in milliseconds.
    pub auto_resume_delay_ms: f64,

    /// Upper clamp on per-tick elapsed time, in seconds. Prevents large
    /// single-step jumps after window suspension or slow frames.
    pub max_frame_delta: f64,

    /// Exponential decay constant for post-release inertia, in 1/s.
    pub momentum_damping: f64,

    /// Velocity magnitude below which inertia is considered stopped,
    /// in rad/s.
    pub min_velocity_threshold: f64,

    /// When true, suppresses all autonomous motion (inertia and
    /// auto-rotation). Direct drag response is unaffected.
    pub reduced_motion: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            auto_rotate_speed: 0.5,
            drag_sensitivity: 0.01,
            auto_resume_delay_ms: 2000.0,
            max_frame_delta: 0.1,
            momentum_damping: 3.0,
            min_velocity_threshold: 0.05,
            reduced_motion: false,
        }
    }
}

impl RotationConfig {
    /// Checks that every numeric field is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("auto_rotate_speed", self.auto_rotate_speed),
            ("drag_sensitivity", self.drag_sensitivity),
            ("auto_resume_delay_ms", self.auto_resume_delay_ms),
            ("max_frame_delta", self.max_frame_delta),
            ("momentum_damping", self.momentum_damping),
            ("min_velocity_threshold", self.min_velocity_threshold),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }

        Ok(())
    }
}

//=== ConfigError =========================================================

/// Rotation configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    NotFinite(&'static str),

    /// A numeric field is negative.
    Negative(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite(field) => write!(f, "config field `{}` must be finite", field),
            Self::Negative(field) => write!(f, "config field `{}` must be non-negative", field),
        }
    }
}

impl std::error::Error for ConfigError {}

//=========================================================================
// Unit Tests
//=========================================================================
