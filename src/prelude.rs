//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tetraspin::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Viewer facade
pub use crate::viewer::{Viewer, ViewerBuilder};

// Rotation interaction core
pub use crate::core::rotation::{ConfigError, Phase, RotationConfig, RotationController};

// Pointer events
pub use crate::core::pointer::PointerEvent;

// Scene collaborator seam
pub use crate::core::scene::SceneBinding;

// Frame clock
pub use crate::core::clock::FrameClock;
