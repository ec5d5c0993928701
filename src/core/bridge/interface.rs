//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract for communication between the platform and core
// threads.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::pointer::PointerEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core via MPSC.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched pointer samples for a frame, in observation order.
    ///
    /// Samples are never coalesced: the rotation controller recomputes
    /// flick velocity from consecutive move timestamps, so every sample
    /// matters.
    Pointer(Vec<PointerEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}
