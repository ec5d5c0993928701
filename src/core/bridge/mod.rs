//=========================================================================
// Platform Bridge
//=========================================================================
//
// Message types and collection machinery for the platform → core MPSC
// channel. The platform thread is the only sender; the core logic
// thread is the only receiver, which keeps the rotation state under a
// single writer as required.
//
//=========================================================================

//=== Submodules ==========================================================

mod collector;
mod interface;

//=== Exports =============================================================

pub(crate) use collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
