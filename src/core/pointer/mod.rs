//=========================================================================
// Pointer Subsystem
//
// Normalized pointer input shared by the platform layer and the core.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== Public Exports ======================================================

pub use event::PointerEvent;
