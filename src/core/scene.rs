//=========================================================================
// Scene Binding
//=========================================================================
//
// The seam between the interaction core and the rendering collaborator.
//
// The core does not know about 3D geometry, scene graphs, lighting, or
// materials. It asks the host two things: "did this pointer-down hit the
// shape?" and "here is the yaw for this frame, apply it". Everything on
// the other side of this trait is out of scope.
//
//=========================================================================

//=== SceneBinding ========================================================

/// Contract the host's scene must fulfil.
///
/// Implementations live on the core logic thread, hence the `Send`
/// bound. Both methods are called serially from that thread only.
pub trait SceneBinding: Send {
    /// Reports whether a pointer ray at window position `(x, y)`
    /// intersects the interactive shape under its current transform.
    ///
    /// Called once per pointer-down, before the drag session decision.
    /// Coordinates are physical window pixels, top-left origin.
    fn hit_test(&self, x: f64, y: f64) -> bool;

    /// Applies `yaw` (radians, rotation about the vertical axis) to the
    /// rendered shape. Called once per core tick, after the rotation
    /// controller has advanced.
    fn apply_yaw(&mut self, yaw: f64);
}
