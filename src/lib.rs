//=========================================================================
// Tetraspin — Library Root
//
// This crate defines the public API surface of the tetraspin viewer core.
//
// Responsibilities:
// - Expose the viewer facade (`Viewer`, `ViewerBuilder`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the high-level facade and the
//   interaction core (rotation state machine, pointer events, scene seam)
//
// Typical usage:
// ```no_run
// use tetraspin::prelude::*;
//
// struct Tetracube { yaw: f64 }
//
// impl SceneBinding for Tetracube {
//     fn hit_test(&self, _x: f64, _y: f64) -> bool { true }
//     fn apply_yaw(&mut self, yaw: f64) { self.yaw = yaw; }
// }
//
// fn main() {
//     ViewerBuilder::new()
//         .build()
//         .expect("valid rotation config")
//         .run(Box::new(Tetracube { yaw: 0.0 }));
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the interaction logic: the rotation state machine, the
// pointer event model, the scene collaborator trait, and the frame clock.
// It is exposed publicly so hosts can drive a `RotationController`
// directly (e.g. in a custom loop) without the bundled platform layer.
//
pub mod core;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, winit integration,
// pointer capture) and is kept private, as it is not part of the public
// API surface.
//
// `viewer` defines the facade that wires the platform and the core loop.
//
mod platform;
mod viewer;

//--- Public Exports ------------------------------------------------------

pub mod prelude;

pub use viewer::{Viewer, ViewerBuilder};
