//=========================================================================
// Viewer Facade
//
// Main entry point and coordinator for the interactive viewer.
//
// Architecture:
// ```text
//     ViewerBuilder  ──build()──>  Viewer  ──run(scene)──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns the core thread
//         ├─ with_channel_capacity()    runs the platform loop
//         └─ with_rotation()            blocks until window close
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::bridge::PlatformEvent;
use crate::core::clock::FrameClock;
use crate::core::rotation::{ConfigError, RotationConfig, RotationController};
use crate::core::scene::SceneBinding;
use crate::core::CoreLoop;
use crate::platform::Platform;

//=== ViewerBuilder =======================================================

/// Builder for configuring and constructing a [`Viewer`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (core ticks per second)
/// - **Channel capacity**: 128 event batches
/// - **Rotation config**: [`RotationConfig::default()`]
///
/// # Examples
///
/// ```no_run
/// use tetraspin::prelude::*;
///
/// # struct Shape;
/// # impl SceneBinding for Shape {
/// #     fn hit_test(&self, _x: f64, _y: f64) -> bool { true }
/// #     fn apply_yaw(&mut self, _yaw: f64) {}
/// # }
/// ViewerBuilder::new()
///     .with_tps(120.0)
///     .with_rotation(RotationConfig {
///         drag_sensitivity: 0.008,
///         ..Default::default()
///     })
///     .build()
///     .expect("valid rotation config")
///     .run(Box::new(Shape));
/// ```
pub struct ViewerBuilder {
    tps: f64,
    channel_capacity: usize,
    rotation: RotationConfig,
}

impl ViewerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            rotation: RotationConfig::default(),
        }
    }

    /// Sets the target ticks per second for the core logic thread.
    ///
    /// The core maintains this update rate with a fixed-pacing loop.
    /// Note that the auto-resume delay is measured in wall-clock time,
    /// not ticks, so interaction timing is unaffected by this value.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the rotation interaction tunables.
    ///
    /// Validation happens in [`build`](Self::build), not here, so a
    /// config can be assembled incrementally.
    pub fn with_rotation(mut self, config: RotationConfig) -> Self {
        self.rotation = config;
        self
    }

    /// Builds the viewer, validating the rotation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any rotation tunable is non-finite or
    /// negative.
    pub fn build(self) -> Result<Viewer, ConfigError> {
        info!("Building viewer (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let controller = RotationController::new(self.rotation)?;

        Ok(Viewer {
            controller,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for ViewerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Viewer ==============================================================

/// Tetraspin viewer runtime.
///
/// Coordinates the platform event loop and the core logic thread.
/// Create via [`ViewerBuilder`].
///
/// # Architecture
///
/// ```text
/// Viewer (Main Thread)
///   ├─► CoreLoop (Logic Thread @ TPS)
///   │     └─► RotationController, SceneBinding
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Pointer Capture
///
/// Communication: MPSC Channel (PlatformEvent)
/// ```
pub struct Viewer {
    controller: RotationController,
    tps: f64,
    channel_capacity: usize,
}

impl Viewer {
    //--- Execution --------------------------------------------------------

    /// Starts the viewer runtime and blocks until the window closes.
    ///
    /// The scene binding moves to the core thread; it is hit-tested on
    /// every pointer-down and receives the yaw once per tick.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the MPSC channel and the shared frame clock
    /// 2. Spawns the core thread ticking at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: channel signals → core thread terminates
    ///
    /// # Thread Panic Handling
    ///
    /// If the core thread panics, the error is logged; the platform
    /// keeps running so the user can close the window normally.
    pub fn run(self, scene: Box<dyn SceneBinding>) {
        info!("Starting viewer runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel and shared clock -------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let clock = FrameClock::new();

        info!("MPSC channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread --------------------------------
        let core_handle = CoreLoop::new(self.controller, scene).spawn(rx, self.tps, clock);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem ------------------------------
        let platform = Platform::new(tx, clock);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {:?}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the core thread to terminate -------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Viewer shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
