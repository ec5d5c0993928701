//=========================================================================
// Core Loop
//
// Logic-thread coordinator for the interaction core.
//
// Responsibilities:
// - Receive batched pointer samples from the platform via MPSC
// - Hit-test pointer-down samples through the host's `SceneBinding`
// - Feed samples into the `RotationController` in observation order
// - Tick the controller at a fixed rate and push yaw into the scene
//
// Notes:
// The loop runs independently from the platform layer. It owns the
// controller and the scene binding directly and mutates them only from
// its own thread; communication with the platform occurs exclusively
// through message passing.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Submodules ==========================================================

pub mod clock;
pub mod pointer;
pub mod rotation;
pub mod scene;

pub(crate) mod bridge;

//=== Internal Imports ====================================================

use bridge::{EventCollector, PlatformEvent, TickControl};
use clock::FrameClock;
use pointer::PointerEvent;
use rotation::RotationController;
use scene::SceneBinding;

//=== CoreLoop ============================================================

/// Owns the rotation controller and the host scene on the logic thread.
pub(crate) struct CoreLoop {
    controller: RotationController,
    scene: Box<dyn SceneBinding>,
}

impl CoreLoop {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(controller: RotationController, scene: Box<dyn SceneBinding>) -> Self {
        Self { controller, scene }
    }

    //--- spawn() -----------------------------------------------------------
    //
    // Spawns the logic thread ticking the controller at a fixed update
    // frequency (TPS). Each tick:
    //  1. Collects pointer batches from the platform
    //  2. Applies them to the controller (hit-testing Down samples)
    //  3. Advances the simulation and pushes yaw into the scene
    //  4. Sleeps to maintain fixed pacing
    //  5. Exits cleanly on window close or channel disconnect
    //
    pub(crate) fn spawn(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
        clock: FrameClock,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events -----------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!(target: "core", "Core thread exiting");
                    break;
                }

                //--- Step 2: Apply pointer samples -------------------------
                for batch in collector.take_batches() {
                    self.process_samples(&batch);
                }

                //--- Step 3: Advance simulation ----------------------------
                self.advance(clock.now_ms());

                //--- Step 4: Maintain deterministic pacing -----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- process_samples() ---------------------------------------------------
    //
    // Feeds one frame's pointer samples into the controller in order.
    // Down samples are hit-tested against the scene's current transform
    // before the controller decides whether a drag session starts.
    //
    fn process_samples(&mut self, samples: &[PointerEvent]) {
        for sample in samples {
            match *sample {
                PointerEvent::Down { x, y, time_ms } => {
                    let hit = self.scene.hit_test(x, y);
                    if self.controller.on_pointer_down(x, time_ms, hit) {
                        debug!(target: "core", "drag active");
                    }
                }
                PointerEvent::Move { x, time_ms, .. } => {
                    self.controller.on_pointer_move(x, time_ms);
                }
                PointerEvent::Up { time_ms } => {
                    self.controller.on_pointer_up(time_ms);
                }
                PointerEvent::Cancel { time_ms } => {
                    self.controller.on_pointer_cancel(time_ms);
                }
            }
        }
    }

    //--- advance() -----------------------------------------------------------
    //
    // Ticks the controller once and hands the resulting yaw to the scene.
    //
    fn advance(&mut self, now_ms: f64) {
        let yaw = self.controller.tick(now_ms);
        self.scene.apply_yaw(yaw);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
