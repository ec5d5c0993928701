//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the core logic thread via MPSC.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  CoreLoop        │
//  │   ↓                      │    │                  │
//  │  PointerTracker          │    │  hit test (Down) │
//  │   ├─ Caches cursor pos   │    │  ↓               │
//  │   └─ Maps leave → Cancel │    │  RotationCtrl    │
//  │   ↓                      │    │  ↓               │
//  │  PointerBuffer           │    │  SceneBinding    │
//  │   ↓                      │    └──────────────────┘
//  │  RedrawRequested         │             ↑
//  │   ↓ (flush)              │             │
//  │  MPSC Channel ───────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered samples sent atomically, in observation order
//    → Core ticks at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: batches the frame's pointer
//   samples atomically, preserving order even at high event rates
// - **Timestamps at receipt**: every sample is stamped from the shared
//   FrameClock the moment winit delivers it, keeping the pointer and
//   tick streams on one monotonic axis
// - **Cursor-leave and focus-loss are cancels**: a drag interrupted by
//   the OS must end like a release, never dangle
// - **Graceful channel disconnect**: if the core thread dies, the
//   platform logs a warning but keeps running so the window can close
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Viewer::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod pointer_buffer;
mod pointer_tracker;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::bridge::{PlatformError, PlatformEvent};
use crate::core::clock::FrameClock;
use pointer_buffer::PointerBuffer;
use pointer_tracker::PointerTracker;

//=== Platform ============================================================

/// Window manager and pointer sample aggregator.
///
/// Runs on the main thread and sends batched samples to the core thread
/// via MPSC at every frame boundary.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, clock)`
/// 2. **Execution**: `platform.run()` — starts the event loop
/// 3. **Event processing**: winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window close → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync — it must remain on the main thread.
/// Communication with other threads occurs exclusively via the sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers pointer samples until the frame boundary.
    buffer: PointerBuffer,

    /// Channel to the core logic thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts winit events to pointer samples.
    tracker: PointerTracker,

    /// Shared epoch for stamping samples.
    clock: FrameClock,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given sender and clock.
    ///
    /// Does not create the window yet — that happens lazily in
    /// `resumed()`.
    pub(crate) fn new(event_sender: Sender<PlatformEvent>, clock: FrameClock) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: PointerBuffer::new(),
            event_sender,
            tracker: PointerTracker::new(),
            clock,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] only if event loop creation fails
    /// before starting. Once running, errors are handled internally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS winit
    /// requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered pointer samples to the core thread.
    ///
    /// Called on every `RedrawRequested`. Empty frames send nothing. If
    /// the channel is disconnected (core thread panicked or exited
    /// early), logs a warning and drops the samples so the user can
    /// still close the window normally.
    fn flush_pointer_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let count = self.buffer.len();
        trace!(target: "platform::pointer", "Flushing {} pointer samples", count);

        if let Some(samples) = self.buffer.drain() {
            if self.event_sender.send(PlatformEvent::Pointer(samples)).is_err() {
                warn!(
                    target: "platform::pointer",
                    "Channel disconnected, dropping {} samples",
                    count
                );
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Tetraspin")
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify core of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let sample =
                    self.tracker
                        .on_cursor_moved(position.x, position.y, self.clock.now_ms());
                self.buffer.push(sample);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(sample) =
                    self.tracker.on_mouse_input(*button, *state, self.clock.now_ms())
                {
                    self.buffer.push(sample);
                } else {
                    trace!(target: "platform::pointer", "Non-primary button ignored");
                }
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(sample) = self.tracker.on_pointer_interrupted(self.clock.now_ms()) {
                    debug!(target: "platform::pointer", "Cursor left mid-drag, cancelling");
                    self.buffer.push(sample);
                }
            }

            WindowEvent::Focused(false) => {
                if let Some(sample) = self.tracker.on_pointer_interrupted(self.clock.now_ms()) {
                    debug!(target: "platform::pointer", "Focus lost mid-drag, cancelling");
                    self.buffer.push(sample);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered samples
                self.flush_pointer_buffer();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, keyboard input, etc. (not needed here)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pointer::PointerEvent;
    use crossbeam_channel::unbounded;

    #[test]
    fn platform_creation() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, FrameClock::new());
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, FrameClock::new());

        platform.flush_pointer_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for an empty frame");
    }

    #[test]
    fn flush_sends_buffered_samples() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, FrameClock::new());

        platform.buffer.push(PointerEvent::Down { x: 1.0, y: 2.0, time_ms: 3.0 });
        platform.buffer.push(PointerEvent::Up { time_ms: 4.0 });

        platform.flush_pointer_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Pointer(samples)) => {
                assert_eq!(samples.len(), 2);
                assert_eq!(samples[1], PointerEvent::Up { time_ms: 4.0 });
            }
            other => panic!("Expected Pointer batch, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, FrameClock::new());

        platform.buffer.push(PointerEvent::Up { time_ms: 1.0 });
        drop(rx);

        // Should not panic, just log a warning
        platform.flush_pointer_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, FrameClock::new());

        platform.buffer.push(PointerEvent::Up { time_ms: 1.0 });

        platform.flush_pointer_buffer();
        platform.flush_pointer_buffer(); // Second flush should be a no-op

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }
}
