//=========================================================================
// Pointer Tracker
//=========================================================================
//
// Converts platform-specific winit events into normalized PointerEvents.
//
// Architecture:
//   Winit Events → PointerTracker → PointerEvent → PointerBuffer
//
// Stateful position tracking: winit reports button presses without a
// position, so the tracker caches the last cursor position and attaches
// it to Down samples. It also tracks whether the primary button is held
// so cursor-leave and focus-loss can be mapped to Cancel (and only
// then — a stray leave without a press in flight produces nothing).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, MouseButton};

//=== Internal Dependencies ===============================================

use crate::core::pointer::PointerEvent;

//=== PointerTracker ======================================================

/// Maps winit pointer input to engine samples with cached cursor state.
///
/// Only the primary (left) button drives the rotation interaction;
/// other buttons are filtered (returns `None`).
pub(crate) struct PointerTracker {
    cursor: (f64, f64),
    primary_down: bool,
}

impl PointerTracker {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            cursor: (0.0, 0.0),
            primary_down: false,
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Records a cursor position and emits a Move sample.
    pub(crate) fn on_cursor_moved(&mut self, x: f64, y: f64, time_ms: f64) -> PointerEvent {
        self.cursor = (x, y);
        PointerEvent::Move { x, y, time_ms }
    }

    /// Converts a button transition (filters non-primary buttons).
    pub(crate) fn on_mouse_input(
        &mut self,
        button: MouseButton,
        state: ElementState,
        time_ms: f64,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.primary_down = true;
                let (x, y) = self.cursor;
                Some(PointerEvent::Down { x, y, time_ms })
            }
            ElementState::Released => {
                self.primary_down = false;
                Some(PointerEvent::Up { time_ms })
            }
        }
    }

    /// Maps cursor-leave (or focus loss) to Cancel while the primary
    /// button is held; no-op otherwise.
    pub(crate) fn on_pointer_interrupted(&mut self, time_ms: f64) -> Option<PointerEvent> {
        if !self.primary_down {
            return None;
        }
        self.primary_down = false;
        Some(PointerEvent::Cancel { time_ms })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
