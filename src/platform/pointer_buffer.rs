//=========================================================================
// Pointer Buffer
//
// Collects normalized pointer samples for the current frame. Acts as a
// transient aggregator between the platform event loop and the core
// logic thread.
//
// Responsibilities:
// - Store incoming samples per frame, in observation order
// - Provide unified access to collected samples via `drain()`
//
// Notes:
// Unlike a general input buffer, samples are never deduplicated or
// coalesced: the rotation controller recomputes flick velocity from
// consecutive move timestamps, so dropping or merging moves would skew
// the inertia handed over at release.
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::pointer::PointerEvent;

//=== PointerBuffer =======================================================

pub(crate) struct PointerBuffer {
    samples: Vec<PointerEvent>,
}

impl PointerBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame's worth of samples to minimize
    // reallocations during fast drags.
    //
    pub(crate) fn new() -> Self {
        const SAMPLES_BASE: usize = 32;

        Self {
            samples: Vec::with_capacity(SAMPLES_BASE),
        }
    }

    //--- push() -------------------------------------------------------------

    pub(crate) fn push(&mut self, sample: PointerEvent) {
        self.samples.push(sample);
    }

    //--- drain() ------------------------------------------------------------
    //
    // Returns all samples collected this frame and clears the buffer,
    // or `None` when the frame saw no pointer activity (empty batches
    // are not sent across the channel).
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<PointerEvent>> {
        if self.samples.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.samples))
    }

    //--- Utilities ----------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
