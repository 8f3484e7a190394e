//! Resample cache invalidation.
//!
//! After each recompute the adapter remembers the slice it extracted: the
//! bounds it covers and the stride pair it was sampled at. On the next
//! redraw the cache decides whether that sub-array still serves the new
//! viewport, skipping the extraction entirely when it does.
//!
//! # Policy
//!
//! A recompute is skipped only when both hold:
//!
//! - **Containment**: the previously covered bounds box fully contains the
//!   newly requested box, component-wise.
//! - **Resolution**: the previous stride is less than or equal to the newly
//!   required stride on both axes — data already cached at finer-or-equal
//!   resolution can serve a coarser-or-equal request.
//!
//! Panning outside the cached bounds or zooming in past the cached
//! resolution forces a recompute. `set_data` and `set_extent` clear the
//! cache unconditionally because the source identity or its coordinate
//! mapping changed.

use tracing::debug;

use super::planner::SliceSpec;

/// Remembers the last extracted slice and decides when it can be reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResampleCache {
    last: Option<SliceSpec>,
}

impl ResampleCache {
    /// Create an empty cache. The first request always recomputes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the newly planned slice requires a fresh extraction.
    pub fn should_recompute(&self, new: &SliceSpec) -> bool {
        let Some(prev) = &self.last else {
            return true;
        };

        let contained = prev.x0 <= new.x0 && prev.x1 >= new.x1
            && prev.y0 <= new.y0 && prev.y1 >= new.y1;
        let fine_enough = prev.sx <= new.sx && prev.sy <= new.sy;

        let recompute = !(contained && fine_enough);
        debug!(?prev, ?new, contained, fine_enough, recompute, "cache decision");
        recompute
    }

    /// Record a freshly extracted slice.
    pub fn store(&mut self, spec: SliceSpec) {
        self.last = Some(spec);
    }

    /// Forget the cached slice. The next request will recompute.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// The last stored slice, if any.
    pub fn state(&self) -> Option<&SliceSpec> {
        self.last.as_ref()
    }
}

// =============================================================================
// Tests
// =============================================================================
