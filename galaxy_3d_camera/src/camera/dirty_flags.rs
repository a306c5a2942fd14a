//! Dirty flags: invalidation bits for the camera's cached matrices.
//!
//! Bits are raised only by mutators and cleared only by the getter that
//! owns them. Mutator → bit table:
//!
//! | Mutator                                                   | Bits            |
//! |-----------------------------------------------------------|-----------------|
//! | translation / orientation setters, translate, rotate, look_at, `set_dirty(true)` | `WORLD \| VIEW` |
//! | any projection parameter setter                           | `PROJECTION`    |
//!
//! A new parameter must be added to exactly one row. View depends on World
//! through this table, not through the getters.

use bitflags::bitflags;

bitflags! {
    /// Set of stale cached matrices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// World matrix must be recomposed from translation + orientation.
        const WORLD = 1 << 0;
        /// View matrix must be re-inverted from the world matrix.
        const VIEW = 1 << 1;
        /// Projection matrix must be rebuilt by the projection model.
        const PROJECTION = 1 << 2;
        /// An upstream matrix was recomputed since the last view-projection
        /// combination. Raised by getters, never by mutators.
        const COMBINED = 1 << 3;

        /// Bits raised by any transform mutator.
        const TRANSFORM = Self::WORLD.bits() | Self::VIEW.bits();
    }
}

impl Default for DirtyFlags {
    /// Everything stale: the state of a freshly built camera.
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
#[path = "dirty_flags_tests.rs"]
mod tests;
