//! Flag cells shared between the keyboard interrupt and the render loop
//!
//! Each cell has exactly one writer:
//!
//! | Cell             | Written by                  | Read by            |
//! |------------------|-----------------------------|--------------------|
//! | `jump_requested` | ISR (set), update (consume) | update step        |
//! | `crouch_held`    | ISR                         | update step        |
//! | `grounded`       | update step                 | ISR (jump gate)    |
//!
//! The interrupt side only ever sees a [`KeyLatch`]; the task side only
//! ever sees an [`InputReader`].

use portable_atomic::{AtomicBool, Ordering};

/// Input state shared across the interrupt boundary
#[derive(Debug)]
pub struct InputFlags {
    jump_requested: AtomicBool,
    crouch_held: AtomicBool,
    grounded: AtomicBool,
}

impl Default for InputFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFlags {
    /// Startup state: on the ground, nothing pressed
    pub const fn new() -> Self {
        Self {
            jump_requested: AtomicBool::new(false),
            crouch_held: AtomicBool::new(false),
            grounded: AtomicBool::new(true),
        }
    }

    /// Writer view for the keyboard interrupt handler
    pub fn latch(&self) -> KeyLatch<'_> {
        KeyLatch { flags: self }
    }

    /// Reader view for the update step
    pub fn reader(&self) -> InputReader<'_> {
        InputReader { flags: self }
    }

    /// Peek at the pending jump request without consuming it
    pub fn jump_pending(&self) -> bool {
        self.jump_requested.load(Ordering::Acquire)
    }

    /// Current crouch key level
    pub fn crouch_held(&self) -> bool {
        self.crouch_held.load(Ordering::Acquire)
    }

    /// Last grounded state published by the update step
    pub fn grounded(&self) -> bool {
        self.grounded.load(Ordering::Acquire)
    }
}

/// Interrupt-side handle
#[derive(Clone, Copy)]
pub struct KeyLatch<'a> {
    flags: &'a InputFlags,
}

impl KeyLatch<'_> {
    /// Latch a jump request if the character is on the ground
    ///
    /// Returns whether the request was accepted. The grounded read may be
    /// one frame stale.
    pub fn request_jump(&self) -> bool {
        if self.flags.grounded.load(Ordering::Acquire) {
            self.flags.jump_requested.store(true, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Track the crouch key level
    pub fn set_crouch(&self, held: bool) {
        self.flags.crouch_held.store(held, Ordering::Release);
    }
}

/// Task-side handle
#[derive(Clone, Copy)]
pub struct InputReader<'a> {
    flags: &'a InputFlags,
}

impl InputReader<'_> {
    /// Consume a pending jump request
    pub fn take_jump(&self) -> bool {
        self.flags.jump_requested.swap(false, Ordering::AcqRel)
    }

    /// Current crouch key level (not consumed)
    pub fn crouch_held(&self) -> bool {
        self.flags.crouch_held.load(Ordering::Acquire)
    }

    /// Publish the grounded state for the interrupt's jump gate
    pub fn publish_grounded(&self, grounded: bool) {
        self.flags.grounded.store(grounded, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let flags = InputFlags::new();
        assert!(flags.grounded());
        assert!(!flags.jump_pending());
        assert!(!flags.crouch_held());
    }

    #[test]
    fn test_jump_gated_on_ground() {
        let flags = InputFlags::new();

        flags.reader().publish_grounded(false);
        assert!(!flags.latch().request_jump());
        assert!(!flags.jump_pending());

        flags.reader().publish_grounded(true);
        assert!(flags.latch().request_jump());
        assert!(flags.jump_pending());
    }

    #[test]
    fn test_jump_consumed_once() {
        let flags = InputFlags::new();
        flags.latch().request_jump();

        assert!(flags.reader().take_jump());
        assert!(!flags.reader().take_jump());
    }

    #[test]
    fn test_crouch_is_level() {
        let flags = InputFlags::new();
        flags.latch().set_crouch(true);

        // Reading does not clear it
        assert!(flags.reader().crouch_held());
        assert!(flags.reader().crouch_held());

        flags.latch().set_crouch(false);
        assert!(!flags.reader().crouch_held());
    }
}
