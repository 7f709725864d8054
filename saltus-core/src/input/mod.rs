//! Keyboard input
//!
//! The keyboard interrupt turns key transitions into two flag cells that
//! the render loop samples once per frame. Nothing else crosses the
//! interrupt boundary.

pub mod flags;
pub mod keyboard;
pub mod keys;

pub use flags::{InputFlags, InputReader, KeyLatch};
pub use keyboard::{handle_key, service_keyboard, DrainReport, KeyOutcome, MAX_DRAIN_EVENTS};
pub use keys::{action_for, Action};
