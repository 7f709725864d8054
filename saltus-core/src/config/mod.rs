//! Compile-time configuration
//!
//! Resolution and physics are fixed at build time. There is no runtime
//! config surface; the firmware validates the constants once with a
//! `const` assertion and again at boot so a bad edit shows up in the log.

pub mod geometry;
pub mod tuning;

pub use geometry::{Geometry, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
pub use tuning::{Stance, Tuning, TuningError};
