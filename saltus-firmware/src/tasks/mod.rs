//! Embassy async tasks
//!
//! There is a single task; everything else happens in interrupts.

pub mod render;

pub use render::{render_task, FrameCompositor};
