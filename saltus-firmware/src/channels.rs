//! State shared between interrupt handlers and the render task
//!
//! Both statics are lock-free from the handlers' point of view: the frame
//! signal takes a short critical section, the input flags are atomics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use saltus_core::{FrameSignal, InputFlags};

/// Vsync → render task wake-up (coalescing, at most one pending)
pub static FRAME_SIGNAL: FrameSignal<CriticalSectionRawMutex> = FrameSignal::new();

/// Keyboard interrupt → update step
pub static INPUT_FLAGS: InputFlags = InputFlags::new();
