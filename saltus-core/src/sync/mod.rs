//! Interrupt-to-task synchronization

pub mod frame;

pub use frame::FrameSignal;
