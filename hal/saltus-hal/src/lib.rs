//! Saltus Hardware Abstraction Layer
//!
//! This crate defines the device traits the game core talks to. A
//! platform crate implements them on top of its memory-mapped registers,
//! and host tests implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (saltus-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  saltus-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ saltus-hal-   │
//!             │    harvey     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`video::VideoDevice`] - Framebuffer scan-out controller
//! - [`keyboard::KeyboardDevice`] - Keyboard receive queue
//! - [`system::SystemControl`] - Platform halt

#![no_std]
#![deny(unsafe_code)]

pub mod keyboard;
pub mod system;
pub mod video;

// Re-export key traits at crate root for convenience
pub use keyboard::{KeyEvent, KeyboardDevice};
pub use system::SystemControl;
pub use video::VideoDevice;
