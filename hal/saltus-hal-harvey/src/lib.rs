//! Harvey/MiniRISC platform HAL
//!
//! Memory-mapped register blocks of the Harvey platform and the
//! `saltus-hal` trait implementations on top of them:
//!
//! - Video controller (framebuffer DMA scan-out, vsync interrupt)
//! - Keyboard controller (receive FIFO, level-triggered interrupt)
//! - Platform interrupt controller (line enable and pending masks)
//! - System control (halt)
//!
//! Register blocks are singletons at fixed addresses. Drivers are created
//! with `steal()`, which is how interrupt handlers reach them too: each
//! register has a single writer by construction.

#![no_std]

pub mod irq;
pub mod keyboard;
pub mod map;
pub mod system;
pub mod video;

pub use irq::{InterruptController, IrqLines};
pub use keyboard::Keyboard;
pub use system::System;
pub use video::Video;
