//! Drawing for Saltus
//!
//! This crate provides:
//! - [`Framebuffer`], a view over the scan-out buffer that is also an
//!   `embedded-graphics` draw target
//! - [`SpriteRenderer`] and [`FontRenderer`], the blitting services the
//!   compositor draws through
//! - [`SilhouetteSprites`] and [`MonoFontRenderer`], the stock renderers
//! - [`Compositor`], which redraws the whole frame from a
//!   [`FrameView`](saltus_core::FrameView)
//!
//! # Pixel format
//!
//! One `u32` per pixel, `0x00RRGGBB`. Scan-out ignores the top byte.

#![no_std]

pub mod backend;
pub mod compositor;
pub mod font;
pub mod framebuffer;
pub mod sprites;

// Re-export key types
pub use backend::{DisplayError, FontRenderer, SpriteRenderer};
pub use compositor::Compositor;
pub use font::MonoFontRenderer;
pub use framebuffer::{Framebuffer, BACKGROUND};
pub use sprites::SilhouetteSprites;
