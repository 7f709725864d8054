//! Renderer traits
//!
//! The compositor does not know how sprites or glyphs are stored; it
//! only asks for them to be blitted at a screen position.

use embedded_graphics::pixelcolor::Rgb888;
use saltus_core::SpriteId;

use crate::framebuffer::Framebuffer;

/// Drawing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pixel slice does not match the requested dimensions
    BufferSize,
    /// Nothing of the requested item would land on screen
    OutOfBounds,
}

/// Blits fixed-size sprite bitmaps
pub trait SpriteRenderer {
    /// Size of a sprite in pixels (width, height)
    fn size(&self, sprite: SpriteId) -> (u32, u32);

    /// Draw a sprite with its top-left corner at (x, y)
    ///
    /// Parts falling outside the framebuffer are clipped.
    fn draw_sprite(
        &self,
        target: &mut Framebuffer<'_>,
        x: i32,
        y: i32,
        sprite: SpriteId,
    ) -> Result<(), DisplayError>;
}

/// Renders text
pub trait FontRenderer {
    /// Draw `text` with its top-left corner at (x, y)
    fn draw_text(
        &self,
        target: &mut Framebuffer<'_>,
        x: i32,
        y: i32,
        text: &str,
        fg: Rgb888,
        bg: Rgb888,
    ) -> Result<(), DisplayError>;
}
