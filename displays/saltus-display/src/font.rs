//! Text rendering with `embedded-graphics` mono fonts

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{DisplayError, FontRenderer};
use crate::framebuffer::Framebuffer;

/// Font renderer over an `embedded-graphics` mono font
#[derive(Clone, Copy)]
pub struct MonoFontRenderer {
    font: &'static MonoFont<'static>,
}

impl Default for MonoFontRenderer {
    fn default() -> Self {
        Self::new(&FONT_10X20)
    }
}

impl MonoFontRenderer {
    pub const fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }

    /// Glyph cell size (width, height)
    pub fn glyph_size(&self) -> (u32, u32) {
        (self.font.character_size.width, self.font.character_size.height)
    }
}

impl FontRenderer for MonoFontRenderer {
    fn draw_text(
        &self,
        target: &mut Framebuffer<'_>,
        x: i32,
        y: i32,
        text: &str,
        fg: Rgb888,
        bg: Rgb888,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(fg)
            .background_color(bg)
            .build();

        let text = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top);
        if text
            .bounding_box()
            .intersection(&target.bounding_box())
            .is_zero_sized()
        {
            return Err(DisplayError::OutOfBounds);
        }

        // Drawing into the framebuffer cannot fail
        let _ = text.draw(target);
        Ok(())
    }
}
