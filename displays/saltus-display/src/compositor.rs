//! Frame compositor
//!
//! Redraws the whole framebuffer every frame: clear, one character
//! sprite, score overlay. There is no dirty tracking.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use saltus_core::scene::{score_text, select_sprite};
use saltus_core::{Compose, FrameView, Geometry, SpriteId};

use crate::backend::{DisplayError, FontRenderer, SpriteRenderer};
use crate::framebuffer::{Framebuffer, BACKGROUND};

/// Score text colors
const SCORE_FG: Rgb888 = Rgb888::WHITE;
const SCORE_BG: Rgb888 = Rgb888::BLACK;

/// Owns the framebuffer and the renderers that draw into it
pub struct Compositor<'fb, S, F> {
    target: Framebuffer<'fb>,
    sprites: S,
    font: F,
    geometry: Geometry,
}

impl<'fb, S, F> Compositor<'fb, S, F>
where
    S: SpriteRenderer,
    F: FontRenderer,
{
    pub fn new(target: Framebuffer<'fb>, sprites: S, font: F, geometry: Geometry) -> Self {
        Self {
            target,
            sprites,
            font,
            geometry,
        }
    }

    /// Redraw the frame, returning the sprite that was drawn
    pub fn draw(&mut self, view: &FrameView<'_>) -> Result<SpriteId, DisplayError> {
        self.target.clear_raw(BACKGROUND);

        let sprite = select_sprite(view.body, view.frame);
        self.sprites.draw_sprite(
            &mut self.target,
            self.geometry.anchor_x,
            view.body.top_y(),
            sprite,
        )?;

        let (x, y) = self.geometry.score_origin;
        let score = score_text(view.frame);
        self.font
            .draw_text(&mut self.target, x, y, &score, SCORE_FG, SCORE_BG)?;

        Ok(sprite)
    }

    pub fn framebuffer(&self) -> &Framebuffer<'fb> {
        &self.target
    }
}

impl<S, F> Compose for Compositor<'_, S, F>
where
    S: SpriteRenderer,
    F: FontRenderer,
{
    type Error = DisplayError;

    fn compose(&mut self, view: &FrameView<'_>) -> Result<(), DisplayError> {
        self.draw(view).map(|_| ())
    }
}
