//! Silhouette sprite set
//!
//! Stands in for bitmap artwork: each pose is a solid body block with an
//! eye cut-out and a leg band whose layout tells the poses apart. Sizes
//! come from the tuning so the drawn box matches what physics assumes.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use saltus_core::{SpriteId, Tuning};

use crate::backend::{DisplayError, SpriteRenderer};
use crate::framebuffer::Framebuffer;

const BODY: Rgb888 = Rgb888::new(0xE0, 0xE0, 0xE0);
const DEAD_BODY: Rgb888 = Rgb888::new(0xC0, 0x40, 0x40);
const CUTOUT: Rgb888 = Rgb888::BLACK;

/// Which legs are down in the leg band
#[derive(Clone, Copy)]
enum Legs {
    Both,
    Front,
    Back,
}

/// Sprite renderer drawing solid silhouettes
#[derive(Debug, Clone, Copy)]
pub struct SilhouetteSprites {
    standing: Size,
    crouched: Size,
}

impl Default for SilhouetteSprites {
    fn default() -> Self {
        Self::new(&Tuning::DEFAULT)
    }
}

impl SilhouetteSprites {
    pub const fn new(tuning: &Tuning) -> Self {
        Self {
            standing: Size::new(tuning.standing.width as u32, tuning.standing.height as u32),
            crouched: Size::new(tuning.crouched.width as u32, tuning.crouched.height as u32),
        }
    }

    fn legs(sprite: SpriteId) -> Legs {
        match sprite {
            SpriteId::Run1 | SpriteId::Crouch1 => Legs::Front,
            SpriteId::Run2 | SpriteId::Crouch2 => Legs::Back,
            SpriteId::Jump | SpriteId::Dead => Legs::Both,
        }
    }
}

impl SpriteRenderer for SilhouetteSprites {
    fn size(&self, sprite: SpriteId) -> (u32, u32) {
        let size = if sprite.is_crouch() {
            self.crouched
        } else {
            self.standing
        };
        (size.width, size.height)
    }

    fn draw_sprite(
        &self,
        target: &mut Framebuffer<'_>,
        x: i32,
        y: i32,
        sprite: SpriteId,
    ) -> Result<(), DisplayError> {
        let (w, h) = self.size(sprite);
        let bounds = Rectangle::new(Point::new(x, y), Size::new(w, h));
        if bounds.intersection(&target.bounding_box()).is_zero_sized() {
            return Err(DisplayError::OutOfBounds);
        }

        let color = if sprite == SpriteId::Dead { DEAD_BODY } else { BODY };
        let leg_band = h / 5;
        let body_h = h - leg_band;

        // Drawing into the framebuffer cannot fail
        let _ = target.fill_solid(
            &Rectangle::new(bounds.top_left, Size::new(w, body_h)),
            color,
        );

        // Tiny sprites have no room for an eye
        let eye = (w / 8).max(2);
        if let Some(eye_x) = w.checked_sub(2 * eye) {
            if body_h >= 2 * eye {
                let _ = Rectangle::new(
                    Point::new(x + eye_x as i32, y + eye as i32),
                    Size::new(eye, eye),
                )
                .into_styled(PrimitiveStyle::with_fill(CUTOUT))
                .draw(target);
            }
        }

        let leg_w = (w / 5).max(1);
        let leg_y = y + body_h as i32;
        let front = Point::new(x + (w / 2) as i32, leg_y);
        let back = Point::new(x + (w / 8) as i32, leg_y);
        let legs: &[Point] = match Self::legs(sprite) {
            Legs::Both => &[front, back],
            Legs::Front => &[front],
            Legs::Back => &[back],
        };
        for &leg in legs {
            let _ = target.fill_solid(&Rectangle::new(leg, Size::new(leg_w, leg_band)), color);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::framebuffer::{encode, BACKGROUND};
    use std::vec;

    fn buffer() -> std::vec::Vec<u32> {
        vec![BACKGROUND; 200 * 200]
    }

    #[test]
    fn test_sizes_follow_tuning() {
        let sprites = SilhouetteSprites::default();
        assert_eq!(sprites.size(SpriteId::Run1), (96, 98));
        assert_eq!(sprites.size(SpriteId::Jump), (96, 98));
        assert_eq!(sprites.size(SpriteId::Dead), (96, 98));
        assert_eq!(sprites.size(SpriteId::Crouch2), (122, 71));
    }

    #[test]
    fn test_sprite_stays_in_box() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, 200, 200).unwrap();
        let sprites = SilhouetteSprites::default();

        sprites.draw_sprite(&mut fb, 10, 20, SpriteId::Run1).unwrap();

        for y in 0..200 {
            for x in 0..200 {
                let inside = (10..106).contains(&x) && (20..118).contains(&y);
                if !inside {
                    assert_eq!(fb.pixel(x, y), Some(BACKGROUND), "pixel ({x}, {y})");
                }
            }
        }
        assert_eq!(fb.pixel(10, 20), Some(encode(BODY)));
    }

    #[test]
    fn test_run_poses_differ() {
        let sprites = SilhouetteSprites::default();

        let mut first = buffer();
        let mut fb = Framebuffer::new(&mut first, 200, 200).unwrap();
        sprites.draw_sprite(&mut fb, 0, 0, SpriteId::Run1).unwrap();

        let mut second = buffer();
        let mut fb = Framebuffer::new(&mut second, 200, 200).unwrap();
        sprites.draw_sprite(&mut fb, 0, 0, SpriteId::Run2).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_smallest_sprites_stay_in_box() {
        for width in 1..=8 {
            for height in 1..=8 {
                let mut tuning = Tuning::DEFAULT;
                tuning.standing.width = width;
                tuning.standing.height = height;
                let sprites = SilhouetteSprites::new(&tuning);

                for sprite in [SpriteId::Run1, SpriteId::Run2, SpriteId::Jump] {
                    let mut pixels = buffer();
                    let mut fb = Framebuffer::new(&mut pixels, 200, 200).unwrap();
                    assert_eq!(sprites.draw_sprite(&mut fb, 10, 10, sprite), Ok(()));

                    for y in 0..20 {
                        for x in 0..20 {
                            let inside = (10..10 + width).contains(&x)
                                && (10..10 + height).contains(&y);
                            if !inside {
                                assert_eq!(fb.pixel(x, y), Some(BACKGROUND), "{width}x{height}");
                            }
                        }
                    }
                    assert_eq!(fb.pixel(10, 10), Some(encode(BODY)), "{width}x{height}");
                }
            }
        }
    }

    #[test]
    fn test_off_screen_rejected() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels, 200, 200).unwrap();
        let sprites = SilhouetteSprites::default();

        assert_eq!(
            sprites.draw_sprite(&mut fb, 500, 0, SpriteId::Jump),
            Err(DisplayError::OutOfBounds)
        );
        // Partly visible is fine
        assert_eq!(sprites.draw_sprite(&mut fb, 150, -50, SpriteId::Jump), Ok(()));
    }
}
