//! Framebuffer view
//!
//! Wraps the pixel memory the video controller scans out. The compositor
//! is the only writer; scan-out reads it concurrently without any
//! synchronization, so a frame may tear. That is accepted.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::{IntoStorage, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::backend::DisplayError;

/// Raw value the screen is cleared to (black)
pub const BACKGROUND: u32 = 0x0000_0000;

/// Encode a color in the scan-out pixel format
pub fn encode(color: Rgb888) -> u32 {
    color.into_storage()
}

/// Mutable view over a row-major pixel buffer
pub struct Framebuffer<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Framebuffer<'a> {
    /// Wrap a pixel slice of exactly `width * height` entries
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> Result<Self, DisplayError> {
        if pixels.len() != width * height {
            return Err(DisplayError::BufferSize);
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Address handed to the scan-out DMA
    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    /// Overwrite every pixel with a raw value
    pub fn clear_raw(&mut self, value: u32) {
        self.pixels.fill(value);
    }

    /// Read a pixel, `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel; writes outside the buffer are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = value;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, encode(color));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        // Clipped to the buffer, so the coordinates are non-negative
        let x0 = area.top_left.x as usize;
        let y0 = area.top_left.y as usize;
        let w = area.size.width as usize;
        let value = encode(color);

        for y in y0..y0 + area.size.height as usize {
            let row = y * self.width + x0;
            self.pixels[row..row + w].fill(value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, StyledDrawable};
    use std::vec;

    #[test]
    fn test_size_mismatch_rejected() {
        let mut pixels = vec![0u32; 10];
        assert_eq!(
            Framebuffer::new(&mut pixels, 4, 4).err(),
            Some(DisplayError::BufferSize)
        );
    }

    #[test]
    fn test_pixel_access() {
        let mut pixels = vec![0u32; 16];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4).unwrap();

        fb.set_pixel(1, 2, 0xABCDEF);
        assert_eq!(fb.pixel(1, 2), Some(0xABCDEF));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixel(-1, 0), None);

        // Dropped silently
        fb.set_pixel(-1, 9, 1);
        drop(fb);
        assert_eq!(pixels[2 * 4 + 1], 0xABCDEF);
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_color_encoding() {
        assert_eq!(encode(Rgb888::WHITE), 0x00FF_FFFF);
        assert_eq!(encode(Rgb888::BLACK), BACKGROUND);
        assert_eq!(encode(Rgb888::new(0x12, 0x34, 0x56)), 0x0012_3456);
    }

    #[test]
    fn test_fill_is_clipped() {
        let mut pixels = vec![0u32; 16];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4).unwrap();

        Rectangle::new(Point::new(2, 2), Size::new(10, 10))
            .draw_styled(&PrimitiveStyle::with_fill(Rgb888::WHITE), &mut fb)
            .unwrap();

        assert_eq!(fb.pixel(1, 1), Some(BACKGROUND));
        assert_eq!(fb.pixel(2, 2), Some(0x00FF_FFFF));
        assert_eq!(fb.pixel(3, 3), Some(0x00FF_FFFF));
        drop(fb);
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 4);
    }

    #[test]
    fn test_clear_raw() {
        let mut pixels = vec![7u32; 16];
        let mut fb = Framebuffer::new(&mut pixels, 4, 4).unwrap();
        fb.clear_raw(BACKGROUND);
        drop(fb);
        assert!(pixels.iter().all(|&p| p == BACKGROUND));
    }
}
