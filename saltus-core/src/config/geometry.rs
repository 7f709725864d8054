//! Screen geometry

/// Visible width in pixels
pub const SCREEN_WIDTH: usize = 1024;

/// Visible height in pixels
pub const SCREEN_HEIGHT: usize = 480;

/// Number of pixels in one framebuffer
pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Where things sit on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Screen width in pixels
    pub width: i32,
    /// Screen height in pixels (also the ground line)
    pub height: i32,
    /// Column of the character's left edge
    pub anchor_x: i32,
    /// Top-left corner of the score text
    pub score_origin: (i32, i32),
}

impl Geometry {
    /// Geometry of the 1024x480 video mode
    pub const DEFAULT: Self = Self {
        width: SCREEN_WIDTH as i32,
        height: SCREEN_HEIGHT as i32,
        anchor_x: SCREEN_WIDTH as i32 / 6,
        score_origin: (20, 20),
    };

    /// Y coordinate of the ground line
    ///
    /// Positions grow downward, so the ground is the bottom edge.
    pub const fn ground_y(&self) -> i32 {
        self.height
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let geometry = Geometry::default();
        assert_eq!(geometry.ground_y(), 480);
        assert_eq!(geometry.anchor_x, 170);
        assert_eq!(SCREEN_PIXELS, 491_520);
    }
}
