//! Video controller abstraction
//!
//! The controller scans a framebuffer out of main memory by DMA and raises
//! an interrupt once per vertical sync.

/// Framebuffer scan-out device
pub trait VideoDevice {
    /// Set the visible width in pixels
    fn set_width(&mut self, px: u32);

    /// Set the visible height in pixels
    fn set_height(&mut self, px: u32);

    /// Point scan-out DMA at the first pixel of the framebuffer
    ///
    /// The buffer must stay alive for as long as scan-out is enabled.
    fn set_framebuffer_address(&mut self, addr: *const u32);

    /// Enable scan-out, optionally with the vsync interrupt
    fn enable(&mut self, interrupts: bool);

    /// Acknowledge a pending vsync interrupt (clears the status register)
    fn acknowledge(&mut self);
}
