//! Video controller

use bitflags::bitflags;
use volatile_register::RW;

use saltus_hal::VideoDevice;

use crate::map::VIDEO_BASE;

/// Video controller registers
#[repr(C)]
pub struct VideoRegisters {
    /// Visible width in pixels
    pub width: RW<u32>,
    /// Visible height in pixels
    pub height: RW<u32>,
    /// Framebuffer base address for scan-out DMA
    pub dma_addr: RW<u32>,
    /// Control register
    pub cr: RW<u32>,
    /// Status register; write 0 to acknowledge the vsync interrupt
    pub sr: RW<u32>,
}

bitflags! {
    /// Video control register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VideoControl: u32 {
        /// Scan-out enabled
        const EN = 1 << 0;
        /// Vsync interrupt enabled
        const IE = 1 << 1;
    }
}

/// Video controller driver
pub struct Video {
    regs: &'static VideoRegisters,
}

impl Video {
    /// Take the video controller
    ///
    /// # Safety
    /// The caller must make sure no two contexts write the same register.
    /// Boot configures the controller; afterwards only the vsync handler
    /// touches the status register.
    pub unsafe fn steal() -> Self {
        Self {
            regs: unsafe { &*(VIDEO_BASE as *const VideoRegisters) },
        }
    }
}

impl VideoDevice for Video {
    fn set_width(&mut self, px: u32) {
        unsafe { self.regs.width.write(px) }
    }

    fn set_height(&mut self, px: u32) {
        unsafe { self.regs.height.write(px) }
    }

    fn set_framebuffer_address(&mut self, addr: *const u32) {
        // 32-bit address space
        unsafe { self.regs.dma_addr.write(addr as usize as u32) }
    }

    fn enable(&mut self, interrupts: bool) {
        let mut cr = VideoControl::EN;
        cr.set(VideoControl::IE, interrupts);
        unsafe { self.regs.cr.write(cr.bits()) }
    }

    fn acknowledge(&mut self) {
        unsafe { self.regs.sr.write(0) }
    }
}
