//! Platform interrupt controller
//!
//! Peripheral interrupt lines are masked here and funnelled into the
//! hart's machine external interrupt.

use bitflags::bitflags;
use volatile_register::{RO, RW};

use crate::map::IRQ_BASE;

/// Interrupt controller registers
#[repr(C)]
pub struct IrqRegisters {
    /// Enabled lines
    pub enable: RW<u32>,
    /// Lines currently asserted
    pub pending: RO<u32>,
}

bitflags! {
    /// Peripheral interrupt lines
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IrqLines: u32 {
        const UART = 1 << 0;
        const VIDEO = 1 << 1;
        const KEYBOARD = 1 << 2;
    }
}

/// Interrupt controller driver
pub struct InterruptController {
    regs: &'static IrqRegisters,
}

impl InterruptController {
    /// Take the interrupt controller
    ///
    /// # Safety
    /// Line enables are written at boot only.
    pub unsafe fn steal() -> Self {
        Self {
            regs: unsafe { &*(IRQ_BASE as *const IrqRegisters) },
        }
    }

    /// Unmask the given lines, keeping the ones already enabled
    pub fn enable(&mut self, lines: IrqLines) {
        let enabled = IrqLines::from_bits_retain(self.regs.enable.read()) | lines;
        unsafe { self.regs.enable.write(enabled.bits()) }
    }

    /// Lines that are both asserted and enabled
    pub fn pending(&self) -> IrqLines {
        IrqLines::from_bits_truncate(self.regs.pending.read() & self.regs.enable.read())
    }
}
