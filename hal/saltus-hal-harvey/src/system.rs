//! System control

use volatile_register::WO;

use saltus_hal::SystemControl;

use crate::map::SYSCTL_BASE;

/// System control registers
#[repr(C)]
pub struct SystemRegisters {
    /// Any write stops the processor
    pub halt: WO<u32>,
}

/// System control driver
pub struct System {
    regs: &'static SystemRegisters,
}

impl System {
    /// Take the system control block
    ///
    /// # Safety
    /// Halting is final, so concurrent use is harmless; the block is still
    /// a singleton in hardware.
    pub unsafe fn steal() -> Self {
        Self {
            regs: unsafe { &*(SYSCTL_BASE as *const SystemRegisters) },
        }
    }
}

impl SystemControl for System {
    fn halt(&mut self) -> ! {
        unsafe { self.regs.halt.write(1) }
        // The write stops the core; spin in case it takes a few cycles
        loop {
            core::hint::spin_loop();
        }
    }
}
