//! Interrupt handlers
//!
//! The platform funnels every peripheral line into the machine external
//! interrupt. The dispatcher reads the pending mask and runs the handlers
//! for the lines that are asserted. Handlers run to completion with
//! interrupts disabled, never block, and only touch the statics in
//! [`crate::channels`].

use defmt::*;

use saltus_core::input::service_keyboard;
use saltus_hal::VideoDevice;
use saltus_hal_harvey::{InterruptController, IrqLines, Keyboard, System, Video};

use crate::channels::{FRAME_SIGNAL, INPUT_FLAGS};

/// Unmask the video and keyboard lines and enable external interrupts
pub fn enable() {
    // SAFETY: boot is the only writer of the line enables
    let mut irq = unsafe { InterruptController::steal() };
    irq.enable(IrqLines::VIDEO | IrqLines::KEYBOARD);

    // SAFETY: handlers and the statics they use are initialized
    unsafe {
        riscv::register::mie::set_mext();
        riscv::register::mstatus::set_mie();
    }
}

/// Machine external interrupt entry (bound by riscv-rt)
#[allow(non_snake_case)]
#[no_mangle]
extern "C" fn MachineExternal() {
    // SAFETY: read-only use of the pending mask
    let irq = unsafe { InterruptController::steal() };
    let pending = irq.pending();

    if pending.contains(IrqLines::VIDEO) {
        on_vsync();
    }
    if pending.contains(IrqLines::KEYBOARD) {
        on_keyboard();
    }
}

/// Vertical sync: wake the render task and acknowledge
fn on_vsync() {
    // Coalesces with a permit the render task has not consumed yet
    FRAME_SIGNAL.signal();

    // SAFETY: after boot only this handler writes the video status register
    let mut video = unsafe { Video::steal() };
    video.acknowledge();
}

/// Keyboard FIFO non-empty: drain it into the input flags
fn on_keyboard() {
    // SAFETY: this handler is the only FIFO reader
    let mut keyboard = unsafe { Keyboard::steal() };
    // SAFETY: halting is final
    let mut system = unsafe { System::steal() };

    let report = service_keyboard(&mut keyboard, &INPUT_FLAGS.latch(), &mut system);
    if report.ignored > 0 {
        trace!("Keyboard: {} of {} events ignored", report.ignored, report.events);
    }
    if report.capped {
        trace!("Keyboard drain capped after {} events", report.events);
    }
}
