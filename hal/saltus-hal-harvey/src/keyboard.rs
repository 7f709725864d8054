//! Keyboard controller

use bitflags::bitflags;
use volatile_register::{RO, RW};

use saltus_hal::{KeyEvent, KeyboardDevice};

use crate::map::KEYBOARD_BASE;

/// Keyboard controller registers
#[repr(C)]
pub struct KeyboardRegisters {
    /// Status register
    pub sr: RO<u32>,
    /// Receive FIFO; each read pops one event
    pub data: RO<u32>,
    /// Control register
    pub cr: RW<u32>,
}

bitflags! {
    /// Keyboard status register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyboardStatus: u32 {
        const FIFO_NOT_EMPTY = 1 << 0;
    }

    /// Keyboard control register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyboardControl: u32 {
        /// Receive interrupt enabled
        const IE = 1 << 0;
    }
}

/// Data register: set on key press, clear on release
pub const DATA_PRESSED: u32 = 1 << 16;

/// Data register: key code field
pub const DATA_KEY_CODE_MASK: u32 = 0xFFFF;

/// Split a raw data register value into a key event
pub fn decode(raw: u32) -> KeyEvent {
    KeyEvent {
        pressed: raw & DATA_PRESSED != 0,
        code: (raw & DATA_KEY_CODE_MASK) as u16,
    }
}

/// Keyboard controller driver
pub struct Keyboard {
    regs: &'static KeyboardRegisters,
}

impl Keyboard {
    /// Take the keyboard controller
    ///
    /// # Safety
    /// Only the keyboard interrupt handler may read the FIFO once the
    /// interrupt is enabled.
    pub unsafe fn steal() -> Self {
        Self {
            regs: unsafe { &*(KEYBOARD_BASE as *const KeyboardRegisters) },
        }
    }

    pub fn status(&self) -> KeyboardStatus {
        KeyboardStatus::from_bits_truncate(self.regs.sr.read())
    }
}

impl KeyboardDevice for Keyboard {
    fn queue_not_empty(&self) -> bool {
        self.status().contains(KeyboardStatus::FIFO_NOT_EMPTY)
    }

    fn read(&mut self) -> KeyEvent {
        decode(self.regs.data.read())
    }

    fn enable_interrupts(&mut self) {
        let cr = KeyboardControl::from_bits_retain(self.regs.cr.read()) | KeyboardControl::IE;
        unsafe { self.regs.cr.write(cr.bits()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_press() {
        assert_eq!(decode(DATA_PRESSED | 122), KeyEvent::press(122));
    }

    #[test]
    fn test_decode_release() {
        assert_eq!(decode(115), KeyEvent::release(115));
    }

    #[test]
    fn test_decode_ignores_unknown_bits() {
        assert_eq!(decode(0x8000_0000 | DATA_PRESSED | 81), KeyEvent::press(81));
    }
}
