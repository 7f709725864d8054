//! Keyboard abstraction
//!
//! The keyboard exposes a receive FIFO of key transitions. Its interrupt
//! is level-triggered: it stays asserted while the FIFO is non-empty.

/// A single key transition read from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// True on press, false on release
    pub pressed: bool,
    /// Platform key code
    pub code: u16,
}

impl KeyEvent {
    /// Key press event
    pub const fn press(code: u16) -> Self {
        Self {
            pressed: true,
            code,
        }
    }

    /// Key release event
    pub const fn release(code: u16) -> Self {
        Self {
            pressed: false,
            code,
        }
    }
}

/// Keyboard receive queue
pub trait KeyboardDevice {
    /// Check whether at least one event is waiting in the queue
    fn queue_not_empty(&self) -> bool;

    /// Pop the oldest event from the queue
    ///
    /// Only meaningful after [`queue_not_empty`](Self::queue_not_empty)
    /// returned true.
    fn read(&mut self) -> KeyEvent;

    /// Enable the receive interrupt
    fn enable_interrupts(&mut self);
}
