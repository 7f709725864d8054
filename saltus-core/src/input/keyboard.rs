//! Keyboard interrupt policy
//!
//! [`service_keyboard`] is the body of the keyboard interrupt handler: it
//! drains the device FIFO and applies the key bindings to the input
//! latch. It never blocks and never touches drawing code.

use saltus_hal::{KeyEvent, KeyboardDevice, SystemControl};

use super::flags::KeyLatch;
use super::keys::{action_for, Action};

/// Upper bound on FIFO reads per interrupt
///
/// The interrupt is level-triggered, so anything left behind raises it
/// again right away. The cap only matters if the device keeps reporting a
/// non-empty queue forever.
pub const MAX_DRAIN_EVENTS: usize = 32;

/// What a single key event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOutcome {
    /// Jump request latched
    Jump,
    /// Jump pressed in the air; dropped
    JumpIgnored,
    /// Crouch key went down
    CrouchPressed,
    /// Crouch key came up
    CrouchReleased,
    /// Quit key pressed
    Quit,
    /// Unbound key, or a release with no meaning
    Ignored,
}

/// Summary of one drain pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrainReport {
    /// Events read from the FIFO
    pub events: usize,
    /// Events that changed no flag
    pub ignored: usize,
    /// True if the pass stopped at [`MAX_DRAIN_EVENTS`] with data left
    pub capped: bool,
}

/// Apply one key event to the latch
pub fn handle_key(latch: &KeyLatch<'_>, event: KeyEvent) -> KeyOutcome {
    match (action_for(event.code), event.pressed) {
        (Some(Action::Jump), true) => {
            if latch.request_jump() {
                KeyOutcome::Jump
            } else {
                KeyOutcome::JumpIgnored
            }
        }
        (Some(Action::Crouch), true) => {
            latch.set_crouch(true);
            KeyOutcome::CrouchPressed
        }
        (Some(Action::Crouch), false) => {
            latch.set_crouch(false);
            KeyOutcome::CrouchReleased
        }
        (Some(Action::Quit), true) => KeyOutcome::Quit,
        _ => KeyOutcome::Ignored,
    }
}

/// Drain the keyboard FIFO into the latch
///
/// Halts the system on the quit key; events still queued behind it are
/// never read.
pub fn service_keyboard<K, S>(
    keyboard: &mut K,
    latch: &KeyLatch<'_>,
    system: &mut S,
) -> DrainReport
where
    K: KeyboardDevice,
    S: SystemControl,
{
    let mut report = DrainReport::default();

    while keyboard.queue_not_empty() {
        if report.events == MAX_DRAIN_EVENTS {
            report.capped = true;
            break;
        }

        let event = keyboard.read();
        report.events += 1;

        match handle_key(latch, event) {
            KeyOutcome::Quit => system.halt(),
            KeyOutcome::Ignored | KeyOutcome::JumpIgnored => report.ignored += 1,
            _ => {}
        }
    }

    report
}
