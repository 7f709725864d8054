//! Peripheral base addresses

/// Video controller register block
pub const VIDEO_BASE: usize = 0x4000_0000;

/// Keyboard controller register block
pub const KEYBOARD_BASE: usize = 0x4000_1000;

/// Platform interrupt controller
pub const IRQ_BASE: usize = 0x4000_2000;

/// System control block
pub const SYSCTL_BASE: usize = 0x4000_3000;
