//! Key bindings

/// Platform key codes the game reacts to
pub mod code {
    pub const DOWN: u16 = 81;
    pub const UP: u16 = 82;
    pub const Q: u16 = 113;
    pub const S: u16 = 115;
    pub const Z: u16 = 122;
}

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Leave the ground
    Jump,
    /// Duck while held
    Crouch,
    /// Stop the machine
    Quit,
}

/// Key code to action table
///
/// Several physical keys may map to the same action.
pub const BINDINGS: [(u16, Action); 5] = [
    (code::Z, Action::Jump),
    (code::UP, Action::Jump),
    (code::S, Action::Crouch),
    (code::DOWN, Action::Crouch),
    (code::Q, Action::Quit),
];

/// Look up the action bound to a key code
pub fn action_for(code: u16) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|(_, action)| *action)
}
