//! Render loop state machine
//!
//! The loop is a single cycle with no terminal state. Making the phases
//! explicit lets the engine refuse out-of-order calls.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
