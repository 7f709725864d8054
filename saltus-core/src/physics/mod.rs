//! Per-frame physics
//!
//! One rigid body moving on the vertical axis only, with ground contact
//! as the single collision.

pub mod body;

pub use body::{Body, BodyEvent};
