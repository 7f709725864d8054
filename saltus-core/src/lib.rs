//! Board-agnostic core logic for the Saltus runner game
//!
//! This crate contains everything that does not touch real hardware:
//!
//! - Compile-time tuning (physics constants, screen geometry)
//! - Input flags shared with the keyboard interrupt, and the key policy
//! - Per-frame physics (gravity, jump, crouch)
//! - Sprite selection and score
//! - The coalescing frame signal
//! - Render loop state machine and engine

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod input;
pub mod physics;
pub mod scene;
pub mod state;
pub mod sync;

pub use config::{Geometry, Tuning, TuningError};
pub use engine::{render_frame, Compose, Engine, FrameView};
pub use input::InputFlags;
pub use physics::Body;
pub use scene::SpriteId;
pub use sync::FrameSignal;
