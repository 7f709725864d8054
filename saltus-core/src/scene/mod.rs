//! What to draw for a given frame
//!
//! Pure selection logic; the actual pixels are written by the display
//! crate.

pub mod score;
pub mod sprite;

pub use score::{score, score_text, ScoreText, FRAMES_PER_POINT};
pub use sprite::{select_sprite, SpriteId, ANIMATION_PERIOD};
