//! Sprite selection

use crate::physics::Body;

/// Frames per animation cycle (two poses, half the cycle each)
pub const ANIMATION_PERIOD: u32 = 10;

/// Entries of the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpriteId {
    /// Airborne pose (not animated)
    Jump,
    /// First running pose
    Run1,
    /// Second running pose
    Run2,
    /// First crouching pose
    Crouch1,
    /// Second crouching pose
    Crouch2,
    /// Game-over pose
    ///
    /// Part of the sprite sheet but no state selects it: there is no
    /// obstacle to collide with yet.
    Dead,
}

impl SpriteId {
    /// True for the low-profile crouch poses
    pub fn is_crouch(&self) -> bool {
        matches!(self, SpriteId::Crouch1 | SpriteId::Crouch2)
    }
}

/// Pick the sprite for the current body state and frame number
pub fn select_sprite(body: &Body, frame: u32) -> SpriteId {
    let first_half = frame % ANIMATION_PERIOD < ANIMATION_PERIOD / 2;

    match (body.is_grounded(), body.is_crouched(), first_half) {
        (false, _, _) => SpriteId::Jump,
        (true, false, true) => SpriteId::Run1,
        (true, false, false) => SpriteId::Run2,
        (true, true, true) => SpriteId::Crouch1,
        (true, true, false) => SpriteId::Crouch2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Geometry, Tuning};
    use crate::input::InputFlags;

    fn body_with(crouch: bool, airborne: bool) -> Body {
        let flags = InputFlags::new();
        let mut body = Body::new(Tuning::DEFAULT, &Geometry::DEFAULT);
        flags.latch().set_crouch(crouch);
        if airborne {
            flags.latch().request_jump();
        }
        body.step(&flags.reader());
        body
    }

    #[test]
    fn test_run_cycle() {
        let body = body_with(false, false);
        assert_eq!(select_sprite(&body, 23), SpriteId::Run1);
        assert_eq!(select_sprite(&body, 27), SpriteId::Run2);
        assert_eq!(select_sprite(&body, 30), SpriteId::Run1);
        assert_eq!(select_sprite(&body, 34), SpriteId::Run1);
        assert_eq!(select_sprite(&body, 35), SpriteId::Run2);
    }

    #[test]
    fn test_crouch_cycle() {
        let body = body_with(true, false);
        assert_eq!(select_sprite(&body, 3), SpriteId::Crouch1);
        assert_eq!(select_sprite(&body, 9), SpriteId::Crouch2);
    }

    #[test]
    fn test_airborne_is_static() {
        let body = body_with(false, true);
        for frame in 0..ANIMATION_PERIOD {
            assert_eq!(select_sprite(&body, frame), SpriteId::Jump);
        }

        // Crouching in the air keeps the jump pose
        let body = body_with(true, true);
        assert_eq!(select_sprite(&body, 7), SpriteId::Jump);
    }

    #[test]
    fn test_dead_never_selected() {
        for (crouch, airborne) in [(false, false), (true, false), (false, true), (true, true)] {
            let body = body_with(crouch, airborne);
            for frame in 0..ANIMATION_PERIOD * 3 {
                assert_ne!(select_sprite(&body, frame), SpriteId::Dead);
            }
        }
    }

    #[test]
    fn test_crouch_poses() {
        assert!(SpriteId::Crouch1.is_crouch());
        assert!(SpriteId::Crouch2.is_crouch());
        assert!(!SpriteId::Run1.is_crouch());
        assert!(!SpriteId::Dead.is_crouch());
    }
}
