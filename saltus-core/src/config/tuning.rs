//! Physics and sprite tuning

use super::geometry::Geometry;

/// Per-stance constants
///
/// Crouching changes both the silhouette and how hard the character is
/// pulled down, so the two travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stance {
    /// Downward acceleration per frame (pixels/frame²)
    pub gravity: i32,
    /// Sprite width in pixels
    pub width: i32,
    /// Sprite height in pixels
    pub height: i32,
}

/// Physics tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuning {
    /// Velocity assigned when a jump starts (negative = upward)
    pub jump_impulse: i32,
    /// Constants while standing
    pub standing: Stance,
    /// Constants while crouch is held
    pub crouched: Stance,
}

/// Reasons a tuning set is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TuningError {
    /// Jump impulse must point upward
    JumpImpulseNotNegative,
    /// Gravity must pull the character back to the ground
    GravityNotPositive,
    /// Sprite does not fit between the top of the screen and the ground
    SpriteTallerThanScreen,
    /// Sprite sticks out past the right edge at the anchor column
    SpriteWiderThanScreen,
}

impl Tuning {
    /// Tuning used by the firmware
    pub const DEFAULT: Self = Self {
        jump_impulse: -60,
        standing: Stance {
            gravity: 5,
            width: 96,
            height: 98,
        },
        crouched: Stance {
            gravity: 15,
            width: 122,
            height: 71,
        },
    };

    /// Select the stance constants for the given crouch state
    pub const fn stance(&self, crouched: bool) -> &Stance {
        if crouched {
            &self.crouched
        } else {
            &self.standing
        }
    }

    /// Check the tuning against the screen it will be drawn on
    pub const fn validate(&self, geometry: &Geometry) -> Result<(), TuningError> {
        if self.jump_impulse >= 0 {
            return Err(TuningError::JumpImpulseNotNegative);
        }

        let stances = [self.standing, self.crouched];
        let mut i = 0;
        while i < stances.len() {
            let stance = stances[i];
            if stance.gravity <= 0 {
                return Err(TuningError::GravityNotPositive);
            }
            if stance.height <= 0 || stance.height > geometry.height {
                return Err(TuningError::SpriteTallerThanScreen);
            }
            if stance.width <= 0 || geometry.anchor_x + stance.width > geometry.width {
                return Err(TuningError::SpriteWiderThanScreen);
            }
            i += 1;
        }

        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::DEFAULT.validate(&Geometry::DEFAULT), Ok(()));
    }

    #[test]
    fn test_stance_selection() {
        let tuning = Tuning::DEFAULT;
        assert_eq!(tuning.stance(false).gravity, 5);
        assert_eq!(tuning.stance(false).height, 98);
        assert_eq!(tuning.stance(true).gravity, 15);
        assert_eq!(tuning.stance(true).width, 122);
    }

    #[test]
    fn test_upward_gravity_rejected() {
        let mut tuning = Tuning::DEFAULT;
        tuning.crouched.gravity = 0;
        assert_eq!(
            tuning.validate(&Geometry::DEFAULT),
            Err(TuningError::GravityNotPositive)
        );
    }

    #[test]
    fn test_downward_jump_rejected() {
        let mut tuning = Tuning::DEFAULT;
        tuning.jump_impulse = 10;
        assert_eq!(
            tuning.validate(&Geometry::DEFAULT),
            Err(TuningError::JumpImpulseNotNegative)
        );
    }

    #[test]
    fn test_oversized_sprite_rejected() {
        let mut tuning = Tuning::DEFAULT;
        tuning.standing.height = 481;
        assert_eq!(
            tuning.validate(&Geometry::DEFAULT),
            Err(TuningError::SpriteTallerThanScreen)
        );

        let mut tuning = Tuning::DEFAULT;
        tuning.crouched.width = 900;
        assert_eq!(
            tuning.validate(&Geometry::DEFAULT),
            Err(TuningError::SpriteWiderThanScreen)
        );
    }
}
