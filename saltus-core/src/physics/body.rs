//! Character body and the update step

use crate::config::{Geometry, Tuning};
use crate::input::InputReader;

/// Notable transitions produced by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BodyEvent {
    /// Left the ground this tick
    Jumped,
    /// Touched down this tick
    Landed,
}

/// Simulation state of the character
///
/// `position_y` is the bottom edge of the sprite, measured downward from
/// the top of the screen. The ground line is the screen height.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Body {
    position_y: i32,
    velocity_y: i32,
    grounded: bool,
    crouched: bool,
    gravity: i32,
    width: i32,
    height: i32,
    ground_y: i32,
    tuning: Tuning,
}

impl Body {
    /// Standing on the ground, at rest
    pub fn new(tuning: Tuning, geometry: &Geometry) -> Self {
        let stance = tuning.standing;
        Self {
            position_y: geometry.ground_y(),
            velocity_y: 0,
            grounded: true,
            crouched: false,
            gravity: stance.gravity,
            width: stance.width,
            height: stance.height,
            ground_y: geometry.ground_y(),
            tuning,
        }
    }

    /// Advance one frame
    ///
    /// A jump taken this tick is integrated in the same tick, so the body
    /// is never off the ground while sitting on the ground line.
    /// Integration uses the gravity derived at the end of the previous
    /// step; crouch is applied after it, so toggling crouch mid-air takes
    /// effect on the next tick.
    pub fn step(&mut self, input: &InputReader<'_>) -> Option<BodyEvent> {
        let mut event = None;

        if self.grounded && input.take_jump() {
            self.velocity_y = self.tuning.jump_impulse;
            self.grounded = false;
            event = Some(BodyEvent::Jumped);
        }

        if !self.grounded {
            self.velocity_y += self.gravity;
            self.position_y += self.velocity_y;

            if self.position_y >= self.ground_y {
                self.position_y = self.ground_y;
                self.velocity_y = 0;
                self.grounded = true;
                event = Some(BodyEvent::Landed);
            }
        }

        self.crouched = input.crouch_held();
        let stance = self.tuning.stance(self.crouched);
        self.gravity = stance.gravity;
        self.width = stance.width;
        self.height = stance.height;

        input.publish_grounded(self.grounded);

        event
    }

    /// Bottom edge of the sprite
    pub fn position_y(&self) -> i32 {
        self.position_y
    }

    /// Vertical velocity (negative while ascending)
    pub fn velocity_y(&self) -> i32 {
        self.velocity_y
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_crouched(&self) -> bool {
        self.crouched
    }

    /// Gravity the next airborne step will apply
    pub fn gravity(&self) -> i32 {
        self.gravity
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Top edge of the sprite
    pub fn top_y(&self) -> i32 {
        self.position_y - self.height
    }

    pub fn ground_y(&self) -> i32 {
        self.ground_y
    }
}
