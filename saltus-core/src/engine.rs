//! Render loop engine
//!
//! [`Engine`] owns the simulation and the frame counter. The render task
//! drives it one cycle at a time with [`render_frame`]:
//!
//! ```text
//! WaitingForFrame --permit--> Updating --step--> Compositing --draw--> WaitingForFrame
//! ```
//!
//! The frame signal wait is the only suspension point.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::config::{Geometry, Tuning};
use crate::input::InputFlags;
use crate::physics::{Body, BodyEvent};
use crate::state::{Event, Phase};
use crate::sync::FrameSignal;

/// Read-only snapshot handed to the compositor
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Simulation state after this frame's update
    pub body: &'a Body,
    /// Frames consumed since boot (this frame included)
    pub frame: u32,
}

/// Something that can redraw the framebuffer for a frame
pub trait Compose {
    type Error;

    /// Replace the framebuffer contents for this frame
    fn compose(&mut self, view: &FrameView<'_>) -> Result<(), Self::Error>;
}

/// Render loop context
#[derive(Debug, Clone)]
pub struct Engine {
    body: Body,
    frame: u32,
    phase: Phase,
}

impl Engine {
    pub fn new(tuning: Tuning, geometry: &Geometry) -> Self {
        Self {
            body: Body::new(tuning, geometry),
            frame: 0,
            phase: Phase::default(),
        }
    }

    /// A frame permit was consumed
    ///
    /// Counts the frame. Ignored unless the loop is waiting.
    pub fn begin_frame(&mut self) {
        if self.phase.is_waiting() {
            self.frame = self.frame.wrapping_add(1);
            self.phase = self.phase.transition(Event::FrameReady);
        }
    }

    /// Run the update step for the current frame
    pub fn update(&mut self, input: &InputFlags) -> Option<BodyEvent> {
        if self.phase != Phase::Updating {
            return None;
        }

        let event = self.body.step(&input.reader());
        self.phase = self.phase.transition(Event::Updated);
        event
    }

    /// The framebuffer has been redrawn (or given up on) for this frame
    pub fn finish_frame(&mut self) {
        self.phase = self.phase.transition(Event::Composed);
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            body: &self.body,
            frame: self.frame,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Run one full render loop cycle
///
/// Waits for a frame permit, steps the simulation and redraws. A
/// compositor error is returned after the engine has already gone back
/// to waiting, so the caller can log it and carry on.
pub async fn render_frame<M, C>(
    signal: &FrameSignal<M>,
    input: &InputFlags,
    engine: &mut Engine,
    compositor: &mut C,
) -> Result<Option<BodyEvent>, C::Error>
where
    M: RawMutex,
    C: Compose,
{
    signal.wait().await;

    engine.begin_frame();
    let event = engine.update(input);
    let composed = compositor.compose(&engine.view());
    engine.finish_frame();

    composed.map(|()| event)
}
