//! Render task
//!
//! The render loop: wait for vsync, step the simulation, redraw.
//! Never returns; the quit key halts the whole machine instead.

use defmt::*;

use saltus_core::physics::BodyEvent;
use saltus_core::scene::score;
use saltus_core::{render_frame, Engine, Geometry, Tuning};
use saltus_display::{Compositor, MonoFontRenderer, SilhouetteSprites};

use crate::channels::{FRAME_SIGNAL, INPUT_FLAGS};

/// Frames between progress log lines (10 s at 60 Hz)
const PROGRESS_INTERVAL: u32 = 600;

/// Compositor over the static framebuffer with the stock renderers
pub type FrameCompositor = Compositor<'static, SilhouetteSprites, MonoFontRenderer>;

/// Render task - owns the simulation and the framebuffer writer
#[embassy_executor::task]
pub async fn render_task(mut compositor: FrameCompositor) {
    info!("Render task started");

    let mut engine = Engine::new(Tuning::DEFAULT, &Geometry::DEFAULT);

    loop {
        let result = render_frame(&FRAME_SIGNAL, &INPUT_FLAGS, &mut engine, &mut compositor).await;
        let frame = engine.frame();

        match result {
            Ok(Some(BodyEvent::Jumped)) => debug!("Frame {}: jump", frame),
            Ok(Some(BodyEvent::Landed)) => debug!("Frame {}: landed", frame),
            Ok(None) => {}
            Err(e) => warn!("Frame {} not drawn: {:?}", frame, e),
        }

        // The next vsync arrived before this frame was done
        if FRAME_SIGNAL.is_pending() {
            trace!("Frame {} overran vsync", frame);
        }

        if frame % PROGRESS_INTERVAL == 0 {
            trace!("Frame {}, score {}", frame, score(frame));
        }
    }
}
