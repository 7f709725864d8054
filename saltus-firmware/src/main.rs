//! Saltus - Runner Game Firmware
//!
//! Firmware for the Harvey/MiniRISC platform. A single render task
//! redraws the 1024x480 framebuffer once per vsync; the video and
//! keyboard interrupts feed it through the statics in [`channels`].
//!
//! Named after the Latin "saltus" meaning "a leap".

#![no_std]
#![no_main]

use defmt::*;
use defmt_rtt as _;
use embassy_executor::Spawner;
use static_cell::ConstStaticCell;

use saltus_core::config::{SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
use saltus_core::{Geometry, Tuning};
use saltus_display::{Compositor, Framebuffer, MonoFontRenderer, SilhouetteSprites, BACKGROUND};
use saltus_hal::{KeyboardDevice, SystemControl, VideoDevice};
use saltus_hal_harvey::{Keyboard, System, Video};

mod channels;
mod interrupts;
mod tasks;

// Reject bad tuning at build time
const _: () = assert!(Tuning::DEFAULT.validate(&Geometry::DEFAULT).is_ok());

/// Scan-out buffer (lives in .bss, taken once at boot)
static FRAMEBUFFER: ConstStaticCell<[u32; SCREEN_PIXELS]> =
    ConstStaticCell::new([BACKGROUND; SCREEN_PIXELS]);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Saltus firmware starting...");

    if let Err(e) = Tuning::DEFAULT.validate(&Geometry::DEFAULT) {
        error!("Invalid tuning: {:?}", e);
        // SAFETY: nothing else is running yet
        unsafe { System::steal() }.halt();
    }
    info!("Tuning: {:?}", Tuning::DEFAULT);

    // Clear before scan-out starts reading
    let pixels = FRAMEBUFFER.take();
    pixels.fill(BACKGROUND);
    let framebuffer = match Framebuffer::new(pixels, SCREEN_WIDTH, SCREEN_HEIGHT) {
        Ok(fb) => fb,
        Err(e) => {
            error!("Framebuffer setup failed: {:?}", e);
            // SAFETY: nothing else is running yet
            unsafe { System::steal() }.halt();
        }
    };

    init_video(&framebuffer);
    info!("Video initialized: {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);

    // SAFETY: boot owns the keyboard until its interrupt is enabled
    let mut keyboard = unsafe { Keyboard::steal() };
    keyboard.enable_interrupts();
    info!("Keyboard initialized");

    let compositor = Compositor::new(
        framebuffer,
        SilhouetteSprites::new(&Tuning::DEFAULT),
        MonoFontRenderer::default(),
        Geometry::DEFAULT,
    );

    spawner.spawn(tasks::render_task(compositor)).unwrap();

    interrupts::enable();
    info!("Interrupts enabled, firmware running");
}

/// Point the video controller at the framebuffer and start scan-out
fn init_video(framebuffer: &Framebuffer<'_>) {
    // SAFETY: boot is the only user of the control registers
    let mut video = unsafe { Video::steal() };
    video.set_width(SCREEN_WIDTH as u32);
    video.set_height(SCREEN_HEIGHT as u32);
    video.set_framebuffer_address(framebuffer.as_ptr());
    video.enable(true);
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    error!("Panic: {}", Display2Format(info));
    // SAFETY: halting is final
    unsafe { System::steal() }.halt()
}
