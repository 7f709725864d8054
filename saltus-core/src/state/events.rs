//! Events that advance the render loop

/// Render loop events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A frame permit was consumed
    FrameReady,
    /// The update step finished
    Updated,
    /// The framebuffer was redrawn
    Composed,
}
