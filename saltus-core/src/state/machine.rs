//! Render loop phases

use super::events::Event;

/// Render loop phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Blocked on the frame signal
    #[default]
    WaitingForFrame,
    /// Advancing the simulation
    Updating,
    /// Redrawing the framebuffer
    Compositing,
}

impl Phase {
    /// Process an event and return the next phase
    ///
    /// Events that do not apply to the current phase leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (WaitingForFrame, FrameReady) => Updating,
            (Updating, Updated) => Compositing,
            (Compositing, Composed) => WaitingForFrame,
            _ => self,
        }
    }

    /// Check if the loop is parked on the frame signal
    pub fn is_waiting(&self) -> bool {
        matches!(self, Phase::WaitingForFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let phase = Phase::default();
        assert!(phase.is_waiting());

        let phase = phase.transition(Event::FrameReady);
        assert_eq!(phase, Phase::Updating);

        let phase = phase.transition(Event::Updated);
        assert_eq!(phase, Phase::Compositing);

        let phase = phase.transition(Event::Composed);
        assert_eq!(phase, Phase::WaitingForFrame);
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        assert_eq!(
            Phase::WaitingForFrame.transition(Event::Composed),
            Phase::WaitingForFrame
        );
        assert_eq!(
            Phase::WaitingForFrame.transition(Event::Updated),
            Phase::WaitingForFrame
        );
        assert_eq!(
            Phase::Updating.transition(Event::FrameReady),
            Phase::Updating
        );
        assert_eq!(
            Phase::Compositing.transition(Event::Updated),
            Phase::Compositing
        );
    }
}
