//! Platform control

/// Whole-system control operations
pub trait SystemControl {
    /// Stop the processor immediately
    ///
    /// No cleanup is performed and the call never returns.
    fn halt(&mut self) -> !;
}
