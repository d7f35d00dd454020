use thiserror::Error;

/// Why a refinement stopped early.
///
/// Refinement is not rolled back: segments handled before the failing one
/// keep their inserted hinges.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RefineError {
    /// The chosen template starts and ends at the same x or the same y, so
    /// there is no scale that maps it onto a segment.
    #[error("degenerate template: span is ({x_span}, {y_span})")]
    DegenerateTemplate { x_span: f64, y_span: f64 },

    /// There was no template to choose from.
    #[error("template pool is empty")]
    EmptyPool,
}
