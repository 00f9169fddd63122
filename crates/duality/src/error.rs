//! Error types shared by the duality pipeline.
//!
//! - `DualityError`: raised by a single transform or hull step.
//! - `PipelineError`: a `DualityError` tagged with the pipeline `Stage` it
//!   surfaced in, so callers can report which stage failed and why.
//!
//! Absence of an intersection is never an error; see `geom::intersect`,
//! `geom::segment_intersect` and `merge::merge_envelopes`.

use std::fmt;

/// Error type shared by all transforms and the hull stepper.
#[derive(Clone, Debug, PartialEq)]
pub enum DualityError {
    /// A geometric precondition failed (vertical line, center on the x-axis,
    /// zero intercept, parallel lines, coincident x-coordinates, ...).
    DegenerateInput { reason: String },
    /// Caller misuse, e.g. stepping a finished hull.
    InvalidState { reason: String },
}

impl DualityError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }

    #[inline]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

impl fmt::Display for DualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { reason } => write!(f, "degenerate input: {reason}"),
            Self::InvalidState { reason } => write!(f, "invalid state: {reason}"),
        }
    }
}

impl std::error::Error for DualityError {}

/// Pipeline stages, in data-flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Dualize,
    Hull,
    Envelope,
    Merge,
    Arcs,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Dualize => "dualize",
            Stage::Hull => "hull",
            Stage::Envelope => "envelope",
            Stage::Merge => "merge",
            Stage::Arcs => "arcs",
        };
        f.write_str(name)
    }
}

/// A `DualityError` annotated with the stage that raised it.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineError {
    pub stage: Stage,
    pub source: DualityError,
}

impl PipelineError {
    #[inline]
    pub(crate) fn at(stage: Stage) -> impl FnOnce(DualityError) -> Self {
        move |source| Self { stage, source }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stage failed: {}", self.stage, self.source)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_error_names_stage_and_reason() {
        let err = PipelineError::at(Stage::Dualize)(DualityError::degenerate("center on x-axis"));
        assert_eq!(
            err.to_string(),
            "dualize stage failed: degenerate input: center on x-axis"
        );
        let src = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(src.as_deref(), Some("degenerate input: center on x-axis"));
        assert!(err.source.is_degenerate());
    }
}
