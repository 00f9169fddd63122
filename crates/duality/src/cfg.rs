//! Pipeline configuration (tolerances and infinity stand-ins).
//!
//! Policy
//! - Defaults reproduce the classic fixed constants: rays at |x| = 1000 for
//!   the upper envelope and |x| = 1010 for the lower one. The two magnitudes
//!   differ so synthetic points of the two envelopes never share an x.
//! - `RayExtent::Adaptive` derives the magnitude from the interior envelope
//!   vertices instead, for inputs whose geometry exceeds the fixed box.

use crate::error::DualityError;

/// Default stand-in for +/- infinity on the upper envelope.
pub const UPPER_EXTENT: f64 = 1000.0;
/// Default stand-in for +/- infinity on the lower envelope.
pub const LOWER_EXTENT: f64 = 1010.0;

/// How far out the synthetic ray endpoints of an envelope are placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayExtent {
    Fixed { upper: f64, lower: f64 },
    /// `upper = max(min_upper, 2 * max|x| + 1)` over interior vertices,
    /// `lower = upper * ratio`.
    Adaptive { min_upper: f64, ratio: f64 },
}

impl Default for RayExtent {
    fn default() -> Self {
        RayExtent::Fixed {
            upper: UPPER_EXTENT,
            lower: LOWER_EXTENT,
        }
    }
}

impl RayExtent {
    /// Resolve to `(upper, lower)` magnitudes given the x-coordinates of all
    /// interior envelope vertices.
    pub fn resolve<I>(&self, interior_xs: I) -> (f64, f64)
    where
        I: IntoIterator<Item = f64>,
    {
        match *self {
            RayExtent::Fixed { upper, lower } => (upper, lower),
            RayExtent::Adaptive { min_upper, ratio } => {
                let reach = interior_xs
                    .into_iter()
                    .filter(|x| x.is_finite())
                    .fold(0.0_f64, |acc, x| acc.max(x.abs()));
                let upper = min_upper.max(2.0 * reach + 1.0);
                (upper, upper * ratio)
            }
        }
    }
}

/// What to do with a disk whose center lies on the x-axis (no dual line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisPolicy {
    /// Fail the dualize stage with `DegenerateInput`.
    #[default]
    Reject,
    /// Drop the disk and keep going.
    Skip,
}

/// Pipeline configuration.
#[derive(Clone, Copy, Debug)]
pub struct DualityCfg {
    pub extent: RayExtent,
    pub axis_policy: AxisPolicy,
    /// Dual points of one orientation group closer than this in x are
    /// treated as parallel dual lines.
    pub eps_dual_x: f64,
}

impl Default for DualityCfg {
    fn default() -> Self {
        Self {
            extent: RayExtent::default(),
            axis_policy: AxisPolicy::Reject,
            eps_dual_x: 1e-12,
        }
    }
}

impl DualityCfg {
    pub fn validate(&self) -> Result<(), DualityError> {
        match self.extent {
            RayExtent::Fixed { upper, lower } => {
                if !(upper.is_finite() && lower.is_finite()) || upper <= 0.0 || lower <= 0.0 {
                    return Err(DualityError::degenerate(
                        "fixed ray extents must be finite and > 0",
                    ));
                }
                if upper == lower {
                    return Err(DualityError::degenerate(
                        "upper and lower ray extents must differ",
                    ));
                }
            }
            RayExtent::Adaptive { min_upper, ratio } => {
                if !min_upper.is_finite() || min_upper <= 0.0 {
                    return Err(DualityError::degenerate("min_upper must be finite and > 0"));
                }
                if !ratio.is_finite() || ratio <= 1.0 {
                    return Err(DualityError::degenerate("extent ratio must be > 1"));
                }
            }
        }
        if !self.eps_dual_x.is_finite() || self.eps_dual_x < 0.0 {
            return Err(DualityError::degenerate("eps_dual_x must be finite and >= 0"));
        }
        Ok(())
    }
}
