//! Merge the upper and lower envelopes into the bounded region between them.
//!
//! Model
//! - The upper envelope `U` is the boundary of `y >= U(x)` (convex chain), the
//!   lower envelope `L` the boundary of `y <= L(x)` (concave chain). Because
//!   every disk passes through the origin, `{L >= U}` is a single interval
//!   unbounded on one side, so the chains cross at most once.
//! - After reversing `U` to ascending x, both chains are swept together by
//!   x-coordinate; each vertex starts a new edge on its chain which is tested
//!   against the current edge of the other chain.
//! - Reaching a chain's synthetic ray endpoint without a crossing means the
//!   region is empty.
//!
//! Output
//! - The boundary traversal of the kept side: lower prefix, crossing, upper
//!   prefix (region left of the crossing), or upper suffix, crossing, lower
//!   suffix (region right of it). Consecutive points always share a dual line.
//! - The side follows from the two edges meeting at the crossing: the region
//!   lies left of it iff the lower edge has the smaller slope.

use tracing::debug;

use crate::envelope::Envelope;
use crate::error::DualityError;
use crate::geom::{line_through, segment_intersect, Line, Point};
use crate::hull::HullKind;
use crate::transform::point_to_line;

/// Merged half-plane intersection boundary. Empty means the half-planes (and
/// the disks) have no common region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Crossing of the two chains plus the index of the last vertex before it on
/// each chain (upper chain indexed after reversal).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub point: Point,
    pub lower_index: usize,
    pub upper_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Lower,
    Upper,
}

/// First crossing of two x-ascending chains, or `None` if they never cross
/// before one of them runs into its ray endpoint.
pub fn crossing_of_chains(upper: &[Point], lower: &[Point]) -> Result<Option<Crossing>, DualityError> {
    if upper.len() < 2 || lower.len() < 2 {
        return Err(DualityError::degenerate(
            "both chains need at least one edge to be merged",
        ));
    }
    if let Some(point) = segment_intersect(lower[0], lower[1], upper[0], upper[1])? {
        return Ok(Some(Crossing {
            point,
            lower_index: 0,
            upper_index: 0,
        }));
    }

    let mut stops: Vec<(Point, Side)> = upper[1..]
        .iter()
        .map(|p| (*p, Side::Upper))
        .chain(lower[1..].iter().map(|p| (*p, Side::Lower)))
        .collect();
    stops.sort_by(|a, b| a.0.x.total_cmp(&b.0.x));

    let (mut lower_index, mut upper_index) = (0usize, 0usize);
    for (p, side) in stops {
        let (primary, secondary, primary_index, secondary_index) = match side {
            Side::Upper => (upper, lower, &mut upper_index, lower_index),
            Side::Lower => (lower, upper, &mut lower_index, upper_index),
        };
        let testing = *primary_index + 1;
        // a ray endpoint leaves no finite edge to test
        if testing + 1 >= primary.len() || secondary_index + 1 >= secondary.len() {
            return Ok(None);
        }
        debug_assert_eq!(p, primary[testing]);
        let hit = segment_intersect(
            p,
            primary[testing + 1],
            secondary[secondary_index],
            secondary[secondary_index + 1],
        )?;
        *primary_index = testing;
        if let Some(point) = hit {
            return Ok(Some(Crossing {
                point,
                lower_index,
                upper_index,
            }));
        }
    }
    Ok(None)
}

/// Abscissa where the upper and lower envelopes of two hull chains cross,
/// computed from the dual lines alone (no ray extent involved).
///
/// With every upper intercept positive and every lower one negative, the
/// feasible set `{x : L(x) >= U(x)}` is a ray `x >= x*` when every lower
/// slope exceeds every upper slope, a ray `x <= x*` when every lower slope is
/// below every upper slope, and empty otherwise. Each (upper, lower) pair of
/// lines bounds the ray at `(b_u - b_l) / (m_l - m_u)`; the tightest bound is
/// `x*`.
pub fn crossing_abscissa(upper_chain: &[Point], lower_chain: &[Point]) -> Option<f64> {
    if upper_chain.is_empty() || lower_chain.is_empty() {
        return None;
    }
    let uppers: Vec<Line> = upper_chain.iter().map(|p| point_to_line(*p)).collect();
    let lowers: Vec<Line> = lower_chain.iter().map(|p| point_to_line(*p)).collect();
    let (mut rightward, mut leftward) = (true, true);
    let (mut right, mut left) = (f64::NEG_INFINITY, f64::INFINITY);
    for u in &uppers {
        for l in &lowers {
            let k = l.slope - u.slope;
            let bound = (u.intercept - l.intercept) / k;
            rightward &= k > 0.0;
            leftward &= k < 0.0;
            if k > 0.0 {
                right = right.max(bound);
            } else if k < 0.0 {
                left = left.min(bound);
            }
        }
    }
    if rightward {
        Some(right)
    } else if leftward {
        Some(left)
    } else {
        None
    }
}

/// Merge an upper and a lower envelope. A missing side imposes no constraint.
pub fn merge_envelopes(
    upper: Option<&Envelope>,
    lower: Option<&Envelope>,
) -> Result<Polygon, DualityError> {
    if let Some(env) = upper.filter(|e| e.kind() != HullKind::Upper) {
        return Err(DualityError::invalid_state(format!(
            "expected an upper envelope, got {:?}",
            env.kind()
        )));
    }
    if let Some(env) = lower.filter(|e| e.kind() != HullKind::Lower) {
        return Err(DualityError::invalid_state(format!(
            "expected a lower envelope, got {:?}",
            env.kind()
        )));
    }
    let (upper, lower) = match (upper, lower) {
        (None, None) => return Ok(Polygon::default()),
        (Some(only), None) | (None, Some(only)) => {
            return Ok(Polygon {
                points: only.points().to_vec(),
            })
        }
        (Some(u), Some(l)) => (u, l),
    };

    let mut up: Vec<Point> = upper.points().to_vec();
    up.reverse();
    let low = lower.points();

    let Some(c) = crossing_of_chains(&up, low)? else {
        debug!(upper = up.len(), lower = low.len(), "envelopes do not cross");
        return Ok(Polygon::default());
    };
    // L - U grows to the left of the crossing iff the lower edge through it
    // is the flatter one; comparing the chain starts would mix two extents
    let lower_slope = line_through(low[c.lower_index], low[c.lower_index + 1])?.slope;
    let upper_slope = line_through(up[c.upper_index], up[c.upper_index + 1])?.slope;
    let crossing_left = lower_slope < upper_slope;
    debug!(
        x = c.point.x,
        y = c.point.y,
        lower_index = c.lower_index,
        upper_index = c.upper_index,
        crossing_left,
        "envelopes cross"
    );

    let mut points = Vec::with_capacity(up.len() + low.len() + 1);
    if crossing_left {
        points.extend_from_slice(&low[..=c.lower_index]);
        points.push(c.point);
        points.extend(up[..=c.upper_index].iter().rev());
    } else {
        points.extend(up[c.upper_index + 1..].iter().rev());
        points.push(c.point);
        points.extend_from_slice(&low[c.lower_index + 1..]);
    }
    Ok(Polygon { points })
}
