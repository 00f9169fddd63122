//! Plain geometric value types: points, lines, arcs and a padded view box.
//!
//! - `Point`: alias for `nalgebra::Vector2<f64>`; equality is exact.
//! - `Line`: `y = slope * x + intercept` (never vertical).
//! - `OrientedLine`: a `Line` plus the side (`Orientation`) its half-plane lies on.
//! - `Arc`: circle boundary piece, angles in degrees.

use nalgebra::Vector2;

/// A point in the plane. No identity beyond its value.
pub type Point = Vector2<f64>;

/// Which side of a dual line the half-plane lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Half-plane above the line (`y >= m x + b`); feeds the upper hull.
    Upper,
    /// Half-plane below the line (`y <= m x + b`); feeds the lower hull.
    Lower,
}

impl Orientation {
    /// +1 for `Upper`, -1 for `Lower`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Upper => 1.0,
            Orientation::Lower => -1.0,
        }
    }
}

/// Non-vertical line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    #[inline]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Dual line of a disk: the line plus the side its half-plane is on.
/// The orientation is fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedLine {
    pub line: Line,
    pub orientation: Orientation,
}

impl OrientedLine {
    #[inline]
    pub fn slope(&self) -> f64 {
        self.line.slope
    }
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.line.intercept
    }
    /// Closed half-plane membership.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let y = self.line.eval(p.x);
        match self.orientation {
            Orientation::Upper => p.y >= y,
            Orientation::Lower => p.y <= y,
        }
    }
}

/// Circular arc: circle `(center, radius)` between `theta0` and `theta1` (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub theta0: f64,
    pub theta1: f64,
}

impl Arc {
    /// Point on the supporting circle at `theta` degrees.
    #[inline]
    pub fn point_at(&self, theta: f64) -> Point {
        let t = theta.to_radians();
        self.center + Point::new(t.cos(), t.sin()) * self.radius
    }
    #[inline]
    pub fn start(&self) -> Point {
        self.point_at(self.theta0)
    }
    #[inline]
    pub fn end(&self) -> Point {
        self.point_at(self.theta1)
    }
}

/// Axis-aligned window around a point set, padded by 20% of the extent plus one
/// unit on every side. Empty input gives `[-1, 1]²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min: Point,
    pub max: Point,
}

impl ViewBox {
    pub fn around(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                min: Point::new(-1.0, -1.0),
                max: Point::new(1.0, 1.0),
            };
        };
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min = min.inf(p);
            max = max.sup(p);
        }
        let pad = (max - min).map(|d| 0.2 * d.abs() + 1.0);
        Self {
            min: min - pad,
            max: max + pad,
        }
    }
}
