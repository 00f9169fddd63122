//! JSON rows for every stage of a pipeline run.

use duality::geom::{Orientation, ViewBox};
use duality::pipeline::DiskIntersection;
use duality::Point;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LineRow {
    pub slope: f64,
    pub intercept: f64,
    pub orientation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ArcRow {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub theta0: f64,
    pub theta1: f64,
}

#[derive(Debug, Serialize)]
pub struct SolveDoc {
    pub centers: Vec<[f64; 2]>,
    pub lines: Vec<LineRow>,
    pub upper_hull: Vec<[f64; 2]>,
    pub lower_hull: Vec<[f64; 2]>,
    pub extent: [f64; 2],
    pub upper_envelope: Vec<[f64; 2]>,
    pub lower_envelope: Vec<[f64; 2]>,
    pub polygon: Vec<[f64; 2]>,
    pub arcs: Vec<ArcRow>,
    /// Window around the disk centers for plotting the primal picture.
    pub view_box: [[f64; 2]; 2],
    pub empty: bool,
}

fn rows(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

impl From<&DiskIntersection> for SolveDoc {
    fn from(out: &DiskIntersection) -> Self {
        let view = ViewBox::around(&out.centers);
        Self {
            centers: rows(&out.centers),
            lines: out
                .lines
                .iter()
                .map(|l| LineRow {
                    slope: l.slope(),
                    intercept: l.intercept(),
                    orientation: match l.orientation {
                        Orientation::Upper => "upper",
                        Orientation::Lower => "lower",
                    },
                })
                .collect(),
            upper_hull: rows(&out.upper_hull.chain),
            lower_hull: rows(&out.lower_hull.chain),
            extent: [out.extent.0, out.extent.1],
            upper_envelope: out
                .upper_envelope
                .as_ref()
                .map(|e| rows(e.points()))
                .unwrap_or_default(),
            lower_envelope: out
                .lower_envelope
                .as_ref()
                .map(|e| rows(e.points()))
                .unwrap_or_default(),
            polygon: rows(&out.polygon.points),
            arcs: out
                .arcs
                .iter()
                .map(|a| ArcRow {
                    cx: a.center.x,
                    cy: a.center.y,
                    radius: a.radius,
                    theta0: a.theta0,
                    theta1: a.theta1,
                })
                .collect(),
            view_box: [[view.min.x, view.min.y], [view.max.x, view.max.y]],
            empty: out.is_empty(),
        }
    }
}
