//! Translate a merged dual polygon back into the arcs bounding the disk
//! intersection. Each consecutive pair of polygon points yields one arc; arcs
//! are returned in polygon order without stitching.

use crate::error::DualityError;
use crate::geom::{Arc, Point};
use crate::transform::segment_to_arc;

/// Arcs for every edge of `polygon`. Fewer than two points means there is no
/// intersection to translate and yields no arcs.
pub fn disk_intersection(polygon: &[Point]) -> Result<Vec<Arc>, DualityError> {
    polygon
        .windows(2)
        .map(|w| segment_to_arc(w[0], w[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn short_polygons_translate_to_nothing() {
        assert!(disk_intersection(&[]).unwrap().is_empty());
        assert!(disk_intersection(&[vector![1.0, 1.0]]).unwrap().is_empty());
    }

    #[test]
    fn lens_of_two_disks() {
        // merged polygon of disks centered (1,1) and (1,-1)
        let polygon = [
            vector![1000.0, -999.5],
            vector![0.5, 0.0],
            vector![1010.0, 1009.5],
        ];
        let arcs = disk_intersection(&polygon).unwrap();
        assert_eq!(arcs.len(), 2);
        assert!((arcs[0].center - vector![1.0, 1.0]).norm() < 1e-9);
        assert!((arcs[1].center - vector![1.0, -1.0]).norm() < 1e-9);
        // both arcs meet at the second intersection point of the circles
        assert!((arcs[0].end() - vector![2.0, 0.0]).norm() < 1e-9);
        assert!((arcs[1].start() - vector![2.0, 0.0]).norm() < 1e-9);
        // and reach towards the origin at their free ends
        assert!(arcs[0].start().norm() < 1e-2);
        assert!(arcs[1].end().norm() < 1e-2);
    }

    #[test]
    fn degenerate_edge_propagates() {
        let polygon = [vector![1.0, 0.0], vector![1.0, 3.0]];
        assert!(disk_intersection(&polygon).unwrap_err().is_degenerate());
    }
}
