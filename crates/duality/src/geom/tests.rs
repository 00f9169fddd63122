use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[test]
fn left_turn_basic_and_collinear() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(left_turn(a, b, vector![1.0, 1.0]));
    assert!(!left_turn(a, b, vector![1.0, -1.0]));
    // collinear is not a left turn in either direction
    assert!(!left_turn(a, b, vector![2.0, 0.0]));
    assert!(!left_turn(vector![2.0, 0.0], b, a));
}

#[test]
fn line_through_and_vertical() {
    let l = line_through(vector![1.0, 3.0], vector![3.0, 7.0]).unwrap();
    assert!((l.slope - 2.0).abs() < 1e-12);
    assert!((l.intercept - 1.0).abs() < 1e-12);
    let err = line_through(vector![1.0, 0.0], vector![1.0, 5.0]).unwrap_err();
    assert!(err.is_degenerate());
}

#[test]
fn intersect_parallel_is_none() {
    let l1 = Line::new(1.0, 0.0);
    assert!(intersect(l1, Line::new(1.0, 2.0)).is_none());
    assert!(intersect(l1, l1).is_none());
    let p = intersect(l1, Line::new(-1.0, 2.0)).unwrap();
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn segment_intersect_open_interval() {
    // proper crossing
    let p = segment_intersect(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
    )
    .unwrap()
    .unwrap();
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
    // lines cross outside the second segment
    let none = segment_intersect(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![3.0, 5.0],
        vector![4.0, 4.0],
    )
    .unwrap();
    assert!(none.is_none());
    // touching at a shared endpoint is not an intersection
    let touch = segment_intersect(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 1.0],
        vector![2.0, 0.0],
    )
    .unwrap();
    assert!(touch.is_none());
    // vertical segment is degenerate
    assert!(segment_intersect(
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![-1.0, 0.5],
        vector![1.0, 0.5],
    )
    .is_err());
}

#[test]
fn neighboring_and_pairwise_intersections() {
    let lines = [Line::new(1.0, 0.0), Line::new(-1.0, 2.0), Line::new(0.0, 0.0)];
    let nb = neighboring_intersections(&lines).unwrap();
    assert_eq!(nb.len(), 2);
    assert!((nb[0] - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((nb[1] - vector![2.0, 0.0]).norm() < 1e-12);
    assert_eq!(pairwise_intersections(&lines).len(), 3);

    let parallel = [Line::new(1.0, 0.0), Line::new(1.0, 1.0)];
    assert!(neighboring_intersections(&parallel).unwrap_err().is_degenerate());
    assert!(pairwise_intersections(&parallel).is_empty());
}

#[test]
fn oriented_line_membership() {
    let up = OrientedLine {
        line: Line::new(0.0, 1.0),
        orientation: Orientation::Upper,
    };
    assert!(up.contains(vector![3.0, 1.0]));
    assert!(up.contains(vector![3.0, 2.0]));
    assert!(!up.contains(vector![3.0, 0.0]));
    assert_eq!(Orientation::Lower.sign(), -1.0);
}

#[test]
fn arc_endpoints_on_circle() {
    let arc = Arc {
        center: vector![1.0, 1.0],
        radius: 2.0,
        theta0: 0.0,
        theta1: 90.0,
    };
    assert!((arc.start() - vector![3.0, 1.0]).norm() < 1e-12);
    assert!((arc.end() - vector![1.0, 3.0]).norm() < 1e-12);
}

#[test]
fn view_box_padding() {
    let empty = ViewBox::around(&[]);
    assert_eq!(empty.min, vector![-1.0, -1.0]);
    assert_eq!(empty.max, vector![1.0, 1.0]);
    let vb = ViewBox::around(&[vector![0.0, 0.0], vector![10.0, 5.0]]);
    assert!((vb.min - vector![-3.0, -2.0]).norm() < 1e-12);
    assert!((vb.max - vector![13.0, 7.0]).norm() < 1e-12);
}

proptest! {
    #[test]
    fn left_turn_translation_invariant(
        ax in -50.0f64..50.0, ay in -50.0f64..50.0,
        bx in -50.0f64..50.0, by in -50.0f64..50.0,
        cx in -50.0f64..50.0, cy in -50.0f64..50.0,
        tx in -50.0f64..50.0, ty in -50.0f64..50.0,
    ) {
        let (a, b, c) = (vector![ax, ay], vector![bx, by], vector![cx, cy]);
        prop_assume!(cross(a, b, c).abs() > 1e-6);
        let t = vector![tx, ty];
        prop_assert_eq!(left_turn(a, b, c), left_turn(a + t, b + t, c + t));
    }

    #[test]
    fn left_turn_flips_under_swaps(
        ax in -50.0f64..50.0, ay in -50.0f64..50.0,
        bx in -50.0f64..50.0, by in -50.0f64..50.0,
        cx in -50.0f64..50.0, cy in -50.0f64..50.0,
    ) {
        let (a, b, c) = (vector![ax, ay], vector![bx, by], vector![cx, cy]);
        prop_assume!(cross(a, b, c).abs() > 1e-6);
        let base = left_turn(a, b, c);
        prop_assert_eq!(left_turn(b, a, c), !base);
        prop_assert_eq!(left_turn(a, c, b), !base);
        prop_assert_eq!(left_turn(c, b, a), !base);
    }
}
