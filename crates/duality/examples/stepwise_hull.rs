//! Walk the upper and lower hulls of a few disks one step at a time, then
//! print the envelopes, the merged polygon and the arcs.
//!
//! Usage:
//!   cargo run -p duality --example stepwise_hull
//!   cargo run -p duality --example stepwise_hull -- 1,1 0.8,0.3 1,-1

use duality::envelope::halfplane_envelope;
use duality::geom::Orientation;
use duality::hull::{HullKind, HullStepper};
use duality::pipeline::{dual_points, solve_with_defaults};
use duality::transform::circle_to_line;
use duality::Point;

fn parse_center(arg: &str) -> Option<Point> {
    let (x, y) = arg.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let centers: Vec<Point> = if args.is_empty() {
        vec![Point::new(1.0, 1.0), Point::new(0.8, 0.3), Point::new(1.0, -1.0)]
    } else {
        match args.iter().map(|a| parse_center(a)).collect::<Option<Vec<_>>>() {
            Some(c) => c,
            None => {
                eprintln!("usage: stepwise_hull [x,y ...]");
                return;
            }
        }
    };

    let lines = match centers
        .iter()
        .map(|c| circle_to_line(*c))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(l) => l,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    for (c, l) in centers.iter().zip(&lines) {
        println!(
            "disk ({:.3}, {:.3}) -> y = {:.4} x + {:.4} ({:?})",
            c.x,
            c.y,
            l.slope(),
            l.intercept(),
            l.orientation
        );
    }

    for (orientation, kind) in [
        (Orientation::Upper, HullKind::Upper),
        (Orientation::Lower, HullKind::Lower),
    ] {
        let pts = dual_points(&lines, orientation, 1e-12);
        println!("\n{kind:?} hull over {} dual points", pts.len());
        let stepper = HullStepper::new(&pts, kind);
        for (i, state) in stepper.steps().enumerate() {
            let state = match state {
                Ok(state) => state,
                Err(err) => {
                    println!("  step {i} failed: {err}");
                    break;
                }
            };
            println!(
                "  step {i}: next={} done={} chain={}",
                state.next,
                state.done,
                chain_str(&state.chain)
            );
            if state.done && state.chain.len() >= 2 {
                match halfplane_envelope(&state.chain, kind, 1000.0) {
                    Ok(env) => println!("  envelope: {}", chain_str(env.points())),
                    Err(err) => println!("  envelope failed: {err}"),
                }
            }
        }
    }

    match solve_with_defaults(&centers) {
        Ok(out) => {
            println!("\nmerged polygon: {}", chain_str(&out.polygon.points));
            for arc in &out.arcs {
                println!(
                    "arc center=({:.4}, {:.4}) r={:.4} theta=[{:.2}, {:.2}]",
                    arc.center.x, arc.center.y, arc.radius, arc.theta0, arc.theta1
                );
            }
        }
        Err(err) => println!("\npipeline failed: {err}"),
    }
}

fn chain_str(pts: &[Point]) -> String {
    let parts: Vec<String> = pts.iter().map(|p| format!("({:.3}, {:.3})", p.x, p.y)).collect();
    format!("[{}]", parts.join(", "))
}
