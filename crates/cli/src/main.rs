mod input;
mod output;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use duality::cfg::{AxisPolicy, DualityCfg, RayExtent};
use duality::pipeline::solve;
use duality::rand::{draw_centers, CenterCfg, ReplayToken};
use duality::Point;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::output::SolveDoc;
use crate::provenance::Provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Intersect disks through the origin via point-line duality")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExtentArg {
    /// Rays end at x = ±1000 (upper) and ±1010 (lower)
    Fixed,
    /// Rays reach past the farthest envelope vertex
    Adaptive,
}

impl ExtentArg {
    fn to_extent(self) -> RayExtent {
        match self {
            ExtentArg::Fixed => RayExtent::default(),
            ExtentArg::Adaptive => RayExtent::Adaptive {
                min_upper: duality::cfg::UPPER_EXTENT,
                ratio: duality::cfg::LOWER_EXTENT / duality::cfg::UPPER_EXTENT,
            },
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Solve for disk centers read from a CSV with `x,y` columns
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Drop centers on the x-axis instead of failing
        #[arg(long)]
        skip_axis: bool,
        #[arg(long, value_enum, default_value_t = ExtentArg::Fixed)]
        extent: ExtentArg,
    },
    /// Solve for centers drawn from the seeded annulus sampler
    Random {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = ExtentArg::Adaptive)]
        extent: ExtentArg,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            skip_axis,
            extent,
        } => solve_csv(&input, &out, skip_axis, extent),
        Action::Random {
            count,
            seed,
            index,
            out,
            extent,
        } => solve_random(count, seed, index, &out, extent),
        Action::Report => report(),
    }
}

fn solve_csv(input: &Path, out: &Path, skip_axis: bool, extent: ExtentArg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), skip_axis, ?extent, "solve");
    let centers = input::read_centers(input)?;
    let cfg = DualityCfg {
        extent: extent.to_extent(),
        axis_policy: if skip_axis {
            AxisPolicy::Skip
        } else {
            AxisPolicy::Reject
        },
        ..DualityCfg::default()
    };
    let params = json!({
        "disks": centers.len(),
        "skip_axis": skip_axis,
        "extent": format!("{extent:?}").to_lowercase(),
    });
    run(&centers, cfg, out)?;
    Provenance::new(params).with_input(input).write_beside(out)?;
    Ok(())
}

fn solve_random(count: usize, seed: u64, index: u64, out: &Path, extent: ExtentArg) -> Result<()> {
    tracing::info!(count, seed, index, out = %out.display(), ?extent, "random");
    let sampler = CenterCfg {
        count,
        ..CenterCfg::default()
    };
    let centers = draw_centers(sampler, ReplayToken { seed, index })
        .context("drawing disk centers")?;
    let cfg = DualityCfg {
        extent: extent.to_extent(),
        ..DualityCfg::default()
    };
    let params = json!({
        "count": count,
        "seed": seed,
        "index": index,
        "radius": [sampler.radius_min, sampler.radius_max],
        "min_abs_y": sampler.min_abs_y,
        "extent": format!("{extent:?}").to_lowercase(),
    });
    run(&centers, cfg, out)?;
    Provenance::new(params).write_beside(out)?;
    Ok(())
}

fn run(centers: &[Point], cfg: DualityCfg, out: &Path) -> Result<()> {
    let result = solve(centers, cfg).context("disk intersection failed")?;
    tracing::info!(
        disks = result.centers.len(),
        polygon = result.polygon.len(),
        arcs = result.arcs.len(),
        "solved"
    );
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let doc = SolveDoc::from(&result);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    let record = Provenance::new(json!({}));
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
