//! Disk centers from CSV via polars.

use anyhow::{bail, Context, Result};
use duality::Point;
use polars::prelude::*;
use std::path::Path;

/// Read `x,y` columns (header required, any numeric dtype) as disk centers.
pub fn read_centers(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_centers_with_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("centers.csv");
        fs::write(&path, "id,x,y\na,1,1\nb,0.8,0.3\nc,1.0,-1\n").unwrap();
        let centers = read_centers(&path).unwrap();
        assert_eq!(
            centers,
            vec![Point::new(1.0, 1.0), Point::new(0.8, 0.3), Point::new(1.0, -1.0)]
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n1,2\n").unwrap();
        assert!(read_centers(&path).is_err());
    }
}
