//! Plain-text point clouds: one point per line, coordinates separated by whitespace or
//! commas. Blank lines and lines starting with `#` are skipped.

use crate::error::NeighborError;
use crate::points::PointSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Reads a point set from a file. Rows with fewer than `D` (but at least two)
/// coordinates are padded with zeros.
pub fn read_points<const D: usize, P: AsRef<Path>>(path: P) -> Result<PointSet<D>, NeighborError> {
    let file = File::open(path)?;
    parse_points(BufReader::new(file))
}

/// Parses a point set from any reader, in the format of [`read_points`].
pub fn parse_points<const D: usize, R: Read>(reader: R) -> Result<PointSet<D>, NeighborError> {
    let mut points = Vec::new();

    for (number, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let values = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| NeighborError::Parse { line: number + 1, message: e.to_string() })?;

        if values.len() < D.min(2) || values.len() > D {
            return Err(NeighborError::Parse {
                line: number + 1,
                message: format!("expected {} coordinates, found {}", D, values.len()),
            });
        }

        let mut p = [0.0; D];
        p[..values.len()].copy_from_slice(&values);
        points.push(p);
    }

    Ok(PointSet::new(points))
}

/// Writes one point per line.
pub fn write_points<const D: usize, W: Write>(writer: W, points: &PointSet<D>) -> Result<(), NeighborError> {
    let mut writer = BufWriter::new(writer);
    for p in points {
        let row: Vec<String> = p.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a point set to a file, replacing it.
pub fn save_points<const D: usize, P: AsRef<Path>>(path: P, points: &PointSet<D>) -> Result<(), NeighborError> {
    write_points(File::create(path)?, points)
}
