use std::io::{self, Write};

use crate::dynamics::BodyKind;
use crate::scene::{Scene, KM};

/// Write every body's trail to CSV format.
///
/// Columns: body, index, x_km, y_km — one row per recorded trail point,
/// oldest first.
pub fn write_trails<W: Write>(writer: &mut W, scene: &Scene) -> io::Result<()> {
    writeln!(writer, "body,index,x_km,y_km")?;

    for body in &scene.bodies {
        let label = match body.kind {
            BodyKind::Planet => "planet",
            BodyKind::Powered => "probe",
        };
        for (index, point) in body.trail.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{:.3},{:.3}",
                label,
                index + 1,
                point.x / KM,
                point.y / KM,
            )?;
        }
    }

    Ok(())
}

/// Write trails to a CSV file at the given path.
pub fn write_trails_file(path: &str, scene: &Scene) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trails(&mut file, scene)
}
