use std::io::{self, Write};

use crate::scene::{Scene, KM};

/// Summary statistics describing one encounter, derived from the scene's
/// telemetry after a run.
#[derive(Debug, Clone)]
pub struct EncounterSummary {
    pub closest_approach_km: f64,
    pub final_distance_km: f64,
    pub max_force_n: f64,
    pub max_speed_ms: f64,
    pub final_speed_ms: f64,
    pub sim_time_s: f64,
    pub ticks: usize,
}

impl EncounterSummary {
    /// Compute summary from the probe's telemetry.
    pub fn from_scene(scene: &Scene) -> Self {
        let t = &scene.probe().telemetry;
        EncounterSummary {
            closest_approach_km: t.distance_min / KM,
            final_distance_km: t.distance / KM,
            max_force_n: t.force_max,
            max_speed_ms: t.speed_max,
            final_speed_ms: t.speed,
            sim_time_s: scene.time,
            ticks: scene.probe().trail.len(),
        }
    }
}

/// Write an encounter summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scene: &Scene,
    summary: &EncounterSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"encounter\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", scene.name)?;
    writeln!(writer, "    \"bodies\": {}", scene.bodies.len())?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"telemetry\": {{")?;
    writeln!(writer, "    \"closest_approach_km\": {:.2},", summary.closest_approach_km)?;
    writeln!(writer, "    \"final_distance_km\": {:.2},", summary.final_distance_km)?;
    writeln!(writer, "    \"max_force_n\": {:.3e},", summary.max_force_n)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed_ms)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2},", summary.final_speed_ms)?;
    writeln!(writer, "    \"sim_time_s\": {:.2},", summary.sim_time_s)?;
    writeln!(writer, "    \"ticks\": {}", summary.ticks)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write an encounter summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    scene: &Scene,
    summary: &EncounterSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scene, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scene::{self, LaunchConfig};
    use crate::sim::{simulate, SimConfig};

    fn run_scene() -> Scene {
        let mut scene = scene::build(&LaunchConfig::default()).unwrap();
        simulate(&mut scene, &SimConfig::default(), 10);
        scene
    }

    #[test]
    fn summary_reflects_probe_telemetry() {
        let scene = run_scene();
        let s = EncounterSummary::from_scene(&scene);
        let t = &scene.probe().telemetry;
        assert_eq!(s.closest_approach_km, t.distance_min / KM);
        assert_eq!(s.max_speed_ms, t.speed_max);
        assert_eq!(s.ticks, 10);
        assert_eq!(s.sim_time_s, scene.time);
    }

    #[test]
    fn json_output_is_valid() {
        let scene = run_scene();
        let summary = EncounterSummary::from_scene(&scene);

        let mut buf = Vec::new();
        write_summary(&mut buf, &scene, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"encounter\""));
        assert!(json.contains("\"earth flyby\""));
        assert!(json.contains("\"closest_approach_km\""));
        assert!(json.contains("\"ticks\": 10"));
    }
}
