use nalgebra::Vector2;
use thiserror::Error;

use crate::catalog;
use crate::dynamics::{Body, BodyKind, Color, Telemetry, Trail};

/// Meters per kilometer. Configuration and catalog distances are km; all
/// physics is SI.
pub const KM: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Construction errors
// ---------------------------------------------------------------------------

/// Failures fatal to scene construction. The run never starts.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("degenerate configuration: {0}")]
    DegenerateConfiguration(String),
}

// ---------------------------------------------------------------------------
// Launch configuration
// ---------------------------------------------------------------------------

/// Probe parameters. Run configuration, not catalog-derived.
#[derive(Debug, Clone)]
pub struct CraftConfig {
    pub mass: f64,   // kg
    pub radius: f64, // km, display sizing and separation floor
    pub color: Color,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            mass: 3.0e4,
            radius: 4_000.0,
            color: Color::GREY,
        }
    }
}

/// Everything the scene builder needs for one run.
///
/// Distances are km, speeds m/s, headings degrees from the +x axis.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Catalog name of the central body.
    pub preset: String,
    /// Reference position of the central body, km. Commonly the origin.
    pub planet_position: Vector2<f64>,
    /// Initial velocity of the central body, m/s. Zero unless configured.
    pub planet_velocity: Vector2<f64>,
    /// Probe start position relative to the central body, km.
    pub orbital_offset: Vector2<f64>,
    /// Launch speed magnitude, m/s.
    pub launch_speed: f64,
    /// Launch heading, degrees counterclockwise from +x on a y-down surface.
    pub launch_heading: f64,
    pub craft: CraftConfig,
    /// Cap each body's trail to this many points (ring buffer). `None`
    /// keeps the full history.
    pub trail_cap: Option<usize>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            preset: "earth".into(),
            planet_position: Vector2::zeros(),
            planet_velocity: Vector2::zeros(),
            orbital_offset: Vector2::new(-60_000.0, 0.0),
            launch_speed: 4_000.0,
            launch_heading: 25.0,
            craft: CraftConfig::default(),
            trail_cap: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene: the complete body set for one run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub bodies: Vec<Body>,
    /// Index of the reference body for distance telemetry. Explicit
    /// configuration, never inferred from container position.
    pub reference: usize,
    /// Index of the powered body.
    pub powered: usize,
    /// Simulated seconds elapsed.
    pub time: f64,
}

impl Scene {
    pub fn planet(&self) -> &Body {
        &self.bodies[self.reference]
    }

    pub fn probe(&self) -> &Body {
        &self.bodies[self.powered]
    }
}

/// Build the initial body set: central body from the catalog, probe from
/// the launch parameters. All bodies exist before the first tick; none are
/// added or removed afterwards.
pub fn build(config: &LaunchConfig) -> Result<Scene, SceneError> {
    let preset = catalog::lookup(&config.preset)
        .ok_or_else(|| SceneError::UnknownPreset(config.preset.clone()))?;

    let new_trail = || match config.trail_cap {
        Some(cap) => Trail::bounded(cap),
        None => Trail::new(),
    };

    let planet_position = config.planet_position * KM;
    let planet = Body {
        id: 0,
        kind: BodyKind::Planet,
        position: planet_position,
        velocity: config.planet_velocity,
        mass: preset.mass,
        radius: preset.radius * KM,
        color: preset.color,
        trail: new_trail(),
        telemetry: Telemetry::default(),
    };

    // Heading decomposition. The y-axis grows downward (display-space
    // orientation, shared with the viewport), so a positive heading pitches
    // the velocity toward -y.
    let heading = config.launch_heading.to_radians();
    let velocity = Vector2::new(
        config.launch_speed * heading.cos(),
        -config.launch_speed * heading.sin(),
    );

    let craft = &config.craft;
    let probe = Body {
        id: 1,
        kind: BodyKind::Powered,
        position: planet_position + config.orbital_offset * KM,
        velocity,
        mass: craft.mass,
        radius: craft.radius * KM,
        color: craft.color,
        trail: new_trail(),
        telemetry: Telemetry::default(),
    };

    let bodies = vec![planet, probe];
    for body in &bodies {
        if body.mass <= 0.0 {
            return Err(SceneError::DegenerateConfiguration(format!(
                "body {} mass must be positive, got {}",
                body.id, body.mass
            )));
        }
        if body.radius < 0.0 {
            return Err(SceneError::DegenerateConfiguration(format!(
                "body {} radius must be non-negative, got {}",
                body.id, body.radius
            )));
        }
    }

    Ok(Scene {
        name: format!("{} flyby", preset.name),
        bodies,
        reference: 0,
        powered: 1,
        time: 0.0,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn heading_zero_is_pure_x() {
        let config = LaunchConfig {
            launch_speed: 4_000.0,
            launch_heading: 0.0,
            ..LaunchConfig::default()
        };
        let scene = build(&config).unwrap();
        let v = scene.probe().velocity;
        assert_relative_eq!(v.x, 4_000.0, max_relative = 1e-12);
        assert_relative_eq!(v.y, 0.0);
    }

    #[test]
    fn heading_ninety_is_pure_y() {
        // y grows downward: heading 90° points "up", hence negative y.
        let config = LaunchConfig {
            launch_speed: 4_000.0,
            launch_heading: 90.0,
            ..LaunchConfig::default()
        };
        let scene = build(&config).unwrap();
        let v = scene.probe().velocity;
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(v.y, -4_000.0, max_relative = 1e-12);
    }

    #[test]
    fn planet_comes_from_the_catalog() {
        let scene = build(&LaunchConfig::default()).unwrap();
        let planet = scene.planet();
        assert_eq!(planet.kind, BodyKind::Planet);
        assert_eq!(planet.mass, 5.972e24);
        assert_eq!(planet.radius, 6_371.0 * KM);
        assert_eq!(planet.velocity, Vector2::zeros());
    }

    #[test]
    fn probe_is_offset_from_the_planet() {
        let config = LaunchConfig {
            planet_position: Vector2::new(1_000.0, -500.0),
            orbital_offset: Vector2::new(-60_000.0, 2_000.0),
            ..LaunchConfig::default()
        };
        let scene = build(&config).unwrap();
        let probe = scene.probe();
        assert_eq!(probe.kind, BodyKind::Powered);
        assert_relative_eq!(probe.position.x, (1_000.0 - 60_000.0) * KM);
        assert_relative_eq!(probe.position.y, (-500.0 + 2_000.0) * KM);
    }

    #[test]
    fn unknown_preset_is_fatal() {
        let config = LaunchConfig {
            preset: "pluto".into(),
            ..LaunchConfig::default()
        };
        let err = build(&config).unwrap_err();
        assert_eq!(err, SceneError::UnknownPreset("pluto".into()));
    }

    #[test]
    fn non_positive_mass_is_degenerate() {
        let mut config = LaunchConfig::default();
        config.craft.mass = 0.0;
        assert!(matches!(
            build(&config),
            Err(SceneError::DegenerateConfiguration(_))
        ));
    }

    #[test]
    fn negative_radius_is_degenerate() {
        let mut config = LaunchConfig::default();
        config.craft.radius = -1.0;
        assert!(matches!(
            build(&config),
            Err(SceneError::DegenerateConfiguration(_))
        ));
    }

    #[test]
    fn trail_cap_is_applied_to_every_body() {
        let config = LaunchConfig {
            trail_cap: Some(4),
            ..LaunchConfig::default()
        };
        let mut scene = build(&config).unwrap();
        for body in &mut scene.bodies {
            for i in 0..10 {
                trail_push(body, i as f64);
            }
            assert_eq!(body.trail.len(), 4);
        }
    }

    fn trail_push(body: &mut Body, x: f64) {
        body.trail.push(Vector2::new(x, 0.0));
    }

    #[test]
    fn bodies_are_indexed_by_id() {
        let scene = build(&LaunchConfig::default()).unwrap();
        for (i, body) in scene.bodies.iter().enumerate() {
            assert_eq!(body.id, i);
        }
        assert_eq!(scene.reference, scene.planet().id);
        assert_eq!(scene.powered, scene.probe().id);
    }
}
