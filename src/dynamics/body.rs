use nalgebra::Vector2;

use crate::dynamics::telemetry::Telemetry;
use crate::dynamics::trail::Trail;
use crate::physics::gravity::BodySnapshot;

// ---------------------------------------------------------------------------
// Display color
// ---------------------------------------------------------------------------

/// RGB display color. Carried by every body, never read by the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Palette shared by the preset catalog and the probe.
    pub const ORANGE: Color = Color::new(0xFF, 0x88, 0x00);
    pub const PINK: Color = Color::new(0xED, 0x0F, 0xF5);
    pub const LIME: Color = Color::new(0x0F, 0xEC, 0x05);
    pub const CYAN: Color = Color::new(0x17, 0xEC, 0xEC);
    pub const RED: Color = Color::new(0xDC, 0x07, 0x07);
    pub const TAN: Color = Color::new(0xA0, 0x82, 0x5A);
    pub const YELLOW: Color = Color::new(0xFF, 0xD9, 0x18);
    pub const BLUE: Color = Color::new(0x05, 0x4F, 0xA4);
    pub const DARK_BLUE: Color = Color::new(0x11, 0x38, 0x7B);
    pub const GREY: Color = Color::new(0xC3, 0xC3, 0xC3);
}

// ---------------------------------------------------------------------------
// Body: one simulated point mass
// ---------------------------------------------------------------------------

/// Role a body plays in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Massive central body placed from a catalog preset.
    Planet,
    /// Probe/spacecraft carrying the launch impulse.
    Powered,
}

/// One simulated body.
///
/// All physical state is SI: positions in m, velocities in m/s, mass in kg,
/// radius in m. Kilometers exist only at the configuration and display
/// boundaries. `position` and `velocity` are mutated by the integrator
/// during its tick and read-only everywhere else.
#[derive(Debug, Clone)]
pub struct Body {
    /// Stable index into the scene's body array; pairwise loops skip
    /// self-interaction by comparing ids, never object identity.
    pub id: usize,
    pub kind: BodyKind,
    pub position: Vector2<f64>, // m
    pub velocity: Vector2<f64>, // m/s
    pub mass: f64,              // kg, > 0
    pub radius: f64,            // m, >= 0
    pub color: Color,
    pub trail: Trail,
    pub telemetry: Telemetry,
}

impl Body {
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }

    /// Freeze the state the force solver is allowed to see.
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            mass: self.mass,
            radius: self.radius,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
