use crate::dynamics::body::Color;

// ---------------------------------------------------------------------------
// Preset catalog: named celestial bodies
// ---------------------------------------------------------------------------

/// Static physical parameters for a known celestial body.
#[derive(Debug, Clone, Copy)]
pub struct BodyPreset {
    pub name: &'static str,
    pub mass: f64,      // kg
    pub radius: f64,    // km
    pub color: Color,
}

/// All bodies the scene builder can place as the central body.
pub const PRESETS: [BodyPreset; 9] = [
    BodyPreset { name: "sun",     mass: 1.989e30, radius: 695_700.0, color: Color::ORANGE },
    BodyPreset { name: "mercury", mass: 3.285e23, radius: 2_440.0,   color: Color::PINK },
    BodyPreset { name: "venus",   mass: 4.867e24, radius: 6_052.0,   color: Color::LIME },
    BodyPreset { name: "earth",   mass: 5.972e24, radius: 6_371.0,   color: Color::CYAN },
    BodyPreset { name: "mars",    mass: 6.39e23,  radius: 3_390.0,   color: Color::RED },
    BodyPreset { name: "jupiter", mass: 1.898e27, radius: 69_911.0,  color: Color::TAN },
    BodyPreset { name: "saturn",  mass: 5.683e26, radius: 58_232.0,  color: Color::YELLOW },
    BodyPreset { name: "uranus",  mass: 8.681e25, radius: 25_362.0,  color: Color::BLUE },
    BodyPreset { name: "neptune", mass: 1.024e26, radius: 24_622.0,  color: Color::DARK_BLUE },
];

/// Look up a preset by name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static BodyPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
