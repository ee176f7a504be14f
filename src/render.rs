use nalgebra::Vector2;

use crate::dynamics::Trail;
use crate::scene::{SceneError, KM};

// ---------------------------------------------------------------------------
// Viewport: physical space → display surface
// ---------------------------------------------------------------------------

/// Fixed mapping from physical space to a bounded display surface.
///
/// One global ratio for the whole run, shared by every body's conversion:
/// `scale = physical width of the simulated region / display width`.
/// Physical space and display space share the y-down orientation, so the
/// conversion scales and offsets but never flips an axis.
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64, // m per display unit
    display_width: f64,
    display_height: f64,
}

impl Viewport {
    /// Fails with `DegenerateConfiguration` when the resulting scale factor
    /// is not positive and finite, before the loop starts.
    pub fn new(
        physical_width_km: f64,
        display_width: f64,
        display_height: f64,
    ) -> Result<Self, SceneError> {
        let scale = physical_width_km * KM / display_width;
        if scale <= 0.0 || !scale.is_finite() {
            return Err(SceneError::DegenerateConfiguration(format!(
                "scale factor must be positive, got {scale}"
            )));
        }
        Ok(Self {
            scale,
            display_width,
            display_height,
        })
    }

    /// km per display unit.
    pub fn scale_factor(&self) -> f64 {
        self.scale / KM
    }

    /// Physical position (m) → display coordinates, origin-centered on the
    /// display surface.
    pub fn to_display(&self, position: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            position.x / self.scale + self.display_width / 2.0,
            position.y / self.scale + self.display_height / 2.0,
        )
    }

    /// Physical radius (m) → display radius.
    pub fn display_radius(&self, radius: f64) -> f64 {
        radius / self.scale
    }

    /// Project a trail into display space for path drawing.
    pub fn trail_points(&self, trail: &Trail) -> Vec<[f64; 2]> {
        trail
            .iter()
            .map(|p| {
                let d = self.to_display(*p);
                [d.x, d.y]
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
