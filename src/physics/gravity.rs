use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Pairwise Newtonian gravity (direct n² sum)
// ---------------------------------------------------------------------------

pub const G: f64 = 6.674_28e-11; // m^3/(kg·s^2)

/// Separation floor when both bodies have zero radius, m.
pub const MIN_SEPARATION: f64 = 1.0;

/// Position, mass, and radius of one body frozen at the start of a tick.
///
/// The solver reads only these snapshots, never the live bodies, so the
/// result is independent of iteration order.
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot {
    pub position: Vector2<f64>, // m
    pub mass: f64,              // kg
    pub radius: f64,            // m
}

/// Net gravitational force on every body from all others, N.
///
/// `out[i]` is the sum over j ≠ i of `G * m_i * m_j / d²`, directed from
/// body i toward body j. Separations below the pair's floor
/// (`radius_i + radius_j`, or [`MIN_SEPARATION`] for point masses) are
/// clamped before the division, so close encounters stay finite.
pub fn net_forces(snapshot: &[BodySnapshot]) -> Vec<Vector2<f64>> {
    let n = snapshot.len();
    let mut forces = vec![Vector2::zeros(); n];

    for i in 0..n {
        let bi = &snapshot[i];
        for j in (i + 1)..n {
            let bj = &snapshot[j];

            let d = bj.position - bi.position;
            let separation = d.norm();

            let floor = (bi.radius + bj.radius).max(MIN_SEPARATION);
            let distance = separation.max(floor);

            let magnitude = G * bi.mass * bj.mass / (distance * distance);
            let direction = if separation > 0.0 {
                d / separation
            } else {
                Vector2::x()
            };

            // Equal and opposite: i is pulled toward j, j toward i.
            let force = direction * magnitude;
            forces[i] += force;
            forces[j] -= force;
        }
    }

    forces
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
