use crate::dynamics::Body;
use crate::physics::gravity;
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// Fixed-step integrator (semi-implicit Euler)
// ---------------------------------------------------------------------------

/// Advance every body by one tick of `dt` simulated seconds.
///
/// Simultaneous-update contract: all positions and masses are snapshotted
/// before any mutation, and the force solver runs once against that
/// snapshot. No body ever sees a half-updated peer, so the result does not
/// depend on iteration order.
///
/// Per body the update is kick-then-drift: `v += F/m · dt`, then
/// `x += v · dt` with the already-updated velocity. The new position is
/// appended to the trail, and telemetry folds in this tick's net-force
/// magnitude together with the post-step speed and separation from the
/// reference body.
pub fn advance(scene: &mut Scene, dt: f64) {
    let snapshot: Vec<_> = scene.bodies.iter().map(Body::snapshot).collect();
    let forces = gravity::net_forces(&snapshot);

    for (body, force) in scene.bodies.iter_mut().zip(&forces) {
        body.velocity += *force / body.mass * dt;
        body.position += body.velocity * dt;
        let position = body.position;
        body.trail.push(position);
    }

    let reference = scene.reference;
    let reference_position = scene.bodies[reference].position;
    for (i, body) in scene.bodies.iter_mut().enumerate() {
        let distance =
            (i != reference).then(|| (body.position - reference_position).norm());
        body.telemetry.record(distance, forces[i].norm(), body.velocity.norm());
    }

    scene.time += dt;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
