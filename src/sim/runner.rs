use crate::scene::Scene;

use super::integrator;
use super::SimConfig;

// ---------------------------------------------------------------------------
// Tick loop
// ---------------------------------------------------------------------------

/// Run the simulation until the observer cancels.
///
/// Each tick fully integrates before the observer sees the scene, so every
/// observation is of a consistent post-step state. The observer's return
/// value is the loop's only cancellation signal: `true` continues, `false`
/// stops after the current tick. Pacing is the caller's concern — the loop
/// itself never sleeps. Returns the number of completed ticks.
pub fn run_with<F>(scene: &mut Scene, config: &SimConfig, mut observer: F) -> u64
where
    F: FnMut(u64, &Scene) -> bool,
{
    let dt = config.dt();
    let mut ticks = 0;
    loop {
        integrator::advance(scene, dt);
        ticks += 1;
        if !observer(ticks, scene) {
            break;
        }
    }
    ticks
}

/// Advance a fixed number of ticks with no observer (convenience wrapper).
pub fn simulate(scene: &mut Scene, config: &SimConfig, ticks: u64) {
    let dt = config.dt();
    for _ in 0..ticks {
        integrator::advance(scene, dt);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::scene::{self, LaunchConfig};

    fn test_scene() -> Scene {
        scene::build(&LaunchConfig::default()).unwrap()
    }

    #[test]
    fn observer_cancellation_stops_the_loop() {
        let mut scene = test_scene();
        let completed = run_with(&mut scene, &SimConfig::default(), |tick, _| tick < 5);
        assert_eq!(completed, 5);
        assert_eq!(scene.probe().trail.len(), 5);
    }

    #[test]
    fn observer_sees_fully_integrated_state() {
        let mut scene = test_scene();
        run_with(&mut scene, &SimConfig::default(), |tick, observed| {
            // Trail length equals the tick number: integration for this
            // tick completed before the observation.
            assert_eq!(observed.probe().trail.len() as u64, tick);
            assert_eq!(observed.planet().trail.len() as u64, tick);
            tick < 10
        });
    }

    #[test]
    fn simulate_advances_exactly_n_ticks() {
        let mut scene = test_scene();
        simulate(&mut scene, &SimConfig::default(), 100);
        assert_eq!(scene.probe().trail.len(), 100);

        let mut untouched = test_scene();
        simulate(&mut untouched, &SimConfig::default(), 0);
        assert_eq!(untouched.probe().trail.len(), 0);
        assert_eq!(untouched.time, 0.0);
    }

    #[test]
    fn speed_multiplier_scales_simulated_time() {
        let slow = SimConfig {
            base_time_step: 1.0,
            speed_multiplier: 1.0,
        };
        let fast = SimConfig {
            base_time_step: 1.0,
            speed_multiplier: 60.0,
        };

        let mut a = test_scene();
        let mut b = test_scene();
        simulate(&mut a, &slow, 60);
        simulate(&mut b, &fast, 1);

        // Same simulated time either way; coarser steps accumulate more
        // integration error but stay in the same neighborhood.
        assert_relative_eq!(a.time, b.time);
        assert_relative_eq!(
            a.probe().position.x,
            b.probe().position.x,
            max_relative = 1e-3
        );
    }
}
