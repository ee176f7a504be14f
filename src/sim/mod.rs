pub mod event;
pub mod integrator;
pub mod runner;

pub use integrator::advance;
pub use runner::{run_with, simulate};

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Tick-loop configuration, constant for the run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Simulated seconds advanced per tick at 1× speed.
    pub base_time_step: f64,
    /// Speed-up applied on top of the base step.
    pub speed_multiplier: f64,
}

impl SimConfig {
    /// Simulated seconds advanced per tick.
    pub fn dt(&self) -> f64 {
        self.base_time_step * self.speed_multiplier
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            base_time_step: 1.0,
            speed_multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_base_times_multiplier() {
        let config = SimConfig {
            base_time_step: 0.5,
            speed_multiplier: 60.0,
        };
        assert_eq!(config.dt(), 30.0);
    }
}
