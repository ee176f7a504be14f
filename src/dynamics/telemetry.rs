// ---------------------------------------------------------------------------
// Telemetry: running encounter statistics for one body
// ---------------------------------------------------------------------------

/// Per-body telemetry, updated once per tick.
///
/// The extrema move monotonically for the whole run: `distance_min` never
/// increases, `force_max` and `speed_max` never decrease. There is no decay
/// and no reset. The current-tick values are carried alongside the extrema
/// because both are exposed to the overlay/console each tick.
#[derive(Debug, Clone)]
pub struct Telemetry {
    pub distance: f64,     // m, to the reference body, this tick
    pub distance_min: f64, // m, running minimum
    pub force: f64,        // N, net force magnitude, this tick
    pub force_max: f64,    // N, running maximum
    pub speed: f64,        // m/s, this tick
    pub speed_max: f64,    // m/s, running maximum
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            distance: 0.0,
            distance_min: f64::INFINITY,
            force: 0.0,
            force_max: 0.0,
            speed: 0.0,
            speed_max: 0.0,
        }
    }
}

impl Telemetry {
    /// Fold in one tick's values.
    ///
    /// `distance` is `None` for the reference body itself, whose separation
    /// from the reference is not a meaningful statistic.
    pub fn record(&mut self, distance: Option<f64>, force: f64, speed: f64) {
        if let Some(d) = distance {
            self.distance = d;
            self.distance_min = self.distance_min.min(d);
        }
        self.force = force;
        self.force_max = self.force_max.max(force);
        self.speed = speed;
        self.speed_max = self.speed_max.max(speed);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values() {
        let t = Telemetry::default();
        assert_eq!(t.distance_min, f64::INFINITY);
        assert_eq!(t.force_max, 0.0);
        assert_eq!(t.speed_max, 0.0);
    }

    #[test]
    fn extrema_are_monotonic() {
        let mut t = Telemetry::default();
        let ticks = [
            (9.0e7, 1.0e3, 5.0e3),
            (4.0e7, 8.0e3, 7.0e3),
            (6.0e7, 2.0e3, 6.0e3), // distance rebounds, force/speed fall back
            (8.0e7, 1.0e3, 4.0e3),
        ];

        let mut prev_min = t.distance_min;
        let mut prev_force = t.force_max;
        let mut prev_speed = t.speed_max;
        for (d, f, s) in ticks {
            t.record(Some(d), f, s);
            assert!(t.distance_min <= prev_min);
            assert!(t.force_max >= prev_force);
            assert!(t.speed_max >= prev_speed);
            prev_min = t.distance_min;
            prev_force = t.force_max;
            prev_speed = t.speed_max;
        }

        assert_eq!(t.distance_min, 4.0e7);
        assert_eq!(t.force_max, 8.0e3);
        assert_eq!(t.speed_max, 7.0e3);
    }

    #[test]
    fn current_values_track_last_tick() {
        let mut t = Telemetry::default();
        t.record(Some(5.0e7), 3.0e3, 9.0e3);
        t.record(Some(7.0e7), 1.0e3, 2.0e3);
        assert_eq!(t.distance, 7.0e7);
        assert_eq!(t.force, 1.0e3);
        assert_eq!(t.speed, 2.0e3);
    }

    #[test]
    fn reference_body_distance_is_untouched() {
        let mut t = Telemetry::default();
        t.record(None, 3.0e3, 9.0e3);
        assert_eq!(t.distance, 0.0);
        assert_eq!(t.distance_min, f64::INFINITY);
        assert_eq!(t.force_max, 3.0e3);
    }
}
