use std::collections::VecDeque;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Trail: chronological position history
// ---------------------------------------------------------------------------

/// Ordered history of a body's past positions, m.
///
/// Exactly one point is appended per completed tick, so after N ticks an
/// unbounded trail holds N points in chronological order. A bounded trail
/// keeps only the newest `cap` points, dropping the oldest first — use it
/// to cap memory on long runs.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vector2<f64>>,
    cap: Option<usize>,
}

impl Trail {
    /// Unbounded trail; grows by one point per tick for the whole run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ring-buffer trail holding at most `cap` points (at least one).
    pub fn bounded(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap.max(1)),
            cap: Some(cap.max(1)),
        }
    }

    pub fn push(&mut self, position: Vector2<f64>) {
        if let Some(cap) = self.cap {
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(position);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&Vector2<f64>> {
        self.points.back()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_one_per_push() {
        let mut trail = Trail::new();
        for i in 0..100 {
            trail.push(Vector2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 100);
    }

    #[test]
    fn iteration_is_chronological() {
        let mut trail = Trail::new();
        trail.push(Vector2::new(1.0, 0.0));
        trail.push(Vector2::new(2.0, 0.0));
        trail.push(Vector2::new(3.0, 0.0));
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(trail.latest().unwrap().x, 3.0);
    }

    #[test]
    fn bounded_trail_drops_oldest() {
        let mut trail = Trail::bounded(3);
        for i in 0..10 {
            trail.push(Vector2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn zero_cap_keeps_latest_point() {
        let mut trail = Trail::bounded(0);
        trail.push(Vector2::new(1.0, 0.0));
        trail.push(Vector2::new(2.0, 0.0));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.latest().unwrap().x, 2.0);
    }
}
