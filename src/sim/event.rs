use crate::scene::Scene;

// ---------------------------------------------------------------------------
// Encounter events
// ---------------------------------------------------------------------------

/// Kinds of encounter events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// The probe's separation from the reference body stopped shrinking.
    ClosestApproach { distance: f64 },
    /// The separation crossed a threshold (m).
    Separation { threshold: f64, approaching: bool },
}

/// A discrete event with the simulated time it occurred at.
#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive post-tick scenes and report events.
pub trait EventDetector {
    fn check(&mut self, scene: &Scene) -> Option<SimEvent>;
}

/// Detects closest approach: the probe-reference separation going from
/// decreasing to increasing. Fires once per local minimum.
#[derive(Debug, Default)]
pub struct ClosestApproachDetector {
    prev: Option<f64>,
    was_closing: bool,
}

impl EventDetector for ClosestApproachDetector {
    fn check(&mut self, scene: &Scene) -> Option<SimEvent> {
        let distance = scene.probe().telemetry.distance;
        let event = match self.prev {
            Some(prev) if self.was_closing && distance > prev => Some(SimEvent {
                time: scene.time,
                kind: EventKind::ClosestApproach { distance: prev },
            }),
            _ => None,
        };
        if let Some(prev) = self.prev {
            self.was_closing = distance < prev;
        }
        self.prev = Some(distance);
        event
    }
}

/// Detects when the separation crosses a threshold (approaching or
/// receding). Fires at most once.
#[derive(Debug)]
pub struct SeparationDetector {
    pub threshold: f64, // m
    pub approaching: bool,
    prev: Option<f64>,
    fired: bool,
}

impl SeparationDetector {
    pub fn new(threshold: f64, approaching: bool) -> Self {
        Self {
            threshold,
            approaching,
            prev: None,
            fired: false,
        }
    }
}

impl EventDetector for SeparationDetector {
    fn check(&mut self, scene: &Scene) -> Option<SimEvent> {
        if self.fired {
            return None;
        }
        let distance = scene.probe().telemetry.distance;
        let crossed = match self.prev {
            Some(prev) if self.approaching => {
                prev > self.threshold && distance <= self.threshold
            }
            Some(prev) => prev < self.threshold && distance >= self.threshold,
            None => false,
        };
        self.prev = Some(distance);
        if crossed {
            self.fired = true;
            Some(SimEvent {
                time: scene.time,
                kind: EventKind::Separation {
                    threshold: self.threshold,
                    approaching: self.approaching,
                },
            })
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
