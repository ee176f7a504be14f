pub mod catalog;
pub mod dynamics;
pub mod io;
pub mod physics;
pub mod render;
pub mod scene;
pub mod sim;

// Commonly used types in one place
pub mod types {
    pub use crate::catalog::BodyPreset;
    pub use crate::dynamics::body::{Body, BodyKind, Color};
    pub use crate::dynamics::telemetry::Telemetry;
    pub use crate::dynamics::trail::Trail;
    pub use crate::physics::gravity::{BodySnapshot, G};
    pub use crate::render::Viewport;
    pub use crate::scene::{CraftConfig, LaunchConfig, Scene, SceneError};
    pub use crate::sim::SimConfig;
}
