pub mod body;
pub mod telemetry;
pub mod trail;

pub use body::{Body, BodyKind, Color};
pub use telemetry::Telemetry;
pub use trail::Trail;
