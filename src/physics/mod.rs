pub mod gravity;

pub use gravity::{net_forces, BodySnapshot, G};
