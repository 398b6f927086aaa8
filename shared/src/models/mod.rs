//! Domain models for the AgriPredict platform

mod alert;
mod location;
mod prediction;
mod suitability;
mod voice;
mod weather;

pub use alert::*;
pub use location::*;
pub use prediction::*;
pub use suitability::*;
pub use voice::*;
pub use weather::*;
