//! HTTP handlers for the AgriPredict backend

pub mod alerts;
pub mod health;
pub mod language;
pub mod location;
pub mod notification;
pub mod prediction;
pub mod suitability;
pub mod voice;
pub mod weather;

pub use alerts::*;
pub use health::*;
pub use language::*;
pub use location::*;
pub use notification::*;
pub use prediction::*;
pub use suitability::*;
pub use voice::*;
pub use weather::*;
