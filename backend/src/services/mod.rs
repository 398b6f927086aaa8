//! Business logic services for the AgriPredict backend

pub mod alerts;
pub mod prediction;
pub mod suitability;
pub mod translation;
pub mod voice;
pub mod weather;

pub use alerts::AlertAnalyzer;
pub use prediction::YieldModel;
pub use suitability::SuitabilityScorer;
pub use translation::TranslationTable;
pub use voice::VoiceComposer;
pub use weather::WeatherService;
