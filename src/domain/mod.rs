// Domain types and value objects
mod light_curve;

// Re-export commonly used types to the world
pub use light_curve::{InvalidInputError, LightCurve, LightCurveSummary, Series, validate};
