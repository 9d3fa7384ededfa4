mod record;
mod transit;

pub use {
    record::DetectionRecord,
    transit::{DetectionResult, TransitEvent},
};
