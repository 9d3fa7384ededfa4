mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{mean_and_stddev, median};
pub use time_utils::{AppInstant, elapsed_ms, format_duration_ms};

pub(crate) use maths_utils::get_min;
