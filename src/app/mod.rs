mod detect;
mod history;

pub use detect::{collect_datasets, load_config, pacing_delay, run, run_detect};
pub use history::{HistoryFilter, run_history, select_history};
