mod loader;
mod report;
mod synthetic;

pub use loader::{CurveFormat, load_light_curve, parse_csv, parse_json};
pub use report::{
    default_report_path, load_records, render_events_table, render_summary_table, save_records,
};
pub use synthetic::{generate_sample, in_sample_transit};
