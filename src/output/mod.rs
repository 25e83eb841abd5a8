pub mod formatter;

pub use formatter::{format_report, should_use_colors};
