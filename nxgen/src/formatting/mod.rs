//! Terminal output helpers.

mod output;
mod status;

pub use output::{format_duration, print_summary_box};
pub use status::{print_error, print_success, print_warning};
