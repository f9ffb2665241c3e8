//! Console summary rendering.

pub mod console;

pub use console::{render_error_report, render_table};
