//! Display module for terminal output and formatting

pub mod formatter;
pub mod terminal;

// Re-export commonly used items
pub use formatter::{fill_template, fill_template_concat, fill_template_named};
pub use terminal::Terminal;
