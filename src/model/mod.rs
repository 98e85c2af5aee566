pub mod classification;
pub mod comparison_mode;
pub mod config;
pub mod entry;
pub mod error;
pub mod log;
pub mod pass_report;
