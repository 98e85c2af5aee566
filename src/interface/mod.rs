pub mod file_system;
pub mod log_sink;
