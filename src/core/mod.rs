pub mod action_log;
pub mod app_config;
pub mod io_manager;
pub mod mirror;
pub mod scheduler;
pub mod system;
