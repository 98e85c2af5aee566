pub mod cli;
pub mod core;
pub mod interface;
pub mod model;
pub mod platform;
pub mod utils;
