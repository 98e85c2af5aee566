pub mod mirror;
pub mod system;
