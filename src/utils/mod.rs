pub mod duration;
pub mod file_compare;
pub mod file_hash;
pub mod logging;
