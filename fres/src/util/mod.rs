pub mod format;
pub mod log;
