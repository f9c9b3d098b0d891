pub mod batch;
pub mod commands;
pub mod format;
pub mod logging;
pub mod report;
pub mod utils;
