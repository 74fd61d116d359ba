pub mod aggregate;
pub mod analyze;
pub mod classify;
pub mod cli;
pub mod count;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod report;
pub mod util;
