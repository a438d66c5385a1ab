pub mod app;
pub mod args;
pub mod cmdline;
pub mod elevation;
pub mod error;
pub mod logging;
pub mod notify;
pub mod types;
