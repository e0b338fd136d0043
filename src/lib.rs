pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod questions;
pub mod report;
pub mod session;
