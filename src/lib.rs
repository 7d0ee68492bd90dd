pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod prompt;
pub mod sanitize;

pub use error::{Error, Result};
