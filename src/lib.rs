//! Resume scanner library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod upload;

pub use config::Config;
pub use error::{Result, ResumeScanError, ValidationError};
