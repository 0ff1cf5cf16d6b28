pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::{JsonSink, TextSink};
pub use core::{bar, driver::CoverageDriver, foo};
pub use utils::error::{DemoError, Result};
