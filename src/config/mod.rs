use crate::core::driver::MAX_ARGC;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "branch-cov-demo")]
#[command(about = "Calls foo() and bar() with fixed inputs that cover every branch")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Report format")]
    pub format: OutputFormat,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,

    /// Accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    #[serde(skip)]
    pub rest: Vec<OsString>,

    /// Raw argument count, program name and flags included.
    #[arg(skip)]
    pub argc: usize,
}

impl CliConfig {
    /// Parses `args`, recording how many there were before clap consumes any.
    pub fn from_raw_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut config = Self::try_parse_from(&args)?;
        config.argc = args.len();
        Ok(config)
    }
}

impl ConfigProvider for CliConfig {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn argc(&self) -> usize {
        self.argc
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("argc", self.argc(), 1, MAX_ARGC)
    }
}
