use branch_cov_demo::core::ConfigProvider;
use branch_cov_demo::utils::{logger, validation::Validate};
use branch_cov_demo::{CliConfig, CoverageDriver, JsonSink, OutputFormat, TextSink};
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_raw_args(env::args_os()).unwrap_or_else(|e| e.exit());

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose());
    }

    if config.verbose() {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Dead branch in normal use, left uncovered on purpose.
    if let Err(e) = config.validate() {
        tracing::warn!("Refusing to run: {}", e);
        return ExitCode::from(255);
    }

    let stdout = io::stdout().lock();
    let driver = CoverageDriver::default();
    let result = match config.format {
        OutputFormat::Text => driver.run(&mut TextSink::new(io::BufWriter::new(stdout))),
        OutputFormat::Json => driver.run(&mut JsonSink::new(io::BufWriter::new(stdout))),
    };

    match result {
        Ok(summary) => {
            tracing::debug!("Emitted {} lines", summary.lines_emitted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::from(e.exit_code())
        }
    }
}
