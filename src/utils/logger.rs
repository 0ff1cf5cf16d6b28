use std::io;
use tracing_subscriber::fmt::{self, format::Format, format::DefaultFields};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr>;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

// stdout carries only the report.
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        env_filter("branch_cov_demo=debug,info")
    } else {
        env_filter("branch_cov_demo=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer().compact())
        .init();
}

/// Structured variant for log collectors.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("branch_cov_demo=info"))
        .with(stderr_layer().json())
        .init();
}
