//! `promptly` – send the command-line words to Gemini and print the reply.
//!
//! ```bash
//! export GEMINI_API_KEY=...        # or put it into .env
//! promptly Why is the borrow checker important? --verbose
//! ```
use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use promptly::{
    Failure, PromptlyClient,
    config::{self, DotenvOutcome},
    execute,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Before tracing, so RUST_LOG may come from the file.
    let dotenv = config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    match &dotenv {
        DotenvOutcome::Loaded(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        DotenvOutcome::NotFound => tracing::debug!("no .env file"),
        DotenvOutcome::Invalid(err) => tracing::warn!(%err, "ignoring unreadable .env file"),
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot start async runtime")?;

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let mut stdout = io::stdout().lock();
    let outcome = runtime.block_on(execute(
        args,
        || config::gemini_backend().map(PromptlyClient::new),
        &mut stdout,
    ));

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(Failure::Usage) => Ok(ExitCode::from(Failure::Usage.exit_code())),
        Err(failure) => {
            // Whatever made it to stdout should land before the error line.
            if let Err(err) = stdout.flush() {
                tracing::debug!(%err, "cannot flush stdout");
            }
            eprintln!("{failure}");
            Ok(ExitCode::from(failure.exit_code()))
        }
    }
}
