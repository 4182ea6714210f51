use std::process::ExitCode;

use clap::Parser;
use regform_lib::{bootstrap::init_tracing_subscriber, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine; only real values matter.
    let _ = dotenvy::dotenv();
    init_tracing_subscriber()?;

    let cli = Cli::parse();
    run(cli).await
}
