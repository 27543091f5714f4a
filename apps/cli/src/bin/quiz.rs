use anyhow::Context;
use logic_quiz::commands::quiz::run_quiz;
use logic_quiz::Config;
use std::io;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    logic_quiz::init_tracing("warn");

    let config = Config::from_env().context("failed to load configuration")?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = run_quiz(&config, stdin.lock(), stdout.lock(), rand::thread_rng())
        .context("quiz aborted")?;

    Ok(ExitCode::from(outcome.exit_code()))
}
