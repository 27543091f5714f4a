use anyhow::Context;
use logic_quiz::commands::normalize::normalize_file;
use logic_quiz::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logic_quiz::init_tracing("info");

    let config = Config::from_env().context("failed to load configuration")?;
    let lines = normalize_file(&config).context("normalization failed")?;

    println!(
        "Wrote {} lines to {}",
        lines,
        config.processed_path.display()
    );
    Ok(())
}
