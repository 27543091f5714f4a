use anyhow::Context;
use logic_quiz::commands::export::export_file;
use logic_quiz::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logic_quiz::init_tracing("info");

    let config = Config::from_env().context("failed to load configuration")?;
    let summary = export_file(&config).context("export failed")?;

    println!(
        "Extracted {} questions to {}",
        summary.exported,
        config.export_path.display()
    );
    Ok(())
}
