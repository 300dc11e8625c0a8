// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::WrapErr;
use reg_scrape::cli::{self, Args};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let summary = cli::run(args).await.wrap_err("Registrant report failed")?;

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    println!("{} registrants", summary.registrants);
    Ok(())
}
