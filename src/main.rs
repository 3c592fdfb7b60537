use std::time::Instant;

use clap::Parser;
use series_export::Settings;

#[derive(Parser)]
#[command(
    name = "series_export",
    version,
    about = "Export one series of dated markdown posts to a JSON array",
    long_about = "Export one series of dated markdown posts to a JSON array.\n\n\
        Takes no arguments. Paths, the date window, the series marker and the \
        link label come from SERIES_EXPORT_* environment variables \
        (SOURCE_DIR, OUTPUT_PATH, EXTENSION, WINDOW_AFTER, WINDOW_BEFORE, \
        SERIES_MARKER, LINK_LABEL)."
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let _cli = Cli::parse();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "configuration loaded");

    series_export::run(&settings)?;

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
