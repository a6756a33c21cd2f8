use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod icon;

#[derive(Debug, Parser)]
#[command(
    name = "convert-icons",
    about = "Generate the icons source file from a directory of icon images"
)]
struct Args {
    /// Directory containing the source icon images
    source_dir: PathBuf,

    /// Path of the generated icons file to write
    output: PathBuf,
}

fn main() -> ExitCode {
    // Set up logging using tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let converter = match icon::IconConverter::new(&args.source_dir, &args.output) {
        Ok(v) => v,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match converter.run() {
        Ok(count) => {
            tracing::info!("wrote {count} icons to {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
