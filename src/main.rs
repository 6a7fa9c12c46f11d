use clap::Parser;
use graymap::convert::{convert, SourceImage};
use graymap::loader::load_image;
use graymap::mapper;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "graymap")]
#[command(about = "Convert a color image into a set of grayscale variants")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the source image
    image: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; conversion start/finish lines are visible by default
    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let decoded = load_image(&cli.image)?;
    log::info!(
        "Image color type: {:?}, bounds: {}x{}",
        decoded.color(),
        decoded.width(),
        decoded.height()
    );

    // One shared read-only source for all conversions
    let source: SourceImage = decoded.to_rgba16();

    for mapper in mapper::standard_set() {
        let record = convert(&source, mapper.as_ref(), Path::new(mapper.output_name()))?;
        log::debug!(
            "{}: {}x{} written to {} in {:.1}ms",
            record.mapper,
            record.width,
            record.height,
            record.destination.display(),
            record.elapsed_ms
        );
    }

    Ok(())
}
