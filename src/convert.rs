use crate::mapper::PixelMapper;
use crate::Result;
use image::{GrayImage, ImageBuffer, ImageFormat, Luma, Rgba};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Decoded source raster: 16-bit RGBA, read-only for the whole run
pub type SourceImage = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Summary of one completed conversion
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    pub mapper: &'static str,
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
    pub elapsed_ms: f32,
}

/// Run one mapper over every source pixel and persist the result as a
/// single-channel PNG at `destination`, overwriting any existing file.
pub fn convert(
    source: &SourceImage,
    mapper: &dyn PixelMapper,
    destination: &Path,
) -> Result<ConversionRecord> {
    log::info!(
        "START create of output: {} ({})",
        destination.display(),
        mapper.name()
    );
    let start = Instant::now();

    let (width, height) = source.dimensions();
    let mut gray = GrayImage::new(width, height);

    // Row-major pass, every coordinate exactly once
    for y in 0..height {
        for x in 0..width {
            let intensity = mapper.map(*source.get_pixel(x, y));
            gray.put_pixel(x, y, Luma([intensity]));
        }
    }

    gray.save_with_format(destination, ImageFormat::Png)?;

    let elapsed_ms = start.elapsed().as_secs_f32() * 1000.0;
    log::info!(
        "...DONE create of output: {} [{:.1}ms]",
        destination.display(),
        elapsed_ms
    );

    Ok(ConversionRecord {
        mapper: mapper.name(),
        destination: destination.to_path_buf(),
        width,
        height,
        elapsed_ms,
    })
}
