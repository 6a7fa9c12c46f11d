use image::{Pixel, Rgba};

/// Pure per-pixel conversion from a 16-bit RGBA sample to an 8-bit intensity
pub trait PixelMapper: Send + Sync {
    /// Returns the name of the mapper for logging
    fn name(&self) -> &'static str;

    /// Fixed output filename this mapper writes to
    fn output_name(&self) -> &'static str;

    /// Map one color sample to a grayscale intensity
    fn map(&self, sample: Rgba<u16>) -> u8;
}

/// Standard perceptual grayscale, delegated to the color model's luma weighting
pub struct Luminance;

impl PixelMapper for Luminance {
    fn name(&self) -> &'static str {
        "luminance"
    }

    fn output_name(&self) -> &'static str {
        "std.png"
    }

    fn map(&self, sample: Rgba<u16>) -> u8 {
        let luma = sample.to_luma().0[0];
        (luma >> 8) as u8
    }
}

/// Unweighted channel average
pub struct Average;

impl PixelMapper for Average {
    fn name(&self) -> &'static str {
        "average"
    }

    fn output_name(&self) -> &'static str {
        "avg.png"
    }

    fn map(&self, sample: Rgba<u16>) -> u8 {
        let [r, g, b, _] = sample.0;
        // Truncating average over the 16-bit channels, then drop the low byte
        (((r as u32 + g as u32 + b as u32) / 3) >> 8) as u8
    }
}

/// Red channel only
pub struct RedChannel;

impl PixelMapper for RedChannel {
    fn name(&self) -> &'static str {
        "red"
    }

    fn output_name(&self) -> &'static str {
        "red.png"
    }

    fn map(&self, sample: Rgba<u16>) -> u8 {
        (sample.0[0] >> 8) as u8
    }
}

/// Green channel only
pub struct GreenChannel;

impl PixelMapper for GreenChannel {
    fn name(&self) -> &'static str {
        "green"
    }

    fn output_name(&self) -> &'static str {
        "green.png"
    }

    fn map(&self, sample: Rgba<u16>) -> u8 {
        (sample.0[1] >> 8) as u8
    }
}

/// Blue channel only
pub struct BlueChannel;

impl PixelMapper for BlueChannel {
    fn name(&self) -> &'static str {
        "blue"
    }

    fn output_name(&self) -> &'static str {
        "blue.png"
    }

    fn map(&self, sample: Rgba<u16>) -> u8 {
        (sample.0[2] >> 8) as u8
    }
}

/// Normalized-difference index using avg(green, blue) as a near-infrared proxy
/// and red as the reference channel
pub struct NdviIndex;

impl PixelMapper for NdviIndex {
    fn name(&self) -> &'static str {
        "ndvi"
    }

    fn output_name(&self) -> &'static str {
        "ndvi.png"
    }

    fn map(&self, sample: Rgba<u16>) -> u8 {
        let [r, g, b, _] = sample.0;
        let nir = (g as f64 + b as f64) / 2.0 / 65535.0;
        let red = r as f64 / 65535.0;

        let ndvi = if nir + red == 0.0 {
            0.0
        } else {
            (nir - red) / (nir + red)
        };

        // Rescale [-1, +1] to [0, 255]; clamp so float rounding at the
        // boundary cannot wrap the cast
        (((ndvi * 255.0) + 255.0) / 2.0).clamp(0.0, 255.0) as u8
    }
}

/// The full mapper set, in the order the conversions run
pub fn standard_set() -> Vec<Box<dyn PixelMapper>> {
    vec![
        Box::new(Luminance),
        Box::new(Average),
        Box::new(RedChannel),
        Box::new(GreenChannel),
        Box::new(BlueChannel),
        Box::new(NdviIndex),
    ]
}
