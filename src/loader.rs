use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode a source image, auto-detecting the format from file content
pub fn load_image<P: AsRef<Path>>(path: P) -> crate::Result<DynamicImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Image file does not exist: {}",
            path.display()
        ));
    }
    // Guess the format from the file content, not the extension
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}
