//! Background Recolor Pass
//!
//! Replaces near-black pixels with a target color while keeping their alpha.
//! A pixel is near-black when every RGB channel is strictly below the
//! threshold; anything else is written back bit-identical.
//!
//! The in-memory pass (`recolor_pixels`) is separate from file I/O so it can
//! run on synthetic buffers. `recolor` wraps it with load and save.

use image::{ImageError, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::path::Path;
use tracing::debug;
use crate::error::{Result, RecolorError};
use crate::settings::RecolorSettings;

/// True when R, G and B are all below `threshold`. Alpha is ignored.
pub fn is_near_black(pixel: &Rgba<u8>, threshold: u8) -> bool {
    pixel[0] < threshold && pixel[1] < threshold && pixel[2] < threshold
}

/// Recolor near-black pixels in place, returning how many were changed
pub fn recolor_pixels(img: &mut RgbaImage, settings: &RecolorSettings) -> usize {
    let (width, height) = img.dimensions();
    let (r, g, b) = settings.target_color;
    let mut changed = 0;

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel_mut(x, y);

            if is_near_black(pixel, settings.threshold) {
                pixel[0] = r;
                pixel[1] = g;
                pixel[2] = b;
                changed += 1;
            }
        }
    }

    changed
}

/// Decode an image and normalize it to 8-bit RGBA.
///
/// Sources without alpha come back fully opaque.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decode_err = |source| RecolorError::Decode {
        path: path.to_path_buf(),
        source,
    };

    // Format comes from the file contents, not the extension
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    Ok(img.to_rgba8())
}

/// Write an image as PNG, replacing whatever is at `path`.
///
/// The format is PNG regardless of the file extension.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| RecolorError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Recolor one file: load `input_path`, replace near-black pixels, save to
/// `output_path`. The two paths may be the same. Returns the number of
/// pixels changed.
pub fn recolor(input_path: &Path, output_path: &Path, settings: &RecolorSettings) -> Result<usize> {
    let mut rgba = load_image(input_path)?;
    let (width, height) = rgba.dimensions();

    let changed = recolor_pixels(&mut rgba, settings);
    debug!(width, height, changed, "recolored {}", input_path.display());

    save_image(&rgba, output_path)?;
    Ok(changed)
}

// ============================================================================
// TESTS
// ============================================================================
