//! Raster decoding and conversion into an open-pixel field

use std::path::Path;

use image::{DynamicImage, Rgb};

use crate::io::configuration::MAX_CHANNEL_SUM;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::OpenField;

/// Whether a pixel is light enough to be passable
pub fn is_white(pixel: Rgb<u8>, threshold: u32) -> bool {
    pixel.0.iter().map(|&channel| u32::from(channel)).sum::<u32>() >= threshold
}

/// Check that a white threshold is reachable by some pixel
///
/// # Errors
///
/// Returns an error if `threshold` exceeds the sum of three saturated channels
pub fn validate_threshold(threshold: u32) -> Result<u32> {
    if threshold > MAX_CHANNEL_SUM {
        return Err(invalid_parameter(
            "threshold",
            &threshold,
            &format!("must be at most {MAX_CHANNEL_SUM}"),
        ));
    }
    Ok(threshold)
}

/// Classify every pixel of an image as open or blocked
///
/// Alpha is ignored; only the RGB channels are summed.
pub fn field_from_image(image: &DynamicImage, threshold: u32) -> OpenField {
    let rgb = image.to_rgb8();
    OpenField::from_fn(rgb.width(), rgb.height(), |position| {
        rgb.get_pixel_checked(position.x, position.y)
            .is_some_and(|pixel| is_white(*pixel, threshold))
    })
}

/// Decode an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_buf = path.as_ref().to_path_buf();
    image::open(&path_buf).map_err(|e| MazeError::ImageLoad {
        path: path_buf,
        source: e,
    })
}

/// Decode an image file and classify its pixels
///
/// # Errors
///
/// Returns an error if the threshold is invalid or the image cannot be loaded
pub fn load_field<P: AsRef<Path>>(path: P, threshold: u32) -> Result<(DynamicImage, OpenField)> {
    let threshold = validate_threshold(threshold)?;
    let image = load_image(path)?;
    let field = field_from_image(&image, threshold);
    Ok((image, field))
}
