//! Geometric transforms: axis flip and nearest-neighbor shrink.

use crate::core::buffer::ImageBuffer;
use crate::core::error::{TransformError, TransformResult};
use crate::core::types::{BackgroundColor, FlipAxis};

/// Mirror the image across the given axis.
pub fn flip(src: &ImageBuffer, axis: FlipAxis) -> TransformResult<ImageBuffer> {
    let mut out = src.clone();
    let (width, height) = (src.width(), src.height());
    for (x, y) in src.coordinates() {
        let mirrored = match axis {
            FlipAxis::Horizontal => src.get(width - 1 - x, y)?,
            FlipAxis::Vertical => src.get(x, height - 1 - y)?,
        };
        out.set(x, y, mirrored)?;
    }
    Ok(out)
}

/// Downsample by an integer factor using nearest-neighbor sampling.
///
/// Output dimensions are `width / factor` x `height / factor` (truncating),
/// and output pixel (x, y) takes the source value at (x*factor, y*factor),
/// the top-left corner of each block, with no averaging. Fails if the
/// factor is zero or either output dimension would be.
pub fn shrink(src: &ImageBuffer, factor: u32) -> TransformResult<ImageBuffer> {
    if factor == 0 {
        return Err(TransformError::InvalidShrinkFactor);
    }
    let width = src.width() / factor;
    let height = src.height() / factor;
    if width == 0 || height == 0 {
        return Err(TransformError::ShrunkToNothing {
            width: src.width(),
            height: src.height(),
            factor,
        });
    }
    let mut out = ImageBuffer::blank(width, height, BackgroundColor::White)?;
    for (x, y) in out.coordinates() {
        out.set(x, y, src.get(x * factor, y * factor)?)?;
    }
    Ok(out)
}
