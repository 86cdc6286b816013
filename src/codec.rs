//! Image decoding, encoding and resampling on top of the `image` crate.
//!
//! The pipeline itself only ever sees [`ImageBuffer`] values; this module
//! is the single seam where file formats and resampling algorithms live.
//! Decoding accepts 8-bit RGB sources only: images with an alpha channel
//! or a non-RGB color model are rejected with a typed error rather than
//! silently converted.

use crate::core::buffer::ImageBuffer;
use crate::core::error::{BufferError, TessellaResult};
use crate::core::types::Rgb;
use image::{imageops, DynamicImage, RgbImage};
use log::debug;
use std::path::Path;

/// Decode the image at `path` into an [`ImageBuffer`].
///
/// 16-bit and float RGB sources are narrowed to 8 bits; anything with an
/// alpha channel or a non-RGB color model fails with
/// [`BufferError::UnsupportedColorModel`].
pub fn decode(path: impl AsRef<Path>) -> TessellaResult<ImageBuffer> {
    let path = path.as_ref();
    let decoded = image::open(path)?;
    let rgb = match decoded {
        DynamicImage::ImageRgb8(img) => img,
        wide @ (DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_)) => wide.to_rgb8(),
        other => {
            return Err(BufferError::UnsupportedColorModel {
                model: color_model_name(&other).to_string(),
            }
            .into())
        }
    };
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(from_rgb_image(rgb))
}

/// Encode `buffer` to `path`; the format follows the file extension.
pub fn encode(buffer: &ImageBuffer, path: impl AsRef<Path>) -> TessellaResult<()> {
    let path = path.as_ref();
    to_rgb_image(buffer).save(path)?;
    debug!(
        "encoded {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// Resample `buffer` to exactly `width` x `height`.
///
/// Catmull-Rom bicubic; callers rely only on the output dimensions.
pub(crate) fn resample(buffer: &ImageBuffer, width: u32, height: u32) -> ImageBuffer {
    let resized = imageops::resize(
        &to_rgb_image(buffer),
        width,
        height,
        imageops::FilterType::CatmullRom,
    );
    from_rgb_image(resized)
}

fn from_rgb_image(img: RgbImage) -> ImageBuffer {
    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();
    ImageBuffer::from_raw(width, height, pixels)
}

fn to_rgb_image(buffer: &ImageBuffer) -> RgbImage {
    RgbImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        let px = buffer.rgb(x, y);
        image::Rgb([px.r, px.g, px.b])
    })
}

fn color_model_name(image: &DynamicImage) -> &'static str {
    match image {
        DynamicImage::ImageLuma8(_) => "luma8",
        DynamicImage::ImageLumaA8(_) => "luma-alpha8",
        DynamicImage::ImageRgba8(_) => "rgba8",
        DynamicImage::ImageLuma16(_) => "luma16",
        DynamicImage::ImageLumaA16(_) => "luma-alpha16",
        DynamicImage::ImageRgba16(_) => "rgba16",
        DynamicImage::ImageRgba32F(_) => "rgba32f",
        DynamicImage::ImageRgb8(_) => "rgb8",
        DynamicImage::ImageRgb16(_) => "rgb16",
        DynamicImage::ImageRgb32F(_) => "rgb32f",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BackgroundColor;

    #[test]
    fn test_rgb_image_roundtrip_preserves_pixels() {
        let mut buf = ImageBuffer::blank(3, 2, BackgroundColor::White).unwrap();
        buf.set(1, 0, Rgb::new(10, 20, 30)).unwrap();
        buf.set(2, 1, Rgb::new(200, 100, 0)).unwrap();
        let roundtripped = from_rgb_image(to_rgb_image(&buf));
        assert_eq!(roundtripped, buf);
    }

    #[test]
    fn test_resample_hits_target_dimensions() {
        let buf = ImageBuffer::blank(9, 7, BackgroundColor::Black).unwrap();
        let resized = resample(&buf, 4, 13);
        assert_eq!((resized.width(), resized.height()), (4, 13));
    }

    #[test]
    fn test_color_model_names() {
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::new(1, 1));
        assert_eq!(color_model_name(&rgba), "rgba8");
        let luma = DynamicImage::ImageLuma8(image::GrayImage::new(1, 1));
        assert_eq!(color_model_name(&luma), "luma8");
    }
}
