//! Point transforms: grayscale, sepia, channel-threshold filter.
//!
//! All three copy the source buffer and rewrite every pixel from its own
//! original channel values, so they are order-independent across
//! coordinates.

use crate::core::buffer::ImageBuffer;
use crate::core::error::TransformResult;
use crate::core::types::{Channel, Rgb};

/// Collapse every pixel to its grayscale average.
///
/// Each output channel is `(r + g + b) / 3` with truncating integer
/// division.
pub fn grayscale(src: &ImageBuffer) -> TransformResult<ImageBuffer> {
    let mut out = src.clone();
    for (x, y) in src.coordinates() {
        let avg = src.get(x, y)?.average();
        out.set(x, y, Rgb::gray(avg))?;
    }
    Ok(out)
}

/// Apply the classic sepia tone remap.
///
/// Each output channel is a weighted sum of the pixel's original r, g
/// and b, truncated to an integer and clamped to 255.
pub fn sepia(src: &ImageBuffer) -> TransformResult<ImageBuffer> {
    let mut out = src.clone();
    for (x, y) in src.coordinates() {
        let px = src.get(x, y)?;
        let (r, g, b) = (px.r as f64, px.g as f64, px.b as f64);
        out.set(
            x,
            y,
            Rgb::clamped(
                (0.393 * r + 0.769 * g + 0.189 * b) as i32,
                (0.349 * r + 0.686 * g + 0.168 * b) as i32,
                (0.272 * r + 0.534 * g + 0.131 * b) as i32,
            ),
        )?;
    }
    Ok(out)
}

/// Keep color only where the named channel is strong.
///
/// Pixels whose `channel` value is strictly greater than `intensity`
/// are left unchanged; every other pixel collapses to its grayscale
/// average.
pub fn channel_filter(
    src: &ImageBuffer,
    channel: Channel,
    intensity: u8,
) -> TransformResult<ImageBuffer> {
    let mut out = src.clone();
    for (x, y) in src.coordinates() {
        let px = src.get(x, y)?;
        if px.channel(channel) > intensity {
            continue;
        }
        out.set(x, y, Rgb::gray(px.average()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BackgroundColor;

    fn gradient(width: u32, height: u32) -> ImageBuffer {
        let mut buf = ImageBuffer::blank(width, height, BackgroundColor::White).unwrap();
        for (x, y) in buf.coordinates() {
            let v = (x * 40 + y * 7) % 256;
            buf.set(x, y, Rgb::new(v as u8, (v / 2) as u8, (255 - v) as u8))
                .unwrap();
        }
        buf
    }

    #[test]
    fn test_grayscale_equalizes_channels() {
        let out = grayscale(&gradient(6, 4)).unwrap();
        for (x, y) in out.coordinates() {
            let px = out.get(x, y).unwrap();
            assert_eq!(px.r, px.g);
            assert_eq!(px.g, px.b);
        }
    }

    #[test]
    fn test_grayscale_truncating_average() {
        let mut buf = ImageBuffer::blank(1, 1, BackgroundColor::White).unwrap();
        buf.set(0, 0, Rgb::new(10, 20, 31)).unwrap();
        // (10 + 20 + 31) / 3 = 20 (truncated)
        assert_eq!(grayscale(&buf).unwrap().get(0, 0).unwrap(), Rgb::gray(20));
    }

    #[test]
    fn test_grayscale_does_not_mutate_source() {
        let src = gradient(5, 5);
        let before = src.clone();
        grayscale(&src).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_sepia_known_values() {
        let mut buf = ImageBuffer::blank(1, 1, BackgroundColor::White).unwrap();
        buf.set(0, 0, Rgb::new(100, 50, 25)).unwrap();
        let out = sepia(&buf).unwrap().get(0, 0).unwrap();
        // 0.393*100 + 0.769*50 + 0.189*25 = 82.475 -> 82
        // 0.349*100 + 0.686*50 + 0.168*25 = 73.4   -> 73
        // 0.272*100 + 0.534*50 + 0.131*25 = 57.175 -> 57
        assert_eq!(out, Rgb::new(82, 73, 57));
    }

    #[test]
    fn test_sepia_clamps_bright_pixels() {
        let mut buf = ImageBuffer::blank(1, 1, BackgroundColor::White).unwrap();
        buf.set(0, 0, Rgb::new(255, 255, 255)).unwrap();
        let out = sepia(&buf).unwrap().get(0, 0).unwrap();
        // Red and green sums exceed 255 and must clamp.
        assert_eq!(out.r, 255);
        assert_eq!(out.g, 255);
        // 0.272*255 + 0.534*255 + 0.131*255 = 238.935 -> 238
        assert_eq!(out.b, 238);
    }

    #[test]
    fn test_channel_filter_keeps_strong_pixels() {
        let mut buf = ImageBuffer::blank(2, 1, BackgroundColor::White).unwrap();
        buf.set(0, 0, Rgb::new(200, 10, 10)).unwrap(); // strong red
        buf.set(1, 0, Rgb::new(90, 10, 10)).unwrap(); // weak red
        let out = channel_filter(&buf, Channel::Red, 100).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), Rgb::new(200, 10, 10));
        // (90 + 10 + 10) / 3 = 36
        assert_eq!(out.get(1, 0).unwrap(), Rgb::gray(36));
    }

    #[test]
    fn test_channel_filter_threshold_is_strict() {
        let mut buf = ImageBuffer::blank(1, 1, BackgroundColor::White).unwrap();
        buf.set(0, 0, Rgb::new(100, 0, 0)).unwrap();
        // Exactly at the threshold is NOT "greater than": collapses.
        let out = channel_filter(&buf, Channel::Red, 100).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), Rgb::gray(33));
    }

    #[test]
    fn test_channel_filter_every_pixel_kept_or_gray() {
        let src = gradient(8, 8);
        for channel in Channel::ALL {
            let out = channel_filter(&src, channel, 128).unwrap();
            for (x, y) in out.coordinates() {
                let before = src.get(x, y).unwrap();
                let after = out.get(x, y).unwrap();
                if before.channel(channel) > 128 {
                    assert_eq!(after, before);
                } else {
                    assert_eq!(after, Rgb::gray(before.average()));
                }
            }
        }
    }
}
