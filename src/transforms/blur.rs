//! 3x3 box blur with an untouched one-pixel border.

use crate::core::buffer::ImageBuffer;
use crate::core::error::TransformResult;
use crate::core::types::Rgb;

/// Average each interior pixel over its 3x3 neighborhood.
///
/// Only strictly-interior pixels are rewritten; the outermost row and
/// column on every side keep their original values, so the result always
/// carries a one-pixel unblurred frame. Neighbor values are read from
/// the unmodified source, and each output channel is
/// `floor(sum_of_9 / 9)`. Buffers narrower or shorter than 3 pixels have
/// no interior and come back as an unchanged copy.
pub fn box_blur(src: &ImageBuffer) -> TransformResult<ImageBuffer> {
    let mut out = src.clone();
    let (width, height) = (src.width(), src.height());
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
            // The outer loops keep the window fully in bounds.
            for ny in y - 1..=y + 1 {
                for nx in x - 1..=x + 1 {
                    let px = src.rgb(nx, ny);
                    r += px.r as u32;
                    g += px.g as u32;
                    b += px.b as u32;
                }
            }
            out.set(x, y, Rgb::new((r / 9) as u8, (g / 9) as u8, (b / 9) as u8))?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BackgroundColor;

    fn checkered(width: u32, height: u32) -> ImageBuffer {
        let mut buf = ImageBuffer::blank(width, height, BackgroundColor::White).unwrap();
        for (x, y) in buf.coordinates() {
            if (x + y) % 2 == 0 {
                buf.set(x, y, Rgb::BLACK).unwrap();
            }
        }
        buf
    }

    #[test]
    fn test_border_pixels_unchanged() {
        let src = checkered(6, 5);
        let out = box_blur(&src).unwrap();
        for (x, y) in src.coordinates() {
            if x == 0 || y == 0 || x == src.width() - 1 || y == src.height() - 1 {
                assert_eq!(out.get(x, y).unwrap(), src.get(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_interior_is_window_average() {
        let mut src = ImageBuffer::blank(3, 3, BackgroundColor::Black).unwrap();
        src.set(1, 1, Rgb::new(90, 9, 18)).unwrap();
        let out = box_blur(&src).unwrap();
        // Eight black neighbors plus the center: floor(sum / 9).
        assert_eq!(out.get(1, 1).unwrap(), Rgb::new(10, 1, 2));
    }

    #[test]
    fn test_average_reads_original_neighbors() {
        // With a left-to-right gradient, processing order must not leak
        // already-blurred values into later windows.
        let mut src = ImageBuffer::blank(4, 3, BackgroundColor::Black).unwrap();
        for (x, y) in src.coordinates() {
            src.set(x, y, Rgb::gray((x * 60) as u8)).unwrap();
        }
        let out = box_blur(&src).unwrap();
        // Window around (1,1): columns 0, 60, 120 three times each.
        assert_eq!(out.get(1, 1).unwrap(), Rgb::gray(60));
        // Window around (2,1): columns 60, 120, 180 three times each.
        assert_eq!(out.get(2, 1).unwrap(), Rgb::gray(120));
    }

    #[test]
    fn test_solid_image_is_fixed_point() {
        let src = ImageBuffer::blank(5, 5, BackgroundColor::Green).unwrap();
        assert_eq!(box_blur(&src).unwrap(), src);
    }

    #[test]
    fn test_degenerate_sizes_copy_through() {
        for (w, h) in [(1, 1), (2, 2), (1, 8), (8, 2)] {
            let src = checkered(w, h);
            assert_eq!(box_blur(&src).unwrap(), src);
        }
    }
}
