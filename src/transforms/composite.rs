//! Compositor: color-keyed merge of two images and mosaic assembly.

use crate::core::buffer::ImageBuffer;
use crate::core::error::{ComposeError, ComposeResult};
use crate::core::types::{BackgroundColor, Channel};
use rand::Rng;

/// Number of tiles a mosaic consumes.
pub const TILE_COUNT: usize = 12;

/// Cells per side of the mosaic grid.
pub const GRID_DIM: u32 = 5;

/// Replace color-keyed pixels of `foreground` with `background` content.
///
/// The background is stretched (on a private copy) to the foreground's
/// exact dimensions first. A foreground pixel is replaced wholesale when
/// its `channel` value is strictly BELOW `intensity`: the key selects
/// where the channel is weak, not where it dominates, and callers depend
/// on that exact comparison direction. Pixels at or above the threshold
/// keep their foreground value.
pub fn chroma_key(
    foreground: &ImageBuffer,
    channel: Channel,
    intensity: u8,
    background: &ImageBuffer,
) -> ComposeResult<ImageBuffer> {
    let mut out = foreground.clone();
    let mut backdrop = background.clone();
    backdrop.resize_to(foreground.width(), foreground.height())?;
    for (x, y) in out.coordinates() {
        if out.get(x, y)?.channel(channel) < intensity {
            out.set(x, y, backdrop.get(x, y)?)?;
        }
    }
    Ok(out)
}

/// Assemble a 5x5 grid mosaic from exactly twelve same-sized tiles.
///
/// Each of the 25 cells independently receives one uniformly random tile
/// (with replacement) drawn from `rng`, so the canvas is always
/// `(tile_width * 5) x (tile_height * 5)` regardless of the draws. There
/// is no seeding contract; callers wanting reproducibility pass their own
/// seeded [`Rng`].
pub fn mosaic<R: Rng + ?Sized>(tiles: &[ImageBuffer], rng: &mut R) -> ComposeResult<ImageBuffer> {
    if tiles.len() != TILE_COUNT {
        return Err(ComposeError::WrongTileCount {
            expected: TILE_COUNT,
            actual: tiles.len(),
        });
    }
    let (tile_w, tile_h) = (tiles[0].width(), tiles[0].height());
    for (index, tile) in tiles.iter().enumerate() {
        if tile.width() != tile_w || tile.height() != tile_h {
            return Err(ComposeError::TileSizeMismatch {
                index,
                expected_width: tile_w,
                expected_height: tile_h,
                actual_width: tile.width(),
                actual_height: tile.height(),
            });
        }
    }

    let mut canvas = ImageBuffer::blank(tile_w * GRID_DIM, tile_h * GRID_DIM, BackgroundColor::White)?;
    for col in 0..GRID_DIM {
        for row in 0..GRID_DIM {
            let tile = &tiles[rng.random_range(0..TILE_COUNT)];
            for (x, y) in tile.coordinates() {
                canvas.set(col * tile_w + x, row * tile_h + y, tile.rgb(x, y))?;
            }
        }
    }
    Ok(canvas)
}
