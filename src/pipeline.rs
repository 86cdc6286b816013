//! The fixed tile recipe and end-to-end mosaic composition.
//!
//! Twelve tiles are derived from a shrunk base image (and a shrunk
//! backdrop for the color-keyed variants), then assembled into a 5x5
//! grid. Every derivation reads only its own copy of the inputs, so the
//! twelve run in parallel on the rayon pool unless the caller opts out.

use crate::core::buffer::ImageBuffer;
use crate::core::error::TessellaResult;
use crate::core::types::{Channel, FlipAxis};
use crate::transforms::{
    box_blur, channel_filter, chroma_key, flip, grayscale, mosaic, sepia, shrink, TILE_COUNT,
};
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Output name the composed mosaic is exported under when the caller
/// does not choose one.
pub const DEFAULT_OUTPUT: &str = "mosaic.jpg";

/// Knobs for the tile recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Nearest-neighbor shrink factor applied to both sources up front.
    pub shrink_factor: u32,
    /// Threshold shared by the channel filters and the chroma keys.
    pub intensity: u8,
    /// Derive the twelve tiles on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            shrink_factor: 5,
            intensity: 100,
            parallel: true,
        }
    }
}

type Derivation<'a> = Box<dyn Fn() -> TessellaResult<ImageBuffer> + Send + Sync + 'a>;

/// Derive the ordered twelve-tile set from a base image and a backdrop.
///
/// Both inputs are shrunk first; the tiles are, in order: the shrunk
/// base itself, grayscale, sepia, box blur, the red/green/blue channel
/// filters, horizontal and vertical flips, and the red/green/blue chroma
/// keys over the shrunk backdrop. All twelve share the shrunk base's
/// dimensions.
pub fn tile_set(
    base: &ImageBuffer,
    backdrop: &ImageBuffer,
    options: &PipelineOptions,
) -> TessellaResult<Vec<ImageBuffer>> {
    let base = shrink(base, options.shrink_factor)?;
    let backdrop = shrink(backdrop, options.shrink_factor)?;
    info!(
        "deriving {} tiles from a {}x{} base",
        TILE_COUNT,
        base.width(),
        base.height()
    );

    let intensity = options.intensity;
    let derivations: Vec<(&str, Derivation<'_>)> = vec![
        ("copy", Box::new(|| Ok(base.clone()))),
        ("grayscale", Box::new(|| Ok(grayscale(&base)?))),
        ("sepia", Box::new(|| Ok(sepia(&base)?))),
        ("blur", Box::new(|| Ok(box_blur(&base)?))),
        (
            "filter:red",
            Box::new(|| Ok(channel_filter(&base, Channel::Red, intensity)?)),
        ),
        (
            "filter:green",
            Box::new(|| Ok(channel_filter(&base, Channel::Green, intensity)?)),
        ),
        (
            "filter:blue",
            Box::new(|| Ok(channel_filter(&base, Channel::Blue, intensity)?)),
        ),
        (
            "flip:horizontal",
            Box::new(|| Ok(flip(&base, FlipAxis::Horizontal)?)),
        ),
        (
            "flip:vertical",
            Box::new(|| Ok(flip(&base, FlipAxis::Vertical)?)),
        ),
        (
            "key:red",
            Box::new(|| Ok(chroma_key(&base, Channel::Red, intensity, &backdrop)?)),
        ),
        (
            "key:green",
            Box::new(|| Ok(chroma_key(&base, Channel::Green, intensity, &backdrop)?)),
        ),
        (
            "key:blue",
            Box::new(|| Ok(chroma_key(&base, Channel::Blue, intensity, &backdrop)?)),
        ),
    ];

    let derive_one = |(name, derive): &(&str, Derivation<'_>)| {
        debug!("deriving tile '{name}'");
        derive()
    };

    if options.parallel {
        derivations.par_iter().map(derive_one).collect()
    } else {
        derivations.iter().map(derive_one).collect()
    }
}

/// Shrink, derive the twelve tiles and assemble the mosaic.
pub fn compose<R: Rng + ?Sized>(
    base: &ImageBuffer,
    backdrop: &ImageBuffer,
    options: &PipelineOptions,
    rng: &mut R,
) -> TessellaResult<ImageBuffer> {
    let tiles = tile_set(base, backdrop, options)?;
    info!("assembling a 5x5 mosaic from {} tiles", tiles.len());
    Ok(mosaic(&tiles, rng)?)
}
