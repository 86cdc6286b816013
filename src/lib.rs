//! # Tessella - Image Transforms and Mosaic Composition
//!
//! Tessella derives a fixed set of twelve transformed tiles from a pair
//! of source images and assembles them into a randomized 5x5 grid
//! mosaic.
//!
//! ## Features
//!
//! - **Owned pixel buffers**: bounds-checked RGB grids with clamping
//!   channel writes
//! - **Point transforms**: grayscale, sepia, channel-threshold filter
//! - **Neighborhood transform**: 3x3 box blur with an untouched border
//! - **Geometric transforms**: axis flips and nearest-neighbor shrink
//! - **Compositor**: color-keyed two-image merge and randomized mosaic
//!   assembly
//! - **Parallel derivation**: the twelve tiles are independent and run
//!   on the rayon pool by default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tessella::prelude::*;
//!
//! let base = codec::decode("image1.jpg")?;
//! let backdrop = codec::decode("image2.jpg")?;
//!
//! let options = PipelineOptions::default();
//! let mosaic = pipeline::compose(&base, &backdrop, &options, &mut rand::rng())?;
//!
//! codec::encode(&mosaic, pipeline::DEFAULT_OUTPUT)?;
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: pixel buffer, per-pixel view, value and error types
//! - [`codec`]: decode/encode/resample seam over the `image` crate
//! - [`transforms`]: the transform and compositor algorithms
//! - [`pipeline`]: the fixed twelve-tile recipe and end-to-end compose

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod core;
pub mod pipeline;
pub mod transforms;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use tessella::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::buffer::{Coordinates, ImageBuffer};
    pub use crate::core::pixel::PixelMut;
    pub use crate::core::types::{BackgroundColor, Channel, FlipAxis, Rgb};

    // Errors
    pub use crate::core::error::{
        BufferError, ComposeError, TessellaError, TessellaResult, TransformError,
    };

    // Modules used qualified
    pub use crate::{codec, pipeline, transforms};

    // Transforms
    pub use crate::transforms::{
        box_blur, channel_filter, chroma_key, flip, grayscale, mosaic, sepia, shrink, GRID_DIM,
        TILE_COUNT,
    };

    // Pipeline
    pub use crate::pipeline::{PipelineOptions, DEFAULT_OUTPUT};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
