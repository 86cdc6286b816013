//! Core value types shared by the buffer and transform layers.
//!
//! The enums here are closed sets: the transforms operate on exactly three
//! channels, two flip axes and five named background colors. Using enums
//! keeps parameter validation at the parsing boundary and makes the
//! transform signatures impossible to call with an unrecognized name.

use crate::core::error::BufferError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clamp a wide integer into the 0..=255 channel range.
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// An 8-bit RGB triple.
///
/// The only pixel value type in the crate; there is no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a pixel value from in-range channel components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel value from wide integers, clamping each channel
    /// into 0..=255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a gray pixel with all channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// The grayscale average `(r + g + b) / 3`, truncating.
    pub fn average(self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Read the component selected by `channel`.
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Common colors
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r:{} g:{} b:{}", self.r, self.g, self.b)
    }
}

/// One of the three color channels, used to select which component a
/// threshold test reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in red/green/blue order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl FromStr for Channel {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(BufferError::UnknownChannel {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Axis for the flip transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Mirror left-to-right: result (x, y) takes source (width-1-x, y).
    Horizontal,
    /// Mirror top-to-bottom: result (x, y) takes source (x, height-1-y).
    Vertical,
}

/// Background colors accepted for blank-buffer construction.
///
/// The set is fixed; any other name fails at parse time with
/// [`BufferError::UnknownBackground`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    #[default]
    White,
    Black,
    Red,
    Green,
    Blue,
}

impl BackgroundColor {
    /// The RGB value this name stands for.
    pub const fn rgb(self) -> Rgb {
        match self {
            BackgroundColor::White => Rgb::WHITE,
            BackgroundColor::Black => Rgb::BLACK,
            BackgroundColor::Red => Rgb::RED,
            BackgroundColor::Green => Rgb::GREEN,
            BackgroundColor::Blue => Rgb::BLUE,
        }
    }
}

impl FromStr for BackgroundColor {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(BackgroundColor::White),
            "black" => Ok(BackgroundColor::Black),
            "red" => Ok(BackgroundColor::Red),
            "green" => Ok(BackgroundColor::Green),
            "blue" => Ok(BackgroundColor::Blue),
            other => Err(BufferError::UnknownBackground {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundColor::White => write!(f, "white"),
            BackgroundColor::Black => write!(f, "black"),
            BackgroundColor::Red => write!(f, "red"),
            BackgroundColor::Green => write!(f, "green"),
            BackgroundColor::Blue => write!(f, "blue"),
        }
    }
}
