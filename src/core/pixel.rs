//! Per-coordinate pixel view.
//!
//! A [`PixelMut`] is an index pair bound to a mutable borrow of its
//! buffer: reads and writes go through the buffer's storage, never a
//! cached copy, and the view cannot outlive the borrow. Channel setters
//! accept wide integers and clamp into 0..=255.

use crate::core::buffer::ImageBuffer;
use crate::core::types::{clamp_channel, Channel, Rgb};

/// Read/write access to one pixel of an [`ImageBuffer`].
#[derive(Debug)]
pub struct PixelMut<'a> {
    buffer: &'a mut ImageBuffer,
    x: u32,
    y: u32,
}

impl<'a> PixelMut<'a> {
    /// Bind a view to an already-validated coordinate.
    pub(crate) fn new(buffer: &'a mut ImageBuffer, x: u32, y: u32) -> Self {
        Self { buffer, x, y }
    }

    /// The x coordinate this view is bound to.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// The y coordinate this view is bound to.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Current red component.
    pub fn red(&self) -> u8 {
        self.buffer.rgb(self.x, self.y).r
    }

    /// Current green component.
    pub fn green(&self) -> u8 {
        self.buffer.rgb(self.x, self.y).g
    }

    /// Current blue component.
    pub fn blue(&self) -> u8 {
        self.buffer.rgb(self.x, self.y).b
    }

    /// Read the component selected by `channel`.
    pub fn channel(&self, channel: Channel) -> u8 {
        self.buffer.rgb(self.x, self.y).channel(channel)
    }

    /// The whole pixel value.
    pub fn rgb(&self) -> Rgb {
        self.buffer.rgb(self.x, self.y)
    }

    /// Set the red component, clamping into 0..=255.
    pub fn set_red(&mut self, value: i32) {
        let mut px = self.rgb();
        px.r = clamp_channel(value);
        self.buffer.set_rgb(self.x, self.y, px);
    }

    /// Set the green component, clamping into 0..=255.
    pub fn set_green(&mut self, value: i32) {
        let mut px = self.rgb();
        px.g = clamp_channel(value);
        self.buffer.set_rgb(self.x, self.y, px);
    }

    /// Set the blue component, clamping into 0..=255.
    pub fn set_blue(&mut self, value: i32) {
        let mut px = self.rgb();
        px.b = clamp_channel(value);
        self.buffer.set_rgb(self.x, self.y, px);
    }

    /// Replace the whole pixel value.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.buffer.set_rgb(self.x, self.y, rgb);
    }
}

impl std::fmt::Display for PixelMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BackgroundColor;

    #[test]
    fn test_view_reads_through_buffer() {
        let mut buf = ImageBuffer::blank(2, 2, BackgroundColor::Blue).unwrap();
        let px = buf.pixel_mut(1, 1).unwrap();
        assert_eq!((px.red(), px.green(), px.blue()), (0, 0, 255));
        assert_eq!((px.x(), px.y()), (1, 1));
    }

    #[test]
    fn test_setters_clamp() {
        let mut buf = ImageBuffer::blank(1, 1, BackgroundColor::Black).unwrap();
        let mut px = buf.pixel_mut(0, 0).unwrap();
        px.set_red(300);
        px.set_green(-5);
        px.set_blue(128);
        assert_eq!(buf.get(0, 0).unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_writes_land_in_the_buffer() {
        let mut buf = ImageBuffer::blank(3, 1, BackgroundColor::White).unwrap();
        buf.pixel_mut(2, 0).unwrap().set_rgb(Rgb::new(1, 2, 3));
        assert_eq!(buf.get(2, 0).unwrap(), Rgb::new(1, 2, 3));
        // Neighbors untouched.
        assert_eq!(buf.get(1, 0).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_view_requires_valid_coordinate() {
        let mut buf = ImageBuffer::blank(2, 2, BackgroundColor::White).unwrap();
        assert!(buf.pixel_mut(2, 0).is_err());
    }
}
