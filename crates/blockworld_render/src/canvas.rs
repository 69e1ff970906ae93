//! # Drawing Surfaces
//!
//! The compositor needs exactly two things from a surface: set one pixel,
//! and fill the whole thing. [`Canvas`] is that capability; [`FrameBuffer`]
//! is the in-memory implementation used by tests and headless runs.

use blockworld_core::Rgb;

/// A surface the compositor can draw on.
///
/// `x` is the column, `y` is the row. Implementations decide what happens
/// to coordinates outside their area; [`FrameBuffer`] ignores them.
pub trait Canvas {
    /// Sets one pixel.
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb);

    /// Fills the whole surface with one colour.
    fn fill(&mut self, color: Rgb);
}

/// An RGB frame held in memory, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    /// Creates a black frame.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width.saturating_mul(height)],
        }
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Reads one pixel, or `None` outside the frame.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Row-major pixels.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed `r, g, b` bytes, ready for a PPM body or a texture upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copies another frame of the same size into this one.
    ///
    /// Returns `false` (and copies nothing) if the sizes differ.
    pub fn copy_from(&mut self, other: &Self) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        self.pixels.copy_from_slice(&other.pixels);
        true
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl Canvas for FrameBuffer {
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}
