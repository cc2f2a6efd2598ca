//! Screen region capture.
//!
//! This module provides:
//! - The selected rectangle (`Region`)
//! - The captured raster (`Frame`)
//! - The capture capability (`Capturer`) and its desktop implementation

pub mod screenshot;

use anyhow::Result;
use image::{ImageBuffer, Rgba};

pub use screenshot::ScreenCapturer;

/// Offset from the region's top-left corner used when clicking to focus,
/// so the click lands inside the region rather than on its border.
pub const FOCUS_OFFSET: i32 = 2;

/// An in-memory RGBA image of a captured region.
pub type Frame = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// A rectangle on the screen in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Screen point clicked to focus the window under the region.
    pub fn focus_point(&self) -> (i32, i32) {
        (self.x as i32 + FOCUS_OFFSET, self.y as i32 + FOCUS_OFFSET)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x={}, y={}, width={}, height={}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Grabs still images of a screen region.
pub trait Capturer {
    /// Returns a frame containing exactly `region` of the current screen.
    fn capture(&mut self, region: &Region) -> Result<Frame>;
}
