//! Row-major RGBA pixel buffers read back from a rendering surface.

use super::color::Color;
use super::error::FieldError;

const CHANNELS: usize = 4;

/// A validated snapshot of a rectangular pixel region.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
	width: u32,
	height: u32,
	data: Vec<u8>,
}

impl PixelBuffer {
	/// Wraps raw RGBA bytes, rejecting data whose length disagrees with the
	/// stated dimensions.
	pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FieldError> {
		let expected = byte_len(width, height)?;
		if data.len() != expected {
			return Err(FieldError::MalformedBuffer {
				width,
				height,
				expected,
				actual: data.len(),
			});
		}
		Ok(Self {
			width,
			height,
			data,
		})
	}

	/// A fully transparent buffer. Zero-area dimensions are allowed.
	pub fn empty(width: u32, height: u32) -> Result<Self, FieldError> {
		Ok(Self {
			width,
			height,
			data: vec![0; byte_len(width, height)?],
		})
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Raw RGBA bytes, row-major.
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Color at `(x, y)`, or `None` outside the buffer.
	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let index = (y as usize * self.width as usize + x as usize) * CHANNELS;
		let px = self.data.get(index..index + CHANNELS)?;
		Some(Color::from_rgba([px[0], px[1], px[2], px[3]]))
	}

	/// Overwrites one pixel. Out-of-bounds writes are ignored.
	pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
		if x >= self.width || y >= self.height {
			return;
		}
		let index = (y as usize * self.width as usize + x as usize) * CHANNELS;
		self.data[index..index + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, color.a]);
	}
}

/// Byte length of a `width`x`height` RGBA region, if it fits in memory.
fn byte_len(width: u32, height: u32) -> Result<usize, FieldError> {
	(width as usize)
		.checked_mul(height as usize)
		.and_then(|px| px.checked_mul(CHANNELS))
		.ok_or(FieldError::BufferTooLarge { width, height })
}

/// Anything that can hand back its pixels for sampling.
pub trait PixelSource {
	/// Reads the region `(0, 0)..(width, height)`.
	fn read_pixels(&self, width: u32, height: u32) -> Result<PixelBuffer, FieldError>;
}

impl PixelSource for PixelBuffer {
	fn read_pixels(&self, width: u32, height: u32) -> Result<PixelBuffer, FieldError> {
		let mut region = PixelBuffer::empty(width, height)?;
		for y in 0..height.min(self.height) {
			for x in 0..width.min(self.width) {
				if let Some(color) = self.pixel(x, y) {
					region.set_pixel(x, y, color);
				}
			}
		}
		Ok(region)
	}
}
