//! Drawing surfaces for the particle field.
//!
//! The simulation only needs two things from a surface: fill a shape with a
//! color, and clear a region. The browser canvas implements both, and also
//! serves as the pixel source the field samples from.

use std::f64::consts::PI;

use wasm_bindgen::Clamped;
use web_sys::CanvasRenderingContext2d;

use super::color::Color;
use super::error::FieldError;
use super::pixels::{PixelBuffer, PixelSource};
use super::shape::ShapePath;

/// Fill-only drawing primitives used by particles.
pub trait DrawTarget {
	/// Fills `path` with `color`. Shapes are never stroked.
	fn fill(&mut self, path: &ShapePath, color: &Color);

	/// Clears `(0, 0)..(width, height)`.
	fn clear(&mut self, width: f64, height: f64);
}

// `fill` shadows the inherent canvas method, hence the qualified calls below.
impl DrawTarget for CanvasRenderingContext2d {
	fn fill(&mut self, path: &ShapePath, color: &Color) {
		self.set_fill_style_str(&color.to_css());

		match path {
			ShapePath::Disc { cx, cy, radius } => {
				self.begin_path();
				let _ = self.arc(*cx, *cy, *radius, 0.0, PI * 2.0);
				CanvasRenderingContext2d::fill(self);
			}
			ShapePath::Rect {
				x,
				y,
				width,
				height,
			} => self.fill_rect(*x, *y, *width, *height),
			ShapePath::Polygon(points) => {
				let Some((&(x0, y0), rest)) = points.split_first() else {
					return;
				};
				self.begin_path();
				self.move_to(x0, y0);
				for &(x, y) in rest {
					self.line_to(x, y);
				}
				self.close_path();
				CanvasRenderingContext2d::fill(self);
			}
		}
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}
}

impl PixelSource for CanvasRenderingContext2d {
	fn read_pixels(&self, width: u32, height: u32) -> Result<PixelBuffer, FieldError> {
		// getImageData throws on an empty region
		if width == 0 || height == 0 {
			return PixelBuffer::empty(width, height);
		}

		let image = self
			.get_image_data(0.0, 0.0, width as f64, height as f64)
			.map_err(|e| FieldError::Surface(format!("getImageData failed: {e:?}")))?;
		let Clamped(data) = image.data();
		PixelBuffer::new(image.width(), image.height(), data)
	}
}

/// Records fills for assertions instead of drawing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingTarget {
	pub fills: Vec<(ShapePath, Color)>,
	pub clears: Vec<(f64, f64)>,
}

#[cfg(test)]
impl DrawTarget for RecordingTarget {
	fn fill(&mut self, path: &ShapePath, color: &Color) {
		self.fills.push((path.clone(), *color));
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.clears.push((width, height));
	}
}
