//! Error types for sampling and canvas setup.

use thiserror::Error;

/// Failures surfaced by the particle field and its canvas glue.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
	/// Pixel data length does not match `width * height * 4`.
	#[error("malformed pixel buffer: {width}x{height} needs {expected} bytes, got {actual}")]
	MalformedBuffer {
		/// Stated width in pixels.
		width: u32,
		/// Stated height in pixels.
		height: u32,
		/// Byte length implied by the dimensions.
		expected: usize,
		/// Byte length actually supplied.
		actual: usize,
	},
	/// The region's byte length does not fit in memory.
	#[error("pixel buffer {width}x{height} is too large")]
	BufferTooLarge {
		/// Requested width in pixels.
		width: u32,
		/// Requested height in pixels.
		height: u32,
	},
	/// Grid spacing must be at least one pixel.
	#[error("grid spacing must be greater than zero")]
	ZeroSpacing,
	/// A per-particle tuning range is empty or not finite.
	#[error("invalid {name} range {start}..{end}")]
	InvalidRange {
		/// Which tunable the range belongs to.
		name: &'static str,
		/// Inclusive lower bound.
		start: f64,
		/// Exclusive upper bound.
		end: f64,
	},
	/// The rendering surface is missing or refused an operation.
	#[error("rendering surface unavailable: {0}")]
	Surface(String),
}
