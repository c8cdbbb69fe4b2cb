//! Sampled particle colors.

/// RGBA color taken from a single rasterized pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Raw alpha byte, 0 = fully transparent.
	pub a: u8,
}

impl Color {
	/// Color from one `[r, g, b, a]` pixel.
	pub const fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
		Self { r, g, b, a }
	}

	/// Fully transparent samples never become particles.
	pub fn is_transparent(self) -> bool {
		self.a == 0
	}

	/// CSS fill style for this sample.
	///
	/// Alpha is written as the raw byte. The canvas clamps it to 1.0, so any
	/// visible sample, antialiased glyph edges included, draws opaque.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}
