//! Application configuration for the text particle canvas.

use serde::Deserialize;

use super::field::{DEFAULT_GAP, FieldConfig};
use super::pointer::{DEFAULT_INFLUENCE_RADIUS, PointerTracker};
use super::shape::ParticleShape;

/// One color stop of the text fill gradient.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GradientStop {
	/// Offset along the gradient, `0.0..=1.0`.
	pub stop: f64,
	/// Any CSS color (e.g., "orangered" or "#ff5500").
	pub color: String,
}

impl GradientStop {
	/// Stop at `stop` with any CSS color.
	pub fn new(stop: f64, color: impl Into<String>) -> Self {
		Self {
			stop,
			color: color.into(),
		}
	}
}

/// What text to draw and how to turn it into particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
	/// Text to rasterize.
	pub text: String,
	/// Font size in pixels. Also the line height.
	pub font_size: f64,
	/// Preferred font family; Arial is always appended as a fallback.
	pub font_family: String,
	/// Fraction of the canvas width a line may occupy before wrapping.
	pub max_width_ratio: f64,
	/// Diagonal fill gradient. Empty means plain white text.
	pub gradients: Vec<GradientStop>,
	/// Shape particles are drawn with.
	pub shape: ParticleShape,
	/// Sampling stride in pixels.
	pub gap: usize,
	/// Squared-distance threshold for pointer repulsion.
	pub radius: f64,
	/// Fixed canvas width; defaults to the container or window size.
	pub width: Option<f64>,
	/// Fixed canvas height; defaults to the container or window size.
	pub height: Option<f64>,
}

impl Default for TextConfig {
	fn default() -> Self {
		Self {
			text: "Hello World!".to_string(),
			font_size: 200.0,
			font_family: String::new(),
			max_width_ratio: 0.8,
			gradients: vec![
				GradientStop::new(0.3, "purple"),
				GradientStop::new(0.6, "orangered"),
				GradientStop::new(0.9, "green"),
			],
			shape: ParticleShape::Circle,
			gap: DEFAULT_GAP,
			radius: DEFAULT_INFLUENCE_RADIUS,
			width: None,
			height: None,
		}
	}
}

impl TextConfig {
	/// Sampling configuration for the particle field.
	pub fn field_config(&self) -> FieldConfig {
		FieldConfig {
			gap: self.gap,
			shape: self.shape,
			..FieldConfig::default()
		}
	}

	/// Pointer tracker using the configured influence radius.
	pub fn pointer(&self) -> PointerTracker {
		PointerTracker::new(self.radius)
	}

	/// CSS font shorthand used to rasterize the text.
	pub fn font(&self) -> String {
		if self.font_family.is_empty() {
			format!("{}px Arial", self.font_size)
		} else {
			format!("{}px {}, Arial", self.font_size, self.font_family)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config: TextConfig =
			serde_json::from_str(r#"{ "text": "Rust", "shape": "star", "gap": 3 }"#).unwrap();
		assert_eq!(config.text, "Rust");
		assert_eq!(config.shape, ParticleShape::Star);
		assert_eq!(config.gap, 3);
		assert_eq!(config.font_size, 200.0);
		assert_eq!(config.gradients.len(), 3);
	}

	#[test]
	fn gradient_stops_parse() {
		let config: TextConfig = serde_json::from_str(
			r##"{ "gradients": [{ "stop": 0.5, "color": "#ff5500" }] }"##,
		)
		.unwrap();
		assert_eq!(config.gradients, vec![GradientStop::new(0.5, "#ff5500")]);
	}

	#[test]
	fn unknown_shape_is_rejected() {
		assert!(serde_json::from_str::<TextConfig>(r#"{ "shape": "hexagon" }"#).is_err());
	}

	#[test]
	fn field_config_follows_text_config() {
		let config = TextConfig {
			gap: 5,
			shape: ParticleShape::Triangle,
			radius: 900.0,
			..TextConfig::default()
		};
		let field = config.field_config();
		assert_eq!((field.gap, field.shape), (5, ParticleShape::Triangle));
		assert_eq!(config.pointer().snapshot().radius, 900.0);
	}

	#[test]
	fn font_falls_back_to_arial() {
		let mut config = TextConfig::default();
		assert_eq!(config.font(), "200px Arial");
		config.font_family = "Georgia".into();
		assert_eq!(config.font(), "200px Georgia, Arial");
	}
}
