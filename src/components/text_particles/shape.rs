//! Particle shapes and their fill geometry.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

const STAR_SPIKES: usize = 5;

/// Shape every particle in a field is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
	/// Disc centered on the particle.
	#[default]
	Circle,
	/// Square hanging down-right from the particle.
	Square,
	/// Upward-pointing triangle.
	Triangle,
	/// Five-pointed star.
	Star,
}

/// Filled geometry produced for one particle.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapePath {
	/// Disc centered at `(cx, cy)`.
	Disc { cx: f64, cy: f64, radius: f64 },
	/// Axis-aligned rectangle with its top-left corner at `(x, y)`.
	Rect {
		x: f64,
		y: f64,
		width: f64,
		height: f64,
	},
	/// Closed polygon, vertices in drawing order.
	Polygon(Vec<(f64, f64)>),
}

impl ParticleShape {
	/// All shapes, in selector order.
	pub const ALL: [ParticleShape; 4] = [
		ParticleShape::Circle,
		ParticleShape::Square,
		ParticleShape::Triangle,
		ParticleShape::Star,
	];

	/// Name used in config and the shape selector.
	pub fn as_str(self) -> &'static str {
		match self {
			ParticleShape::Circle => "circle",
			ParticleShape::Square => "square",
			ParticleShape::Triangle => "triangle",
			ParticleShape::Star => "star",
		}
	}

	/// Geometry for a particle of footprint `size` at `(x, y)`.
	pub fn outline(self, x: f64, y: f64, size: f64) -> ShapePath {
		match self {
			ParticleShape::Circle => ShapePath::Disc {
				cx: x,
				cy: y,
				radius: size / 2.0,
			},
			// Anchored at the top-left, so squares sit down-right of centered shapes.
			ParticleShape::Square => ShapePath::Rect {
				x,
				y,
				width: size,
				height: size,
			},
			ParticleShape::Triangle => triangle(x, y, size),
			ParticleShape::Star => star(x, y, size),
		}
	}
}

fn triangle(x: f64, y: f64, size: f64) -> ShapePath {
	let half = size / 2.0;
	ShapePath::Polygon(vec![(x, y - half), (x + half, y + half), (x - half, y + half)])
}

fn star(x: f64, y: f64, size: f64) -> ShapePath {
	let outer = size / 2.0;
	let inner = outer / 2.0;
	let step = PI / STAR_SPIKES as f64;
	let mut rot = PI / 2.0 * 3.0;

	let mut points = Vec::with_capacity(STAR_SPIKES * 2 + 2);
	points.push((x, y - outer));
	for _ in 0..STAR_SPIKES {
		points.push((x + rot.cos() * outer, y + rot.sin() * outer));
		rot += step;
		points.push((x + rot.cos() * inner, y + rot.sin() * inner));
		rot += step;
	}
	points.push((x, y - outer));

	ShapePath::Polygon(points)
}

impl fmt::Display for ParticleShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ParticleShape {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ParticleShape::ALL
			.into_iter()
			.find(|shape| shape.as_str() == s)
			.ok_or_else(|| format!("unknown particle shape: {s}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	#[test]
	fn square_is_anchored_top_left() {
		assert_eq!(
			ParticleShape::Square.outline(5.0, 5.0, 10.0),
			ShapePath::Rect {
				x: 5.0,
				y: 5.0,
				width: 10.0,
				height: 10.0,
			}
		);
	}

	#[test]
	fn circle_is_centered() {
		assert_eq!(
			ParticleShape::Circle.outline(5.0, 5.0, 10.0),
			ShapePath::Disc {
				cx: 5.0,
				cy: 5.0,
				radius: 5.0,
			}
		);
	}

	#[test]
	fn triangle_points_up() {
		let ShapePath::Polygon(points) = ParticleShape::Triangle.outline(0.0, 0.0, 4.0) else {
			panic!("triangle should be a polygon");
		};
		assert_eq!(points, vec![(0.0, -2.0), (2.0, 2.0), (-2.0, 2.0)]);
	}

	#[test]
	fn star_alternates_radii_and_closes_at_top() {
		let ShapePath::Polygon(points) = ParticleShape::Star.outline(10.0, 10.0, 8.0) else {
			panic!("star should be a polygon");
		};
		assert_eq!(points.len(), 12);
		assert!(close(points[0], (10.0, 6.0)));
		assert!(close(points[1], (10.0, 6.0)));
		assert!(close(points[11], (10.0, 6.0)));

		for (i, &(px, py)) in points[1..11].iter().enumerate() {
			let r = ((px - 10.0).powi(2) + (py - 10.0).powi(2)).sqrt();
			let expected = if i % 2 == 0 { 4.0 } else { 2.0 };
			assert!((r - expected).abs() < 1e-9, "vertex {i} at radius {r}");
		}
	}

	#[test]
	fn parses_selector_names() {
		assert_eq!("star".parse::<ParticleShape>(), Ok(ParticleShape::Star));
		assert!("hexagon".parse::<ParticleShape>().is_err());
		assert_eq!(ParticleShape::default(), ParticleShape::Circle);
	}
}
