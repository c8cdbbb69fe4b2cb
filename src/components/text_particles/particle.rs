//! A single simulated point sampled from the rasterized text.

use super::color::Color;
use super::pointer::PointerSnapshot;
use super::render::DrawTarget;
use super::shape::{ParticleShape, ShapePath};

/// One particle. Its origin is fixed at the grid cell it was sampled from.
#[derive(Clone, Debug)]
pub struct Particle {
	id: u64,
	/// Current horizontal position.
	pub x: f64,
	/// Current vertical position.
	pub y: f64,
	origin_x: f64,
	origin_y: f64,
	/// Current velocity.
	pub vx: f64,
	pub vy: f64,
	size: f64,
	color: Color,
	friction: f64,
	ease: f64,
}

impl Particle {
	/// Builds a particle at rest at `position`, homing towards `origin`.
	pub fn new(
		id: u64,
		origin: (f64, f64),
		position: (f64, f64),
		size: f64,
		color: Color,
		friction: f64,
		ease: f64,
	) -> Self {
		Self {
			id,
			x: position.0,
			y: position.1,
			origin_x: origin.0,
			origin_y: origin.1,
			vx: 0.0,
			vy: 0.0,
			size,
			color,
			friction,
			ease,
		}
	}

	/// Unique within the field that created it.
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Grid cell this particle was sampled from.
	pub fn origin(&self) -> (f64, f64) {
		(self.origin_x, self.origin_y)
	}

	/// Draw footprint, equal to the sampling gap.
	pub fn size(&self) -> f64 {
		self.size
	}

	/// Sampled color.
	pub fn color(&self) -> Color {
		self.color
	}

	/// Per-frame velocity decay.
	pub fn friction(&self) -> f64 {
		self.friction
	}

	/// Fraction of the distance to origin covered each frame.
	pub fn ease(&self) -> f64 {
		self.ease
	}

	/// Advances one frame: repulsion from the pointer, then friction and the
	/// pull back towards the origin.
	pub fn update(&mut self, pointer: &PointerSnapshot) {
		self.repel(pointer);
		self.integrate();
	}

	/// Adds an impulse away from the pointer when it is within range.
	///
	/// Range is a squared-distance test. A pointer sitting exactly on the
	/// particle has no direction, so that frame gets no impulse.
	fn repel(&mut self, pointer: &PointerSnapshot) {
		let dx = pointer.x - self.x;
		let dy = pointer.y - self.y;
		let distance_sq = dx * dx + dy * dy;

		if distance_sq > 0.0 && distance_sq < pointer.radius {
			let force = -pointer.radius / distance_sq;
			let angle = dy.atan2(dx);
			self.vx += force * angle.cos();
			self.vy += force * angle.sin();
		}
	}

	fn integrate(&mut self) {
		self.vx *= self.friction;
		self.vy *= self.friction;
		self.x += self.vx + (self.origin_x - self.x) * self.ease;
		self.y += self.vy + (self.origin_y - self.y) * self.ease;
	}

	/// Geometry at the current position.
	pub fn outline(&self, shape: ParticleShape) -> ShapePath {
		shape.outline(self.x, self.y, self.size)
	}

	/// Fills this particle's shape on `target`.
	pub fn draw(&self, shape: ParticleShape, target: &mut impl DrawTarget) {
		target.fill(&self.outline(shape), &self.color);
	}
}
