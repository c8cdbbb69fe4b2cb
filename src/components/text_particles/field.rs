//! Particle field: sampling rasterized pixels into particles and advancing
//! them once per animation frame.
//!
//! The field owns the particle collection and the sampling configuration.
//! Every resample throws the old collection away and builds a new one from
//! the pixel buffer, so all particles re-enter from the bottom edge on a text
//! change. Reconfiguration (`set_shape`, `set_spacing`) is recorded and only
//! takes effect at the next resample. The pointer's influence radius is not
//! part of the field; it travels with each [`PointerSnapshot`].

use std::ops::Range;

use log::{debug, info};
use rand::Rng;

use super::error::FieldError;
use super::particle::Particle;
use super::pixels::{PixelBuffer, PixelSource};
use super::pointer::PointerSnapshot;
use super::render::DrawTarget;
use super::shape::ParticleShape;

/// Default sampling stride in pixels.
pub const DEFAULT_GAP: usize = 4;

/// Sampling and per-particle tuning applied on resample.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Grid stride in pixels. Also the particle footprint.
	pub gap: usize,
	/// Shape particles are drawn with.
	pub shape: ParticleShape,
	/// Range each particle's friction is drawn from.
	pub friction: Range<f64>,
	/// Range each particle's ease is drawn from.
	pub ease: Range<f64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			gap: DEFAULT_GAP,
			shape: ParticleShape::Circle,
			friction: 0.18..0.58,
			ease: 0.03..0.13,
		}
	}
}

/// The particle collection plus the state needed to rebuild it.
pub struct ParticleField<R: Rng> {
	particles: Vec<Particle>,
	/// Applied at the next resample.
	config: FieldConfig,
	/// Shape the current collection draws with.
	shape: ParticleShape,
	width: f64,
	height: f64,
	next_id: u64,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	/// Creates an empty field. Call [`ParticleField::resample`] to populate it.
	pub fn new(config: FieldConfig, rng: R) -> Result<Self, FieldError> {
		if config.gap == 0 {
			return Err(FieldError::ZeroSpacing);
		}
		check_range("friction", &config.friction)?;
		check_range("ease", &config.ease)?;
		Ok(Self {
			particles: Vec::new(),
			shape: config.shape,
			config,
			width: 0.0,
			height: 0.0,
			next_id: 0,
			rng,
		})
	}

	/// Live particles, in sampling order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// `true` when nothing was sampled.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Shape the live particles are drawn with.
	pub fn shape(&self) -> ParticleShape {
		self.shape
	}

	/// Configuration the next resample will use.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Width of the last sampled surface.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Height of the last sampled surface.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Shape for the next resample.
	pub fn set_shape(&mut self, shape: ParticleShape) {
		debug!("particle shape -> {shape} (next resample)");
		self.config.shape = shape;
	}

	/// Grid stride for the next resample. Zero is rejected.
	pub fn set_spacing(&mut self, gap: usize) -> Result<(), FieldError> {
		if gap == 0 {
			return Err(FieldError::ZeroSpacing);
		}
		debug!("particle spacing -> {gap}px (next resample)");
		self.config.gap = gap;
		Ok(())
	}

	/// Rebuilds the particle set from `pixels`.
	///
	/// One particle is created per `gap`-spaced grid cell whose alpha is
	/// non-zero. A fully transparent or zero-area buffer leaves the field empty.
	pub fn resample(&mut self, pixels: &PixelBuffer) -> Result<(), FieldError> {
		let gap = self.config.gap;
		if gap == 0 {
			return Err(FieldError::ZeroSpacing);
		}

		self.width = pixels.width() as f64;
		self.height = pixels.height() as f64;
		self.shape = self.config.shape;

		let mut particles = Vec::new();
		for y in (0..pixels.height()).step_by(gap) {
			for x in (0..pixels.width()).step_by(gap) {
				let Some(color) = pixels.pixel(x, y) else {
					continue;
				};
				if color.is_transparent() {
					continue;
				}

				// Particles enter from the bottom edge and ease up into place.
				let start = (self.rng.r#gen::<f64>() * self.width, self.height);
				let friction = self.rng.gen_range(self.config.friction.clone());
				let ease = self.rng.gen_range(self.config.ease.clone());
				particles.push(Particle::new(
					self.next_id,
					(x as f64, y as f64),
					start,
					gap as f64,
					color,
					friction,
					ease,
				));
				self.next_id += 1;
			}
		}

		info!(
			"sampled {} particles from {}x{} surface (gap {gap})",
			particles.len(),
			pixels.width(),
			pixels.height()
		);
		self.particles = particles;
		Ok(())
	}

	/// Reads `source` at the field's current size and resamples.
	pub fn resample_from(
		&mut self,
		source: &impl PixelSource,
		width: u32,
		height: u32,
	) -> Result<(), FieldError> {
		let pixels = source.read_pixels(width, height)?;
		self.resample(&pixels)
	}

	/// Advances and draws every particle for one frame.
	pub fn tick(&mut self, pointer: PointerSnapshot, target: &mut impl DrawTarget) {
		let shape = self.shape;
		for particle in &mut self.particles {
			particle.update(&pointer);
			particle.draw(shape, target);
		}
	}

	/// Clears the area of the last sampled surface.
	pub fn clear(&self, target: &mut impl DrawTarget) {
		target.clear(self.width, self.height);
	}
}

/// `gen_range` panics on empty ranges, so they are rejected up front.
fn check_range(name: &'static str, range: &Range<f64>) -> Result<(), FieldError> {
	if range.start.is_finite() && range.end.is_finite() && range.start < range.end {
		Ok(())
	} else {
		Err(FieldError::InvalidRange {
			name,
			start: range.start,
			end: range.end,
		})
	}
}
