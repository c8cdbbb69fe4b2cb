//! Text rendered as an interactive particle field.
//!
//! Text is rasterized onto an HTML canvas, sampled on a grid into colored
//! particles, and animated every frame:
//! - Particles enter from the bottom edge and ease towards their sampled origin
//! - A nearby pointer repels them; friction and easing bring them back
//! - The pointer is retired shortly after input stops, so touch devices
//!   don't leave particles stuck out of place
//! - Particles draw as circles, squares, triangles or stars
//!
//! The simulation ([`ParticleField`], [`Particle`], [`PointerTracker`]) has no
//! browser dependency; the canvas is reached only through the [`DrawTarget`]
//! and [`PixelSource`] traits.
//!
//! # Example
//!
//! ```ignore
//! use text_particles::{ParticleShape, TextConfig, TextParticlesCanvas};
//!
//! let text = RwSignal::new("Hello".to_string());
//! let gap = RwSignal::new(4);
//! let shape = RwSignal::new(ParticleShape::Star);
//!
//! view! {
//!     <TextParticlesCanvas config=TextConfig::default() text=text gap=gap shape=shape fullscreen=true />
//! }
//! ```

mod color;
mod component;
mod config;
mod error;
mod field;
mod particle;
mod pixels;
mod pointer;
mod render;
mod shape;
mod text;

pub use color::Color;
pub use component::TextParticlesCanvas;
pub use config::{GradientStop, TextConfig};
pub use error::FieldError;
pub use field::{DEFAULT_GAP, FieldConfig, ParticleField};
pub use particle::Particle;
pub use pixels::{PixelBuffer, PixelSource};
pub use pointer::{
	DEFAULT_INFLUENCE_RADIUS, DelayedTask, INACTIVE_POSITION, MOVE_IDLE_MS, PointerSnapshot,
	PointerTracker, RELEASE_IDLE_MS,
};
pub use render::DrawTarget;
pub use shape::{ParticleShape, ShapePath};
pub use text::{line_positions, wrap_lines};
