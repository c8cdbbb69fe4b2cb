//! UI components.

pub mod text_particles;
