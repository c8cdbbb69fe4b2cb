//! text-particles: Text rendered as an interactive particle field.
//!
//! This crate provides a WASM canvas component that rasterizes text, samples
//! it into particles, and animates them with pointer repulsion and easing.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::text_particles::{
	ParticleField, ParticleShape, PointerTracker, TextConfig, TextParticlesCanvas,
};

/// Slider bounds for the particle spacing control.
const GAP_RANGE: (usize, usize) = (2, 10);

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("text-particles: logging initialized");
}

/// Load configuration from a script element with id="text-particles-config".
/// Expected format: JSON matching [`TextConfig`]; missing fields use defaults.
fn load_config() -> Option<TextConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("text-particles-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<TextConfig>(&json_text) {
		Ok(config) => {
			info!(
				"text-particles: loaded config for {:?} ({} shape, gap {})",
				config.text, config.shape, config.gap
			);
			Some(config)
		}
		Err(e) => {
			warn!("text-particles: failed to parse config: {}", e);
			None
		}
	}
}

/// Filled-track background for the spacing slider.
fn slider_track(value: usize) -> String {
	let (min, max) = GAP_RANGE;
	let progress = (value.clamp(min, max) - min) as f64 / (max - min) as f64 * 100.0;
	format!("background: linear-gradient(to right, #f50 {progress}%, #ccc {progress}%)")
}

/// Main application component.
/// Loads the configuration from the DOM and renders the particle canvas with
/// text, spacing and shape controls.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let text = RwSignal::new(config.text.clone());
	let gap = RwSignal::new(config.gap.clamp(GAP_RANGE.0, GAP_RANGE.1));
	let shape = RwSignal::new(config.shape);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Text Particles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-particles">
			<TextParticlesCanvas config=config text=text gap=gap shape=shape fullscreen=true />
			<div class="particles-overlay">
				<input
					type="text"
					class="text-input"
					placeholder="Type something and press Enter"
					prop:value=move || text.get()
					on:change=move |ev| {
						text.set(event_target_value(&ev));
					}
				/>
				<input
					type="range"
					id="range"
					min=GAP_RANGE.0.to_string()
					max=GAP_RANGE.1.to_string()
					step="1"
					prop:value=move || gap.get().to_string()
					style=move || slider_track(gap.get())
					on:input=move |ev| {
						match event_target_value(&ev).parse::<usize>() {
							Ok(value) => gap.set(value),
							Err(e) => warn!("text-particles: bad spacing value: {}", e),
						}
					}
				/>
				<select
					class="shape-select"
					on:change=move |ev| {
						match event_target_value(&ev).parse::<ParticleShape>() {
							Ok(value) => shape.set(value),
							Err(e) => warn!("text-particles: {}", e),
						}
					}
				>
					{ParticleShape::ALL
						.into_iter()
						.map(|s| {
							view! {
								<option value=s.as_str() selected=move || shape.get() == s>
									{s.as_str()}
								</option>
							}
						})
						.collect_view()}
				</select>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slider_track_fills_to_the_current_value() {
		assert_eq!(
			slider_track(2),
			"background: linear-gradient(to right, #f50 0%, #ccc 0%)"
		);
		assert_eq!(
			slider_track(6),
			"background: linear-gradient(to right, #f50 50%, #ccc 50%)"
		);
		assert_eq!(
			slider_track(40),
			"background: linear-gradient(to right, #f50 100%, #ccc 100%)"
		);
	}
}
