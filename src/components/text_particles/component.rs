//! Leptos component wrapping the text particle canvas.
//!
//! The component creates an HTML canvas, rasterizes the configured text onto
//! it, samples the pixels into a [`ParticleField`] and runs the animation
//! loop via `requestAnimationFrame`. Pointer events feed a [`PointerTracker`].
//! Text, spacing and shape changes, as well as window resizes, only mark the
//! field for a resample; the rebuild happens at the start of the next frame so
//! a render pass never sees a half-built collection.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info, warn};
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::config::TextConfig;
use super::error::FieldError;
use super::field::ParticleField;
use super::pointer::PointerTracker;
use super::shape::ParticleShape;
use super::text;

/// Bundles the simulation with the canvas it samples from and draws on.
struct CanvasContext {
	field: ParticleField<SmallRng>,
	pointer: PointerTracker,
	ctx: CanvasRenderingContext2d,
	config: TextConfig,
	width: f64,
	height: f64,
	needs_resample: bool,
}

type SharedContext = Rc<RefCell<Option<CanvasContext>>>;
type Listener = Closure<dyn FnMut(Event)>;

impl CanvasContext {
	/// Draws the text, samples it and replaces the particle set.
	fn resample(&mut self) {
		self.needs_resample = false;
		let (w, h) = (self.width as u32, self.height as u32);
		let result = text::draw_text(&self.ctx, &self.config, self.width, self.height)
			.and_then(|()| self.field.resample_from(&self.ctx, w, h));
		if let Err(e) = result {
			warn!("text-particles: resample failed: {}", e);
		}
	}

	fn reconfigure(&mut self, text: String, gap: usize, shape: ParticleShape) {
		if apply_settings(&mut self.config, &mut self.field, text, gap, shape) {
			self.needs_resample = true;
		}
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.needs_resample = true;
	}

	/// One animation frame: retire an idle pointer, apply any pending
	/// resample, then clear and advance every particle.
	fn frame(&mut self, now: f64) {
		self.pointer.poll(now);
		if self.needs_resample {
			self.resample();
		}
		self.field.clear(&mut self.ctx);
		self.field.tick(self.pointer.snapshot(), &mut self.ctx);
	}
}

/// Applies live text, spacing and shape settings to `config` and `field`.
///
/// Returns `true` only when something actually changed, so the caller
/// resamples once per real change. Blank text and zero spacing are ignored.
fn apply_settings<R: Rng>(
	config: &mut TextConfig,
	field: &mut ParticleField<R>,
	text: String,
	gap: usize,
	shape: ParticleShape,
) -> bool {
	let mut changed = false;

	if text.trim().is_empty() {
		debug!("text-particles: ignoring empty text");
	} else if text != config.text {
		config.text = text;
		changed = true;
	}

	if gap != config.gap {
		match field.set_spacing(gap) {
			Ok(()) => {
				config.gap = gap;
				changed = true;
			}
			Err(e) => warn!("text-particles: {}", e),
		}
	}

	if shape != config.shape {
		field.set_shape(shape);
		config.shape = shape;
		changed = true;
	}

	changed
}

/// Renders text as an interactive particle field on a canvas element.
///
/// `config` supplies the initial text styling and sampling parameters; the
/// `text`, `gap` and `shape` signals override it live. With
/// `fullscreen = true` the canvas fills the window and follows resizes.
/// Fixed `config.width`/`config.height` take precedence over automatic sizing.
#[component]
pub fn TextParticlesCanvas(
	config: TextConfig,
	#[prop(into)] text: Signal<String>,
	#[prop(into)] gap: Signal<usize>,
	#[prop(into)] shape: Signal<ParticleShape>,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Vec<Listener>>> = Rc::new(RefCell::new(Vec::new()));
	let (context_init, animate_init, resize_cb_init, listeners_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		listeners.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("text-particles: no window, animation not started");
			return;
		};

		let (w, h) = canvas_size(&window, &canvas, &config, fullscreen);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match acquire_context(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("text-particles: {}", e);
				return;
			}
		};

		let mut config = config.clone();
		config.text = text.get_untracked();
		config.gap = gap.get_untracked();
		config.shape = shape.get_untracked();

		let field = match ParticleField::new(config.field_config(), SmallRng::seed_from_u64(seed()))
		{
			Ok(field) => field,
			Err(e) => {
				error!("text-particles: {}", e);
				return;
			}
		};
		info!("text-particles: canvas {}x{}, shape {}", w, h, config.shape);

		*context_init.borrow_mut() = Some(CanvasContext {
			field,
			pointer: config.pointer(),
			ctx,
			config,
			width: w,
			height: h,
			needs_resample: true,
		});

		// Pointer input is read from the whole window, in canvas coordinates.
		let pointer_handlers = [
			("mousemove", move_listener(&context_init, &canvas, mouse_client)),
			("touchmove", move_listener(&context_init, &canvas, touch_client)),
			("touchend", release_listener(&context_init)),
			("touchcancel", release_listener(&context_init)),
			("click", release_listener(&context_init)),
		];
		let mut kept = listeners_init.borrow_mut();
		for (event, cb) in pointer_handlers {
			let _ = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
			kept.push(cb);
		}
		drop(kept);

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.frame(js_sys::Date::now());
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_cfg = context.clone();
	Effect::new(move |_| {
		let (new_text, new_gap, new_shape) = (text.get(), gap.get(), shape.get());
		if let Some(ref mut c) = *context_cfg.borrow_mut() {
			c.reconfigure(new_text, new_gap, new_shape);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="text-particles-canvas"
			style="display: block; touch-action: none;"
		/>
	}
}

fn mouse_client(ev: &Event) -> Option<(i32, i32)> {
	let mouse = ev.unchecked_ref::<MouseEvent>();
	Some((mouse.client_x(), mouse.client_y()))
}

fn touch_client(ev: &Event) -> Option<(i32, i32)> {
	let touch = ev.unchecked_ref::<TouchEvent>().touches().get(0)?;
	Some((touch.client_x(), touch.client_y()))
}

/// Mouse or touch movement, reported in canvas coordinates.
fn move_listener(
	context: &SharedContext,
	canvas: &HtmlCanvasElement,
	client: fn(&Event) -> Option<(i32, i32)>,
) -> Listener {
	let (context, canvas) = (context.clone(), canvas.clone());
	Closure::new(move |ev: Event| {
		let Some((client_x, client_y)) = client(&ev) else {
			return;
		};
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = client_to_canvas(client_x, client_y, rect.left(), rect.top());
		if let Some(ref mut c) = *context.borrow_mut() {
			c.pointer.on_move(x, y, js_sys::Date::now());
		}
	})
}

/// Touch end, touch cancel and click all schedule the short idle timeout.
fn release_listener(context: &SharedContext) -> Listener {
	let context = context.clone();
	Closure::new(move |_: Event| {
		if let Some(ref mut c) = *context.borrow_mut() {
			c.pointer.on_release(js_sys::Date::now());
		}
	})
}

/// Converts client coordinates to coordinates relative to a canvas whose
/// bounding rect starts at `(left, top)`.
fn client_to_canvas(client_x: i32, client_y: i32, left: f64, top: f64) -> (f64, f64) {
	(client_x as f64 - left, client_y as f64 - top)
}

fn window_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(
		dim(window.inner_width(), 800.0),
		dim(window.inner_height(), 600.0),
	)
}

fn canvas_size(
	window: &Window,
	canvas: &HtmlCanvasElement,
	config: &TextConfig,
	fullscreen: bool,
) -> (f64, f64) {
	let (auto_w, auto_h) = if fullscreen {
		window_size(window)
	} else {
		canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or((800.0, 600.0))
	};
	(config.width.unwrap_or(auto_w), config.height.unwrap_or(auto_h))
}

/// A `2d` context tuned for frequent pixel read-back.
fn acquire_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FieldError> {
	let options = js_sys::Object::new();
	js_sys::Reflect::set(
		&options,
		&JsValue::from_str("willReadFrequently"),
		&JsValue::TRUE,
	)
	.map_err(|e| FieldError::Surface(format!("context options: {e:?}")))?;

	canvas
		.get_context_with_context_options("2d", &options)
		.map_err(|e| FieldError::Surface(format!("getContext failed: {e:?}")))?
		.ok_or_else(|| FieldError::Surface("2d context not supported".to_string()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| FieldError::Surface("context is not a CanvasRenderingContext2d".to_string()))
}

fn seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
	use super::*;

	fn setup() -> (TextConfig, ParticleField<SmallRng>) {
		let config = TextConfig::default();
		let field = ParticleField::new(config.field_config(), SmallRng::seed_from_u64(3)).unwrap();
		(config, field)
	}

	#[test]
	fn unchanged_settings_do_not_resample() {
		let (mut config, mut field) = setup();
		let (text, gap, shape) = (config.text.clone(), config.gap, config.shape);
		assert!(!apply_settings(&mut config, &mut field, text, gap, shape));
	}

	#[test]
	fn blank_text_is_ignored() {
		let (mut config, mut field) = setup();
		let (gap, shape) = (config.gap, config.shape);
		assert!(!apply_settings(&mut config, &mut field, "   ".into(), gap, shape));
		assert!(!apply_settings(&mut config, &mut field, String::new(), gap, shape));
		assert_eq!(config.text, "Hello World!");
	}

	#[test]
	fn each_real_change_is_applied() {
		let (mut config, mut field) = setup();
		let shape = config.shape;

		assert!(apply_settings(&mut config, &mut field, "Rust".into(), 4, shape));
		assert_eq!(config.text, "Rust");

		assert!(apply_settings(&mut config, &mut field, "Rust".into(), 6, shape));
		assert_eq!((config.gap, field.config().gap), (6, 6));

		assert!(apply_settings(&mut config, &mut field, "Rust".into(), 6, ParticleShape::Star));
		assert_eq!(field.config().shape, ParticleShape::Star);
	}

	#[test]
	fn zero_spacing_is_not_a_change() {
		let (mut config, mut field) = setup();
		let (text, shape) = (config.text.clone(), config.shape);
		assert!(!apply_settings(&mut config, &mut field, text, 0, shape));
		assert_eq!(field.config().gap, 4);
	}

	#[test]
	fn client_coordinates_are_offset_by_the_canvas_rect() {
		assert_eq!(client_to_canvas(150, 90, 50.0, 40.0), (100.0, 50.0));
		assert_eq!(client_to_canvas(10, 10, 20.0, 0.0), (-10.0, 10.0));
	}
}
