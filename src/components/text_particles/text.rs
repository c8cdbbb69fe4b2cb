//! Rasterizes the configured text onto the canvas so it can be sampled.

use web_sys::CanvasRenderingContext2d;

use super::config::TextConfig;
use super::error::FieldError;

/// Greedy whitespace wrapping.
///
/// Words are appended to the current line until `measure` reports it wider
/// than `max_width`. A single word wider than the limit gets a line of its own.
pub fn wrap_lines(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();

	for word in text.split_whitespace() {
		if current.is_empty() {
			current.push_str(word);
			continue;
		}
		let candidate = format!("{current} {word}");
		if measure(&candidate) > max_width {
			lines.push(std::mem::replace(&mut current, word.to_string()));
		} else {
			current = candidate;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}

/// Vertical center of each line, for lines stacked `line_height` apart and
/// centered as a block on `height`.
pub fn line_positions(count: usize, line_height: f64, height: f64) -> Vec<f64> {
	let offset = height / 2.0 - (count as f64 * line_height) / 2.0;
	(0..count).map(|i| offset + line_height * i as f64).collect()
}

/// Clears the canvas and draws `config.text` centered on it.
pub fn draw_text(
	ctx: &CanvasRenderingContext2d,
	config: &TextConfig,
	width: f64,
	height: f64,
) -> Result<(), FieldError> {
	ctx.clear_rect(0.0, 0.0, width, height);
	ctx.set_font(&config.font());
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	if config.gradients.is_empty() {
		ctx.set_fill_style_str("white");
	} else {
		let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
		for stop in &config.gradients {
			gradient
				.add_color_stop(stop.stop as f32, &stop.color)
				.map_err(|e| FieldError::Surface(format!("bad gradient stop {stop:?}: {e:?}")))?;
		}
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	}

	let measure = |line: &str| ctx.measure_text(line).map(|m| m.width()).unwrap_or(0.0);
	let lines = wrap_lines(&config.text, width * config.max_width_ratio, measure);
	let positions = line_positions(lines.len(), config.font_size, height);

	for (line, y) in lines.iter().zip(positions) {
		ctx.fill_text(line, width / 2.0, y)
			.map_err(|e| FieldError::Surface(format!("fillText failed: {e:?}")))?;
	}
	Ok(())
}
