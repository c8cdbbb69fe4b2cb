//! Pointer position tracking with idle deactivation.
//!
//! Touch devices have no persistent hover position, so the pointer is retired
//! to a sentinel far outside the canvas shortly after input stops. Time is
//! supplied by the caller in milliseconds, which keeps the timer logic free of
//! any browser clock and lets tests drive it directly.

/// Coordinate used for an inactive pointer. No particle is ever in range of it.
pub const INACTIVE_POSITION: f64 = -1000.0;

/// Default influence radius.
///
/// This is compared against a *squared* distance, so the effective reach is
/// about `sqrt(20000) ≈ 141` pixels.
pub const DEFAULT_INFLUENCE_RADIUS: f64 = 20_000.0;

/// Idle time after a move before the pointer is retired.
pub const MOVE_IDLE_MS: f64 = 500.0;

/// Idle time after a touch end, touch cancel or click.
pub const RELEASE_IDLE_MS: f64 = 300.0;

/// Read-only pointer state handed to every particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSnapshot {
	/// Canvas-relative x.
	pub x: f64,
	/// Canvas-relative y.
	pub y: f64,
	/// Squared-distance threshold for repulsion.
	pub radius: f64,
}

impl PointerSnapshot {
	/// A pointer parked at the sentinel position.
	pub fn inactive(radius: f64) -> Self {
		Self {
			x: INACTIVE_POSITION,
			y: INACTIVE_POSITION,
			radius,
		}
	}
}

/// A single cancelable delayed task on a caller-driven clock.
///
/// At most one deadline is pending. Scheduling replaces it, and cancelling
/// a task that already fired or was already cancelled does nothing.
#[derive(Clone, Debug, Default)]
pub struct DelayedTask {
	deadline: Option<f64>,
}

impl DelayedTask {
	/// Arms the task to fire `delay` ms after `now`, dropping any earlier deadline.
	pub fn schedule(&mut self, now: f64, delay: f64) {
		self.deadline = Some(now + delay);
	}

	/// Drops the pending deadline, if any.
	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	/// `true` while a deadline is armed.
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Returns `true` exactly once when the deadline has passed.
	pub fn take_due(&mut self, now: f64) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

/// Owns the pointer position and its idle-deactivation policy.
#[derive(Clone, Debug)]
pub struct PointerTracker {
	x: f64,
	y: f64,
	radius: f64,
	idle: DelayedTask,
}

impl Default for PointerTracker {
	fn default() -> Self {
		Self::new(DEFAULT_INFLUENCE_RADIUS)
	}
}

impl PointerTracker {
	/// An inactive tracker with the given squared-distance `radius`.
	pub fn new(radius: f64) -> Self {
		Self {
			x: INACTIVE_POSITION,
			y: INACTIVE_POSITION,
			radius,
			idle: DelayedTask::default(),
		}
	}

	/// Mouse or touch movement to `(x, y)`.
	pub fn on_move(&mut self, x: f64, y: f64, now: f64) {
		self.idle.cancel();
		self.x = x;
		self.y = y;
		self.idle.schedule(now, MOVE_IDLE_MS);
	}

	/// Touch end, touch cancel or click. The position is left alone.
	pub fn on_release(&mut self, now: f64) {
		self.idle.schedule(now, RELEASE_IDLE_MS);
	}

	/// Fires a due deactivation. Call once per frame before taking a snapshot.
	pub fn poll(&mut self, now: f64) {
		if self.idle.take_due(now) {
			self.deactivate();
		}
	}

	/// Parks the pointer at the sentinel position.
	pub fn deactivate(&mut self) {
		self.x = INACTIVE_POSITION;
		self.y = INACTIVE_POSITION;
	}

	/// Cancels a pending deactivation without moving the pointer.
	pub fn cancel_idle(&mut self) {
		self.idle.cancel();
	}

	/// Changes the influence radius carried by later snapshots.
	pub fn set_radius(&mut self, radius: f64) {
		self.radius = radius;
	}

	/// `false` while parked at the sentinel position.
	pub fn is_active(&self) -> bool {
		self.x != INACTIVE_POSITION || self.y != INACTIVE_POSITION
	}

	/// `true` while a deactivation is scheduled.
	pub fn is_idle_pending(&self) -> bool {
		self.idle.is_pending()
	}

	/// Current state, read once per frame.
	pub fn snapshot(&self) -> PointerSnapshot {
		PointerSnapshot {
			x: self.x,
			y: self.y,
			radius: self.radius,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_inactive() {
		let tracker = PointerTracker::default();
		assert!(!tracker.is_active());
		assert_eq!(
			tracker.snapshot(),
			PointerSnapshot::inactive(DEFAULT_INFLUENCE_RADIUS)
		);
	}

	#[test]
	fn move_retires_after_idle_timeout() {
		let mut tracker = PointerTracker::default();
		tracker.on_move(120.0, 80.0, 1_000.0);

		tracker.poll(1_499.0);
		assert_eq!((tracker.snapshot().x, tracker.snapshot().y), (120.0, 80.0));

		tracker.poll(1_500.0);
		assert!(!tracker.is_active());
		assert!(!tracker.is_idle_pending());
	}

	#[test]
	fn new_move_cancels_pending_deactivation() {
		let mut tracker = PointerTracker::default();
		tracker.on_move(10.0, 10.0, 0.0);
		tracker.on_move(20.0, 30.0, 400.0);

		tracker.poll(600.0);
		assert!(tracker.is_active());
		assert_eq!(tracker.snapshot().x, 20.0);

		tracker.poll(900.0);
		assert!(!tracker.is_active());
	}

	#[test]
	fn release_uses_shorter_timeout_and_keeps_position() {
		let mut tracker = PointerTracker::default();
		tracker.on_move(50.0, 60.0, 0.0);
		tracker.on_release(100.0);
		assert_eq!(tracker.snapshot().y, 60.0);

		tracker.poll(399.0);
		assert!(tracker.is_active());
		tracker.poll(400.0);
		assert!(!tracker.is_active());
	}

	#[test]
	fn deactivation_is_idempotent() {
		let mut tracker = PointerTracker::default();
		tracker.on_move(5.0, 5.0, 0.0);
		tracker.poll(500.0);
		let after_first = tracker.snapshot();

		tracker.poll(10_000.0);
		tracker.deactivate();
		assert_eq!(tracker.snapshot(), after_first);
	}

	#[test]
	fn radius_changes_apply_to_later_snapshots() {
		let mut tracker = PointerTracker::new(1.0);
		let before = tracker.snapshot();
		tracker.set_radius(400.0);
		assert_eq!(before.radius, 1.0);
		assert_eq!(tracker.snapshot().radius, 400.0);
	}

	#[test]
	fn cancel_is_a_no_op_when_nothing_is_pending() {
		let mut task = DelayedTask::default();
		task.cancel();
		task.schedule(0.0, 10.0);
		assert!(task.take_due(10.0));
		task.cancel();
		task.cancel();
		assert!(!task.take_due(20.0));
	}
}
