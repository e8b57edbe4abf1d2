use std::time::{Duration, Instant};

/// Delay between losing focus and closing the dropdown.
///
/// Long enough for a click on an option to land before the list disappears.
pub const BLUR_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Pending close scheduled by a focus loss.
///
/// There is no timer thread: the rendering layer reports the current time
/// through [`BlurClose::fire_if_due`]. A newer interaction cancels the
/// pending close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurClose {
	delay: Duration,
	deadline: Option<Instant>,
}

impl BlurClose {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			deadline: None,
		}
	}

	/// Schedule a close `delay` after `now`, replacing any earlier one.
	pub fn schedule(&mut self, now: Instant) {
		self.deadline = Some(now + self.delay);
	}

	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Consume the pending close if its deadline has passed.
	pub fn fire_if_due(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

impl Default for BlurClose {
	fn default() -> Self {
		Self::new(BLUR_CLOSE_DELAY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_once_after_the_delay() {
		let start = Instant::now();
		let mut blur = BlurClose::default();
		blur.schedule(start);

		assert!(!blur.fire_if_due(start + Duration::from_millis(199)));
		assert!(blur.fire_if_due(start + BLUR_CLOSE_DELAY));
		assert!(!blur.fire_if_due(start + Duration::from_secs(1)));
	}

	#[test]
	fn cancel_drops_the_pending_close() {
		let start = Instant::now();
		let mut blur = BlurClose::new(Duration::from_millis(50));
		blur.schedule(start);
		assert!(blur.is_pending());

		blur.cancel();
		assert!(!blur.fire_if_due(start + Duration::from_secs(1)));
	}

	#[test]
	fn rescheduling_pushes_the_deadline_back() {
		let start = Instant::now();
		let mut blur = BlurClose::default();
		blur.schedule(start);
		blur.schedule(start + Duration::from_millis(150));

		assert!(!blur.fire_if_due(start + Duration::from_millis(250)));
		assert!(blur.fire_if_due(start + Duration::from_millis(350)));
	}
}
