//! Per-page theme state and the global presentation flag.
//!
//! Each page owns one [`ThemeController`]: a two-state machine (dark/light)
//! seeded at mount and flipped by the nav toggle. The only process-wide
//! mutable state is the "dark" flag on the document root, modeled as an
//! injected [`ThemeSink`] so the controller itself never touches the DOM.
//! Pages intentionally seed differently: the landing page defaults to dark,
//! the secondary pages mirror whatever flag is already set.

pub mod color;
mod dom;

pub use color::Color;
pub use dom::DomThemeSink;

/// External side effect that mirrors the theme flag to the rendering layer.
///
/// Implementations must be idempotent: applying a value that is already in
/// effect is a no-op with no observable difference.
pub trait ThemeSink {
	/// Set or clear the global dark presentation flag.
	fn apply(&self, dark: bool);

	/// Whether the global flag is currently set. Returns `false` when the
	/// flag cannot be inspected (e.g. no document is available).
	fn is_applied(&self) -> bool;
}

/// How a page chooses its initial theme flag at mount.
#[derive(Clone, Copy, Debug)]
pub enum ThemeSeed {
	/// Always start from this value, regardless of global state.
	Fixed(bool),
	/// Mirror the global presentation flag; `false` when it is absent.
	MirrorGlobal,
}

/// Dark/light mode state for one mounted page.
///
/// Total state machine: two states, one bidirectional transition. The sink
/// is re-applied on every change (including the seed at mount) so the global
/// flag always matches [`ThemeController::is_dark`].
#[derive(Debug)]
pub struct ThemeController<S: ThemeSink> {
	dark: bool,
	sink: S,
}

impl<S: ThemeSink> ThemeController<S> {
	/// Create the controller for a freshly mounted page and push the seed
	/// value out through the sink.
	pub fn mount(seed: ThemeSeed, sink: S) -> Self {
		let dark = match seed {
			ThemeSeed::Fixed(value) => value,
			ThemeSeed::MirrorGlobal => sink.is_applied(),
		};
		sink.apply(dark);
		Self { dark, sink }
	}

	/// Current theme flag.
	pub fn is_dark(&self) -> bool {
		self.dark
	}

	/// Flip dark/light and mirror the new value to the sink.
	pub fn toggle(&mut self) {
		self.dark = !self.dark;
		self.sink.apply(self.dark);
	}

	/// Access the injected sink (used by tests to observe the global flag).
	pub fn sink(&self) -> &S {
		&self.sink
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	/// Sink that records the last applied value in place of the DOM flag.
	#[derive(Debug, Default)]
	struct RecordingSink {
		dark: Cell<bool>,
		applies: Cell<usize>,
	}

	impl ThemeSink for RecordingSink {
		fn apply(&self, dark: bool) {
			self.dark.set(dark);
			self.applies.set(self.applies.get() + 1);
		}

		fn is_applied(&self) -> bool {
			self.dark.get()
		}
	}

	#[test]
	fn toggle_pair_is_identity() {
		for seed in [false, true] {
			let mut theme =
				ThemeController::mount(ThemeSeed::Fixed(seed), RecordingSink::default());
			theme.toggle();
			theme.toggle();
			assert_eq!(theme.is_dark(), seed);
		}
	}

	#[test]
	fn sink_mirrors_state_after_any_toggle_sequence() {
		let mut theme =
			ThemeController::mount(ThemeSeed::Fixed(true), RecordingSink::default());
		for _ in 0..7 {
			theme.toggle();
			assert_eq!(theme.sink().is_applied(), theme.is_dark());
		}
	}

	#[test]
	fn mirror_seed_defaults_to_light_when_flag_absent() {
		let theme =
			ThemeController::mount(ThemeSeed::MirrorGlobal, RecordingSink::default());
		assert!(!theme.is_dark());
		assert!(!theme.sink().is_applied());
	}

	#[test]
	fn mirror_seed_adopts_existing_global_flag() {
		let sink = RecordingSink::default();
		sink.apply(true);
		let theme = ThemeController::mount(ThemeSeed::MirrorGlobal, sink);
		assert!(theme.is_dark());
		assert!(theme.sink().is_applied());
	}

	#[test]
	fn fixed_dark_seed_sets_flag_at_mount() {
		let theme =
			ThemeController::mount(ThemeSeed::Fixed(true), RecordingSink::default());
		assert!(theme.sink().is_applied());
		// Exactly one apply happens at mount.
		assert_eq!(theme.sink().applies.get(), 1);
	}

	#[test]
	fn odd_number_of_flips_from_light_lands_on_dark() {
		let mut theme =
			ThemeController::mount(ThemeSeed::Fixed(false), RecordingSink::default());
		theme.toggle();
		theme.toggle();
		theme.toggle();
		assert!(theme.is_dark());
	}
}
