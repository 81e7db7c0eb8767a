//! DOM-backed theme sink.
//!
//! Mirrors the theme flag to a `dark` class on `<html>`, which the global
//! stylesheet reads to switch its base CSS variables. Both operations are
//! total: a missing window/document reads as "flag not set" and applies
//! nothing.

use web_sys::Element;

use super::ThemeSink;

/// Class name the stylesheet keys its dark-mode variables on.
const DARK_CLASS: &str = "dark";

/// [`ThemeSink`] over `document.documentElement.classList`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomThemeSink;

fn document_root() -> Option<Element> {
	web_sys::window()?.document()?.document_element()
}

impl ThemeSink for DomThemeSink {
	fn apply(&self, dark: bool) {
		let Some(root) = document_root() else {
			return;
		};
		let classes = root.class_list();
		// add/remove are idempotent on DomTokenList.
		let _ = if dark {
			classes.add_1(DARK_CLASS)
		} else {
			classes.remove_1(DARK_CLASS)
		};
	}

	fn is_applied(&self) -> bool {
		document_root()
			.map(|root| root.class_list().contains(DARK_CLASS))
			.unwrap_or(false)
	}
}
