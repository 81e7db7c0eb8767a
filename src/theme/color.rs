//! Color values and theme-conditional style tokens.
//!
//! The site's visual language is neon-on-dark: every accent color doubles as
//! a glow source in dark mode and falls back to a flat tint in light mode.
//! Helpers here map a [`Color`] plus the current theme flag to inline CSS
//! fragments so pages never branch on the flag themselves.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Build from CSS-style HSL components: hue in degrees, saturation and
	/// lightness in percent. The site's accents are all defined in HSL.
	pub fn hsl(h: f64, s: f64, l: f64) -> Self {
		let s = (s / 100.0).clamp(0.0, 1.0);
		let l = (l / 100.0).clamp(0.0, 1.0);
		let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let hp = h.rem_euclid(360.0) / 60.0;
		let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
		let (r1, g1, b1) = match hp {
			hp if hp < 1.0 => (c, x, 0.0),
			hp if hp < 2.0 => (x, c, 0.0),
			hp if hp < 3.0 => (0.0, c, x),
			hp if hp < 4.0 => (0.0, x, c),
			hp if hp < 5.0 => (x, 0.0, c),
			_ => (c, 0.0, x),
		};
		let m = l - c / 2.0;
		Self {
			r: ((r1 + m) * 255.0).round() as u8,
			g: ((g1 + m) * 255.0).round() as u8,
			b: ((b1 + m) * 255.0).round() as u8,
			a: 1.0,
		}
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Accent-colored text: glowing in dark mode, a deep flat tone in light mode.
pub fn accent_text(accent: Color, dark: bool) -> String {
	if dark {
		format!(
			"color: {}; text-shadow: 0 0 10px {};",
			accent.with_alpha(1.0).to_css(),
			accent.with_alpha(0.6).to_css()
		)
	} else {
		"color: hsl(220, 70%, 25%);".to_string()
	}
}

/// Bordered badge/pill styling around an accent color.
pub fn accent_badge(accent: Color, dark: bool) -> String {
	let glow = if dark {
		format!("box-shadow: 0 0 12px {};", accent.with_alpha(0.4).to_css())
	} else {
		String::new()
	};
	format!(
		"border-color: {}; color: {}; {}",
		accent.to_css(),
		if dark {
			accent.to_css()
		} else {
			"hsl(220, 60%, 15%)".to_string()
		},
		glow
	)
}

/// Gradient-filled headline text for dark mode; solid ink for light mode.
pub fn heading_style(stops: &[Color], dark: bool) -> String {
	if dark && !stops.is_empty() {
		let stops = stops
			.iter()
			.map(|c| c.to_css())
			.collect::<Vec<_>>()
			.join(", ");
		format!(
			"background: linear-gradient(135deg, {stops}); \
			 -webkit-background-clip: text; background-clip: text; \
			 -webkit-text-fill-color: transparent; color: transparent;"
		)
	} else {
		"color: hsl(220, 80%, 15%);".to_string()
	}
}

/// Translucent panel background used by cards and the nav/footer chrome.
pub fn panel_background(dark: bool) -> &'static str {
	if dark {
		"background: hsl(220 25% 7% / 0.85);"
	} else {
		"background: hsl(0 0% 100% / 0.85);"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hsl_primaries_round_trip() {
		assert_eq!(Color::hsl(0.0, 100.0, 50.0), Color::rgb(255, 0, 0));
		assert_eq!(Color::hsl(120.0, 100.0, 50.0), Color::rgb(0, 255, 0));
		assert_eq!(Color::hsl(240.0, 100.0, 50.0), Color::rgb(0, 0, 255));
		assert_eq!(Color::hsl(0.0, 0.0, 100.0), Color::rgb(255, 255, 255));
	}

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(Color::rgb(255, 0, 128).to_css(), "#ff0080");
		assert_eq!(
			Color::rgb(255, 0, 128).with_alpha(0.4).to_css(),
			"rgba(255, 0, 128, 0.4)"
		);
	}

	#[test]
	fn accent_text_only_glows_in_dark_mode() {
		let accent = Color::hsl(197.0, 100.0, 70.0);
		assert!(accent_text(accent, true).contains("text-shadow"));
		assert!(!accent_text(accent, false).contains("text-shadow"));
	}
}
