//! Theme-dependent styling for the background layers.
//!
//! Pure mapping from stored particles (and orb configs) plus the live theme
//! flag to inline CSS. Dark mode renders the full neon treatment with layered
//! glows; light mode drops to a soft tint so the field reads as texture, not
//! noise.

use crate::theme::Color;

use super::particles::Particle;

/// The fixed candidate colors particles are drawn from.
#[derive(Clone, Debug)]
pub struct NeonPalette {
	pub colors: Vec<Color>,
}

impl NeonPalette {
	/// Six-entry neon palette shared by every page background.
	pub fn neon() -> Self {
		Self {
			colors: vec![
				Color::hsl(197.0, 100.0, 70.0), // Electric blue
				Color::hsl(145.0, 100.0, 65.0), // Neon green
				Color::hsl(0.0, 100.0, 65.0),   // Signal red
				Color::hsl(320.0, 100.0, 65.0), // Magenta
				Color::hsl(55.0, 100.0, 65.0),  // Acid yellow
				Color::hsl(180.0, 100.0, 65.0), // Cyan
			],
		}
	}
}

/// Render-time style for one particle under the current theme flag.
#[derive(Clone, Debug, PartialEq)]
pub struct StarStyle {
	/// Fill color, alpha-reduced in light mode.
	pub fill: Color,
	/// Layered `box-shadow` glow, radii proportional to particle size.
	pub glow: String,
}

/// Derive the render-time style for a particle. Never mutates the particle.
pub fn star_style(p: &Particle, dark: bool) -> StarStyle {
	if dark {
		StarStyle {
			fill: p.color,
			glow: format!(
				"0 0 {}px {}, 0 0 {}px {}",
				p.size * 4.0,
				p.color.to_css(),
				p.size * 8.0,
				p.color.to_css()
			),
		}
	} else {
		StarStyle {
			fill: p.color.with_alpha(0.4),
			glow: format!("0 0 {}px {}", p.size * 2.0, p.color.to_css()),
		}
	}
}

/// Full inline style for a particle `<div>`: fixed geometry and animation
/// timing from the particle, fill and glow from the current theme flag.
pub fn star_inline(p: &Particle, dark: bool) -> String {
	let style = star_style(p, dark);
	format!(
		"left: {}%; top: {}%; width: {}px; height: {}px; \
		 animation-delay: {}s; animation-duration: {}s; \
		 background-color: {}; box-shadow: {};",
		p.x,
		p.y,
		p.size,
		p.size,
		p.delay,
		p.duration,
		style.fill.to_css(),
		style.glow
	)
}

/// One blurred radial-gradient blob behind the page content.
///
/// Geometry is fixed per page; only the gradient alpha follows the theme
/// flag (strong in dark mode, faint in light mode).
#[derive(Clone, Debug)]
pub struct Orb {
	/// Diameter in px.
	pub size: f64,
	/// CSS anchor fragment, e.g. `"left: -10%; top: -10%;"`.
	pub anchor: &'static str,
	/// Gradient hue.
	pub color: Color,
	/// Gradient center alpha in dark mode.
	pub dark_alpha: f64,
	/// Gradient center alpha in light mode.
	pub light_alpha: f64,
}

impl Orb {
	pub fn new(
		size: f64,
		anchor: &'static str,
		color: Color,
		dark_alpha: f64,
		light_alpha: f64,
	) -> Self {
		Self {
			size,
			anchor,
			color,
			dark_alpha,
			light_alpha,
		}
	}

	/// Inline style under the current theme flag.
	pub fn style(&self, dark: bool) -> String {
		let alpha = if dark { self.dark_alpha } else { self.light_alpha };
		format!(
			"width: {}px; height: {}px; {} background: radial-gradient(circle, {}, transparent 70%);",
			self.size,
			self.size,
			self.anchor,
			self.color.with_alpha(alpha).to_css()
		)
	}

	/// Orb set behind the landing page.
	pub fn home_set() -> Vec<Orb> {
		vec![
			Orb::new(600.0, "left: -10%; top: -10%;", Color::hsl(197.0, 100.0, 50.0), 0.15, 0.06),
			Orb::new(500.0, "right: -5%; top: 20%;", Color::hsl(320.0, 100.0, 55.0), 0.15, 0.06),
			Orb::new(400.0, "left: 30%; bottom: 0%;", Color::hsl(145.0, 100.0, 50.0), 0.12, 0.05),
			Orb::new(350.0, "right: 20%; bottom: 10%;", Color::hsl(55.0, 100.0, 55.0), 0.10, 0.04),
		]
	}

	/// Orb set behind the contact page.
	pub fn contact_set() -> Vec<Orb> {
		vec![
			Orb::new(500.0, "left: 20%; top: -10%;", Color::hsl(320.0, 100.0, 55.0), 0.12, 0.05),
			Orb::new(400.0, "right: 10%; bottom: 15%;", Color::hsl(197.0, 100.0, 50.0), 0.10, 0.04),
		]
	}

	/// Orb set behind the legal pages.
	pub fn legal_set() -> Vec<Orb> {
		vec![
			Orb::new(500.0, "left: -10%; top: -5%;", Color::hsl(197.0, 100.0, 50.0), 0.12, 0.05),
			Orb::new(400.0, "right: -5%; bottom: 20%;", Color::hsl(320.0, 100.0, 55.0), 0.10, 0.04),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::particles::{test_rng, ParticleField};

	#[test]
	fn restyling_never_mutates_the_batch() {
		let palette = NeonPalette::neon().colors;
		let field = ParticleField::generate_with(
			ParticleField::STAR_COUNT,
			&palette,
			test_rng(7),
		);
		let before = field.particles().to_vec();

		for p in field.particles() {
			let _ = star_style(p, true);
			let _ = star_style(p, false);
			let _ = star_inline(p, true);
			let _ = star_inline(p, false);
		}

		assert_eq!(field.particles(), &before[..]);
	}

	#[test]
	fn dark_and_light_styles_differ_only_in_intensity() {
		let palette = NeonPalette::neon().colors;
		let field = ParticleField::generate_with(1, &palette, test_rng(3));
		let p = &field.particles()[0];

		let dark = star_style(p, true);
		let light = star_style(p, false);

		// Same hue either way; light mode drops alpha and halves the glow.
		assert_eq!(dark.fill.with_alpha(1.0), light.fill.with_alpha(1.0));
		assert_eq!(dark.fill.a, 1.0);
		assert_eq!(light.fill.a, 0.4);
		assert_ne!(dark.glow, light.glow);
	}

	#[test]
	fn dark_glow_layers_scale_with_size() {
		let p = Particle {
			id: 0,
			x: 50.0,
			y: 50.0,
			size: 2.0,
			delay: 0.0,
			duration: 3.0,
			color: Color::hsl(197.0, 100.0, 70.0),
		};
		let glow = star_style(&p, true).glow;
		assert!(glow.contains("0 0 8px"));
		assert!(glow.contains("0 0 16px"));
	}

	#[test]
	fn orb_alpha_follows_theme_flag() {
		let orb = &Orb::home_set()[0];
		assert!(orb.style(true).contains("0.15"));
		assert!(orb.style(false).contains("0.06"));
	}
}
