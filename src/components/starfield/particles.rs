//! Decorative particle batch for the animated background.
//!
//! A batch is generated once when the page mounts and never regenerated:
//! theme toggles only re-style the stored particles. Positions are
//! intentionally non-deterministic; the randomness source is injected so
//! tests can drive generation with a seeded closure.

use log::warn;

use crate::theme::Color;

/// One decorative dot with fixed generation-time attributes.
///
/// Only the rendered intensity of a particle depends on the live theme flag;
/// the stored fields never change after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Sequential identity within one batch.
	pub id: usize,
	/// Horizontal position, percent of container [0, 100].
	pub x: f64,
	/// Vertical position, percent of container [0, 100].
	pub y: f64,
	/// Visual diameter in px [1, 4].
	pub size: f64,
	/// Animation delay in seconds [0, 5].
	pub delay: f64,
	/// Animation duration in seconds [2, 5].
	pub duration: f64,
	/// Palette color drawn uniformly at generation time.
	pub color: Color,
}

/// An immutable batch of background particles.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Batch size used by every page that shows the background.
	pub const STAR_COUNT: usize = 120;

	/// Generate a batch using the browser's RNG. Browser-only; tests use
	/// [`ParticleField::generate_with`].
	pub fn generate(count: usize, palette: &[Color]) -> Self {
		Self::generate_with(count, palette, js_sys::Math::random)
	}

	/// Generate `count` particles, each field drawn independently and
	/// uniformly from `rng` (which must yield values in `[0, 1)`).
	///
	/// An empty palette yields an empty batch rather than failing the render.
	pub fn generate_with(
		count: usize,
		palette: &[Color],
		mut rng: impl FnMut() -> f64,
	) -> Self {
		if palette.is_empty() {
			warn!("starfield: empty palette, rendering no particles");
			return Self::default();
		}

		let particles = (0..count)
			.map(|id| {
				let pick = ((rng() * palette.len() as f64) as usize).min(palette.len() - 1);
				Particle {
					id,
					x: rng() * 100.0,
					y: rng() * 100.0,
					size: 1.0 + rng() * 3.0,
					delay: rng() * 5.0,
					duration: 2.0 + rng() * 3.0,
					color: palette[pick],
				}
			})
			.collect();

		Self { particles }
	}

	/// The stored batch, in generation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
pub(crate) fn test_rng(seed: u64) -> impl FnMut() -> f64 {
	let mut state = seed.max(1);
	move || {
		state = state
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		(state >> 11) as f64 / (1u64 << 53) as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::style::NeonPalette;

	#[test]
	fn batch_has_exact_count_and_fields_in_range() {
		let palette = NeonPalette::neon().colors;
		let field = ParticleField::generate_with(
			ParticleField::STAR_COUNT,
			&palette,
			test_rng(42),
		);

		assert_eq!(field.len(), 120);
		for (i, p) in field.particles().iter().enumerate() {
			assert_eq!(p.id, i);
			assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
			assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
			assert!((1.0..=4.0).contains(&p.size), "size out of range: {}", p.size);
			assert!((0.0..=5.0).contains(&p.delay), "delay out of range: {}", p.delay);
			assert!(
				(2.0..=5.0).contains(&p.duration),
				"duration out of range: {}",
				p.duration
			);
			assert!(palette.contains(&p.color));
		}
	}

	#[test]
	fn empty_palette_yields_empty_batch() {
		let field = ParticleField::generate_with(ParticleField::STAR_COUNT, &[], test_rng(42));
		assert!(field.is_empty());
	}

	#[test]
	fn zero_count_yields_empty_batch() {
		let palette = NeonPalette::neon().colors;
		let field = ParticleField::generate_with(0, &palette, test_rng(42));
		assert!(field.is_empty());
	}

	#[test]
	fn fresh_batches_differ() {
		let palette = NeonPalette::neon().colors;
		let a = ParticleField::generate_with(ParticleField::STAR_COUNT, &palette, test_rng(1));
		let b = ParticleField::generate_with(ParticleField::STAR_COUNT, &palette, test_rng(2));

		let positions = |f: &ParticleField| {
			f.particles().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>()
		};
		assert_ne!(positions(&a), positions(&b));
	}
}
