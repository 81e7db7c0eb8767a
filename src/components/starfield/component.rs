//! Leptos components for the animated page background.
//!
//! `Starfield` generates its particle batch once, inside a `StoredValue`
//! keyed to the mounted instance, so theme toggles re-run only the style
//! closures and never the generation. `NeonOrbs` renders the fixed blurred
//! gradient blobs behind the content.

use leptos::prelude::*;

use super::particles::ParticleField;
use super::style::{star_inline, NeonPalette, Orb};

/// Randomized twinkling particle field covering the page background.
#[component]
pub fn Starfield(
	/// Live theme flag; restyles the stored batch, never regenerates it.
	#[prop(into)]
	dark: Signal<bool>,
	/// Batch size; the shared default fits every current page.
	#[prop(default = ParticleField::STAR_COUNT)]
	count: usize,
) -> impl IntoView {
	// Generated exactly once per mount; lives in the reactive arena keyed
	// by this component instance.
	let field = StoredValue::new(ParticleField::generate(count, &NeonPalette::neon().colors));

	view! {
		<div class="starfield">
			{field.with_value(|field| {
				field
					.particles()
					.iter()
					.cloned()
					.map(|p| {
						view! {
							<div class="star" style=move || star_inline(&p, dark.get()) />
						}
					})
					.collect_view()
			})}
		</div>
	}
}

/// Fixed set of blurred radial-gradient orbs behind the page content.
#[component]
pub fn NeonOrbs(
	/// Live theme flag; selects the gradient alpha per orb.
	#[prop(into)]
	dark: Signal<bool>,
	/// Page-specific orb geometry, see [`Orb::home_set`] and friends.
	orbs: Vec<Orb>,
) -> impl IntoView {
	view! {
		<div class="orb-layer">
			{orbs
				.into_iter()
				.map(|orb| {
					view! {
						<div class="orb" style=move || orb.style(dark.get()) />
					}
				})
				.collect_view()}
		</div>
	}
}
