//! Shared layout for the legal pages (privacy policy, terms of use).

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::shell::{NavBar, SiteFooter};
use crate::components::starfield::{NeonOrbs, Orb, Starfield};
use crate::theme::{color, Color, DomThemeSink, ThemeController, ThemeSeed};

/// One titled copy block with its accent color.
pub struct LegalSection {
	pub title: &'static str,
	pub accent: Color,
	pub body: &'static str,
}

/// Renders a legal page: badge, headline, section cards, shared shell.
/// Legal pages mirror the global theme flag rather than forcing a default.
#[component]
pub fn LegalLayout(
	/// Document title.
	title: &'static str,
	/// Small badge label above the headline.
	badge: &'static str,
	/// Headline text.
	heading: &'static str,
	/// Ordered copy blocks.
	sections: Vec<LegalSection>,
) -> impl IntoView {
	let theme =
		RwSignal::new(ThemeController::mount(ThemeSeed::MirrorGlobal, DomThemeSink));
	let dark = Signal::derive(move || theme.with(|t| t.is_dark()));
	let on_toggle = Callback::new(move |_: ()| theme.update(|t| t.toggle()));

	view! {
		<Title text=title />
		<div class="page">
			<div class="background">
				<NeonOrbs dark=dark orbs=Orb::legal_set() />
				<Starfield dark=dark />
			</div>

			<NavBar dark=dark on_toggle=on_toggle />

			<main class="content narrow">
				<div class="section-head">
					<div
						class="badge-pill"
						style=move || color::accent_badge(Color::hsl(197.0, 100.0, 60.0), dark.get())
					>
						{badge}
					</div>
					<h1
						class="section-title"
						style=move || {
							color::heading_style(
								&[Color::hsl(197.0, 100.0, 70.0), Color::hsl(320.0, 100.0, 65.0)],
								dark.get(),
							)
						}
					>
						{heading}
					</h1>
				</div>

				<div class="stack">
					{sections
						.into_iter()
						.map(|section| {
							let accent = section.accent;
							view! {
								<div
									class="card"
									style=move || {
										format!(
											"border-color: {}; {}",
											accent.with_alpha(0.25).to_css(),
											color::panel_background(dark.get()),
										)
									}
								>
									<h2
										class="card-title"
										style=move || color::accent_text(accent, dark.get())
									>
										{section.title}
									</h2>
									<p class="muted">{section.body}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</main>

			<SiteFooter dark=dark />
		</div>
	}
}
