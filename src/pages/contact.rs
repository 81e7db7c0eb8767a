//! Contact page: intro card, contact detail cards, mailto CTA.
//!
//! Seeds its theme by mirroring the global flag, so arriving from the
//! landing page keeps whatever mode the visitor chose there.

use leptos::prelude::*;
use leptos_meta::Title;
use log::info;

use crate::components::shell::{NavBar, SiteFooter};
use crate::components::starfield::{NeonOrbs, Orb, Starfield};
use crate::theme::{color, Color, DomThemeSink, ThemeController, ThemeSeed};

struct ContactCard {
	label: &'static str,
	value: &'static str,
	href: Option<&'static str>,
	accent: Color,
}

fn cards() -> Vec<ContactCard> {
	vec![
		ContactCard {
			label: "Email",
			value: "aihealthcaresystem@gmail.com",
			href: Some("mailto:aihealthcaresystem@gmail.com"),
			accent: Color::hsl(197.0, 100.0, 60.0),
		},
		ContactCard {
			label: "Location",
			value: "India",
			href: None,
			accent: Color::hsl(145.0, 100.0, 55.0),
		},
		ContactCard {
			label: "Response Time",
			value: "Within 24\u{2013}48 hours",
			href: None,
			accent: Color::hsl(320.0, 100.0, 60.0),
		},
	]
}

/// Contact page component.
#[component]
pub fn ContactPage() -> impl IntoView {
	let theme =
		RwSignal::new(ThemeController::mount(ThemeSeed::MirrorGlobal, DomThemeSink));
	let dark = Signal::derive(move || theme.with(|t| t.is_dark()));
	let on_toggle = Callback::new(move |_: ()| theme.update(|t| t.toggle()));
	info!("contact: mounted (seed: mirror global)");

	view! {
		<Title text="Contact \u{00b7} AI Healthcare System" />
		<div class="page">
			<div class="background">
				<NeonOrbs dark=dark orbs=Orb::contact_set() />
				<Starfield dark=dark />
			</div>

			<NavBar dark=dark on_toggle=on_toggle />

			<main class="content narrow">
				<div class="section-head">
					<div
						class="badge-pill"
						style=move || color::accent_badge(Color::hsl(320.0, 100.0, 60.0), dark.get())
					>
						"Get In Touch"
					</div>
					<h1
						class="section-title"
						style=move || {
							color::heading_style(
								&[Color::hsl(320.0, 100.0, 65.0), Color::hsl(197.0, 100.0, 70.0)],
								dark.get(),
							)
						}
					>
						"Contact Us"
					</h1>
				</div>

				<div
					class="card intro-card"
					style=move || {
						format!(
							"border-color: {}; {}",
							Color::hsl(197.0, 100.0, 60.0).with_alpha(0.25).to_css(),
							color::panel_background(dark.get()),
						)
					}
				>
					<p class="muted">
						"For clinical demonstrations, collaboration, or technical inquiries regarding "
						<strong>"AI Healthcare System"</strong>
						", please reach out using the details below."
					</p>
				</div>

				<div class="grid grid-3">
					{cards()
						.into_iter()
						.map(|card| {
							let accent = card.accent;
							let value_style =
								move || color::accent_text(accent, dark.get());
							view! {
								<div
									class="card contact-card"
									style=move || {
										format!(
											"border-color: {}; {}",
											accent.with_alpha(0.25).to_css(),
											color::panel_background(dark.get()),
										)
									}
								>
									<p class="muted small caps">{card.label}</p>
									{match card.href {
										Some(href) => view! {
											<a href=href class="contact-value" style=value_style>
												{card.value}
											</a>
										}
											.into_any(),
										None => view! {
											<p class="contact-value" style=value_style>
												{card.value}
											</p>
										}
											.into_any(),
									}}
								</div>
							}
						})
						.collect_view()}
				</div>

				<div class="center">
					<a
						href="mailto:aihealthcaresystem@gmail.com"
						class="cta cta-blue"
					>
						"Send us an Email"
					</a>
				</div>
			</main>

			<SiteFooter dark=dark />
		</div>
	}
}
