//! Shared page shell: navigation bar and footer.
//!
//! Pure consumers of the page's theme state. The nav owns the toggle button
//! and invokes the callback handed down by the page; everything else is
//! static content styled through the theme-conditional token helpers.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::theme::{color, Color};

fn brand_blue() -> Color {
	Color::hsl(197.0, 100.0, 60.0)
}

/// Top navigation: brand mark, theme toggle, optional modules anchor.
#[component]
pub fn NavBar(
	#[prop(into)] dark: Signal<bool>,
	/// Invoked when the user presses the dark/light toggle.
	on_toggle: Callback<()>,
	/// Show the "Explore Modules" anchor (landing page only).
	#[prop(default = false)]
	show_cta: bool,
) -> impl IntoView {
	view! {
		<nav class="nav">
			<A href="/" attr:class="brand">
				<span class="brand-mark" style=move || color::accent_text(brand_blue(), dark.get())>
					"\u{2764}"
				</span>
				<span
					class="brand-name"
					style=move || {
						if dark.get() {
							color::accent_text(Color::hsl(197.0, 100.0, 70.0), true)
						} else {
							String::new()
						}
					}
				>
					"AI Healthcare System"
				</span>
			</A>
			<div class="nav-actions">
				<button
					class="theme-toggle"
					aria-label="Toggle dark mode"
					on:click=move |_| on_toggle.run(())
				>
					<span
						class="toggle-glyph"
						style=move || {
							if dark.get() {
								color::accent_text(Color::hsl(55.0, 100.0, 60.0), true)
							} else {
								"color: hsl(220, 80%, 30%);".to_string()
							}
						}
					>
						{move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
					</span>
				</button>
				{show_cta
					.then(|| {
						view! {
							<a href="#modules" class="nav-cta">
								"Explore Modules"
							</a>
						}
					})}
			</div>
		</nav>
	}
}

/// Shared footer: brand line, supervision tagline, fixed internal links.
#[component]
pub fn SiteFooter(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
	let links = [
		("Privacy Policy", "/privacy", Color::hsl(197.0, 100.0, 60.0)),
		("Terms of Use", "/terms", Color::hsl(145.0, 100.0, 55.0)),
		("Contact", "/contact", Color::hsl(320.0, 100.0, 60.0)),
	];

	view! {
		<footer class="footer">
			<div class="footer-inner">
				<div class="footer-brand">
					<div class="footer-brand-row">
						<span
							class="brand-mark small"
							style=move || color::accent_text(brand_blue(), dark.get())
						>
							"\u{2764}"
						</span>
						<span
							class="footer-brand-name"
							style=move || {
								if dark.get() {
									color::accent_text(Color::hsl(197.0, 100.0, 70.0), true)
								} else {
									String::new()
								}
							}
						>
							"AI Healthcare System"
						</span>
					</div>
					<p class="muted small">"Supervised Use Only"</p>
					<p class="muted small">"\u{00a9} 2026 All Rights Reserved"</p>
				</div>
				<div class="footer-links">
					{links
						.into_iter()
						.map(|(label, to, accent)| {
							view! {
								<A
									href=to
									attr:class="footer-link"
									attr:style=move || {
										if dark.get() {
											format!("color: {};", accent.to_css())
										} else {
											"color: hsl(220, 60%, 30%);".to_string()
										}
									}
								>
									{label}
								</A>
							}
						})
						.collect_view()}
				</div>
			</div>
			<p class="muted tiny footer-tagline">
				"Clinical Decision Support Platform \u{00b7} Not a diagnostic tool \u{00b7} For supervised institutional use only"
			</p>
		</footer>
	}
}
