//! Landing page: hero, module cards, workflow steps, benefits, notice.
//!
//! All content is static tables; the only state is the page's theme
//! controller. This page seeds dark mode unconditionally.

use leptos::prelude::*;
use leptos_meta::Title;
use log::info;

use crate::components::shell::{NavBar, SiteFooter};
use crate::components::starfield::{NeonOrbs, Orb, Starfield};
use crate::theme::{color, Color, DomThemeSink, ThemeController, ThemeSeed};

struct ModuleCard {
	title: &'static str,
	desc: &'static str,
	cta: &'static str,
	href: &'static str,
	accent: Color,
}

fn modules() -> Vec<ModuleCard> {
	vec![
		ModuleCard {
			title: "Emergency Intake",
			desc: "Patient-facing symptom entry interface for structured reporting and urgency guidance.",
			cta: "Open Emergency Intake",
			href: "https://ai-pateint-emergency.lovable.app",
			accent: Color::hsl(0.0, 100.0, 60.0),
		},
		ModuleCard {
			title: "AI Symptom Assistant",
			desc: "Conversational AI module that gathers detailed clinical information through intelligent guided questioning.",
			cta: "Open Symptom Assistant",
			href: "https://ai-conversation-decision.lovable.app",
			accent: Color::hsl(145.0, 100.0, 50.0),
		},
		ModuleCard {
			title: "Clinical Triage Engine",
			desc: "Advanced structured triage system generating prioritized emergency assessment reports for physician review.",
			cta: "Open Triage Engine",
			href: "https://ai-guided-emergency.lovable.app",
			accent: Color::hsl(320.0, 100.0, 60.0),
		},
	]
}

fn steps() -> Vec<(&'static str, &'static str, Color)> {
	vec![
		("01", "Patient enters symptoms.", Color::hsl(197.0, 100.0, 60.0)),
		("02", "AI guides structured clarification.", Color::hsl(145.0, 100.0, 55.0)),
		("03", "System analyzes risk patterns.", Color::hsl(55.0, 100.0, 60.0)),
		("04", "Triage priority assigned for physician review.", Color::hsl(320.0, 100.0, 60.0)),
	]
}

fn benefits() -> Vec<(&'static str, Color)> {
	vec![
		("Standardized triage prioritization", Color::hsl(197.0, 100.0, 60.0)),
		("Structured clinical documentation", Color::hsl(145.0, 100.0, 55.0)),
		("Physician-supervised output", Color::hsl(320.0, 100.0, 60.0)),
		("Audit-ready reporting", Color::hsl(55.0, 100.0, 60.0)),
		("Built for high-load emergency settings", Color::hsl(0.0, 100.0, 60.0)),
	]
}

fn badges() -> Vec<(&'static str, Color)> {
	vec![
		("HIPAA-Grade Security", Color::hsl(197.0, 100.0, 60.0)),
		("Real-Time Triage", Color::hsl(145.0, 100.0, 55.0)),
		("AI-Powered", Color::hsl(320.0, 100.0, 60.0)),
		("24/7 Ready", Color::hsl(55.0, 100.0, 60.0)),
	]
}

/// Landing page component.
#[component]
pub fn HomePage() -> impl IntoView {
	let theme = RwSignal::new(ThemeController::mount(ThemeSeed::Fixed(true), DomThemeSink));
	let dark = Signal::derive(move || theme.with(|t| t.is_dark()));
	let on_toggle = Callback::new(move |_: ()| theme.update(|t| t.toggle()));
	info!("home: mounted (seed: dark)");

	let hero_stops = [
		Color::hsl(197.0, 100.0, 70.0),
		Color::hsl(145.0, 100.0, 60.0),
		Color::hsl(320.0, 100.0, 65.0),
	];

	view! {
		<Title text="AI Healthcare System" />
		<div class="page">
			<div class="background">
				<NeonOrbs dark=dark orbs=Orb::home_set() />
				<Starfield dark=dark />
			</div>

			<NavBar dark=dark on_toggle=on_toggle show_cta=true />

			<section class="hero">
				<div
					class="badge-pill"
					style=move || color::accent_badge(Color::hsl(197.0, 100.0, 60.0), dark.get())
				>
					"Clinical Decision Support Platform"
				</div>
				<h1 class="hero-title" style=move || color::heading_style(&hero_stops, dark.get())>
					"AI Healthcare System"
				</h1>
				<p
					class="hero-subtitle"
					style=move || {
						if dark.get() {
							color::accent_text(Color::hsl(145.0, 100.0, 65.0), true)
						} else {
							"color: hsl(185, 60%, 35%);".to_string()
						}
					}
				>
					"Structured Emergency Triage & Supervised Clinical Decision Support"
				</p>
				<p class="hero-lede muted">
					"An integrated AI-powered platform combining patient symptom intake, guided clinical conversations, and structured emergency triage assessment. Designed for supervised healthcare environments and institutional use."
				</p>
				<div class="hero-actions">
					<a
						href="https://ai-pateint-emergency.lovable.app"
						target="_blank"
						rel="noopener noreferrer"
						class="cta cta-red"
					>
						"Start Emergency Intake"
					</a>
					<a
						href="https://ai-conversation-decision.lovable.app"
						target="_blank"
						rel="noopener noreferrer"
						class="cta cta-blue"
					>
						"Clinician Access"
					</a>
				</div>
				<div class="badge-row">
					{badges()
						.into_iter()
						.map(|(label, accent)| {
							view! {
								<span
									class="badge-pill small"
									style=move || color::accent_badge(accent, dark.get())
								>
									{label}
								</span>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="modules" class="section">
				<div class="section-head">
					<h2
						class="section-title"
						style=move || {
							color::heading_style(
								&[Color::hsl(197.0, 100.0, 70.0), Color::hsl(320.0, 100.0, 65.0)],
								dark.get(),
							)
						}
					>
						"Our Modules"
					</h2>
					<p class="muted">
						"Three specialized AI-powered modules working in concert to deliver comprehensive clinical support."
					</p>
				</div>
				<div class="grid grid-3">
					{modules()
						.into_iter()
						.map(|m| {
							let accent = m.accent;
							view! {
								<div
									class="card"
									style=move || {
										format!(
											"border-color: {}; {}",
											accent.with_alpha(0.5).to_css(),
											color::panel_background(dark.get()),
										)
									}
								>
									<h3 class="card-title">{m.title}</h3>
									<p class="muted card-body">{m.desc}</p>
									<a
										href=m.href
										target="_blank"
										rel="noopener noreferrer"
										class="cta small"
										style=move || color::accent_badge(accent, dark.get())
									>
										{m.cta}
									</a>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="section">
				<div class="section-head">
					<h2
						class="section-title"
						style=move || {
							color::heading_style(
								&[Color::hsl(145.0, 100.0, 65.0), Color::hsl(55.0, 100.0, 60.0)],
								dark.get(),
							)
						}
					>
						"How It Works"
					</h2>
					<p class="muted">
						"A four-step intelligent workflow from symptom entry to triage assignment."
					</p>
				</div>
				<div class="grid grid-4">
					{steps()
						.into_iter()
						.map(|(num, label, accent)| {
							view! {
								<div
									class="card step-card"
									style=move || {
										format!(
											"border-color: {}; {}",
											accent.with_alpha(0.3).to_css(),
											color::panel_background(dark.get()),
										)
									}
								>
									<div class="step-num" style=format!("color: {};", accent.to_css())>
										{num}
									</div>
									<p class="step-label">{label}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="section">
				<div class="section-head">
					<h2
						class="section-title"
						style=move || {
							color::heading_style(
								&[Color::hsl(320.0, 100.0, 65.0), Color::hsl(197.0, 100.0, 70.0)],
								dark.get(),
							)
						}
					>
						"Key Benefits"
					</h2>
				</div>
				<div class="grid grid-3 narrow">
					{benefits()
						.into_iter()
						.map(|(text, accent)| {
							view! {
								<div
									class="benefit"
									style=move || {
										format!(
											"border-color: {}; {}",
											accent.with_alpha(0.25).to_css(),
											color::panel_background(dark.get()),
										)
									}
								>
									<span
										class="benefit-check"
										style=move || color::accent_text(accent, dark.get())
									>
										"\u{2713}"
									</span>
									<span class="benefit-text">{text}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="section">
				<div
					class="notice"
					style=move || {
						if dark.get() {
							"background: hsl(55 100% 50% / 0.05); box-shadow: 0 0 30px hsl(55 100% 60% / 0.2);"
						} else {
							"background: hsl(55 100% 50% / 0.06);"
						}
					}
				>
					<h3
						class="notice-title"
						style=move || {
							if dark.get() {
								color::accent_text(Color::hsl(55.0, 100.0, 70.0), true)
							} else {
								"color: hsl(40, 80%, 30%);".to_string()
							}
						}
					>
						"\u{26a0} Important Notice"
					</h3>
					<p class="muted">
						<strong>"This platform provides Clinical Decision Support only."</strong>
					</p>
					<p class="muted">
						"It does not independently diagnose, prescribe, or replace licensed medical professionals. All final clinical decisions must be made by a qualified healthcare provider."
					</p>
				</div>
			</section>

			<SiteFooter dark=dark />
		</div>
	}
}
