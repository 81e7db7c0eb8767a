//! triage-site: client-rendered landing site for the AI Healthcare System
//! clinical decision support platform.
//!
//! This crate is a CSR WASM site: a landing page, a contact page, and two
//! legal pages, sharing a navigation shell, a per-page dark/light theme, and
//! a procedurally generated animated background. All clinical functionality
//! lives behind external links; nothing here computes or stores health data.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, Meta, Style};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{info, Level};

pub mod components;
pub mod pages;
pub mod theme;

pub use pages::{ContactPage, HomePage, PrivacyPage, TermsPage};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("triage-site: logging initialized");
}

/// Base layout and color-scheme variables. Theme-dependent accents are
/// inline per element; these variables switch with the global `dark` class
/// set on the document root by the theme sink.
const GLOBAL_CSS: &str = r#"
:root {
	--bg: hsl(210, 40%, 98%);
	--fg: hsl(220, 60%, 12%);
	--muted: hsl(220, 15%, 40%);
	--border: hsl(220, 20%, 80%);
}
:root.dark {
	--bg: hsl(220, 30%, 4%);
	--fg: hsl(210, 40%, 96%);
	--muted: hsl(215, 15%, 65%);
	--border: hsl(220, 20%, 25%);
}
* { box-sizing: border-box; }
body {
	margin: 0;
	background: var(--bg);
	color: var(--fg);
	font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
	transition: background 0.5s, color 0.5s;
	overflow-x: hidden;
}
.page { position: relative; min-height: 100vh; }
.background { position: fixed; inset: 0; z-index: 0; }
.starfield, .orb-layer {
	position: absolute;
	inset: 0;
	overflow: hidden;
	pointer-events: none;
}
.star {
	position: absolute;
	border-radius: 50%;
	animation: twinkle 3s ease-in-out infinite;
}
@keyframes twinkle {
	0%, 100% { opacity: 0.35; }
	50% { opacity: 1; }
}
.orb { position: absolute; border-radius: 50%; filter: blur(64px); }
.nav {
	position: relative;
	z-index: 50;
	display: flex;
	align-items: center;
	justify-content: space-between;
	padding: 1rem 3rem;
	border-bottom: 1px solid var(--border);
	backdrop-filter: blur(12px);
}
.brand { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; color: inherit; }
.brand-mark { font-size: 1.4rem; }
.brand-mark.small { font-size: 1rem; }
.brand-name { font-size: 1.1rem; font-weight: 700; letter-spacing: 0.02em; }
.nav-actions { display: flex; align-items: center; gap: 0.75rem; }
.theme-toggle {
	padding: 0.4rem 0.6rem;
	border-radius: 9999px;
	border: 1px solid var(--border);
	background: transparent;
	cursor: pointer;
	font-size: 1rem;
	transition: border-color 0.3s;
}
.nav-cta, .cta {
	display: inline-flex;
	align-items: center;
	gap: 0.4rem;
	padding: 0.6rem 1.5rem;
	border-radius: 9999px;
	border: 1px solid;
	font-weight: 700;
	font-size: 0.95rem;
	text-decoration: none;
	transition: box-shadow 0.3s;
}
.cta.small { padding: 0.5rem 1.2rem; font-size: 0.85rem; width: fit-content; }
.nav-cta, .cta-blue { border-color: hsl(197, 100%, 60%); color: hsl(197, 100%, 60%); }
.cta-red { border-color: hsl(0, 100%, 60%); color: hsl(0, 100%, 60%); }
.dark .nav-cta, .dark .cta-blue { box-shadow: 0 0 14px hsl(197 100% 60% / 0.4); }
.dark .cta-red { box-shadow: 0 0 14px hsl(0 100% 60% / 0.4); }
.hero {
	position: relative;
	z-index: 10;
	display: flex;
	flex-direction: column;
	align-items: center;
	text-align: center;
	padding: 6rem 1.5rem;
	min-height: 80vh;
	justify-content: center;
}
.hero-title { font-size: clamp(2.5rem, 7vw, 4.5rem); font-weight: 900; margin: 1rem 0; }
.hero-subtitle { font-size: 1.3rem; font-weight: 600; margin: 0 0 1rem; }
.hero-lede { max-width: 42rem; line-height: 1.6; margin-bottom: 2.5rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
.badge-pill {
	display: inline-flex;
	align-items: center;
	gap: 0.5rem;
	padding: 0.35rem 1rem;
	border-radius: 9999px;
	border: 1px solid;
	font-size: 0.75rem;
	font-weight: 600;
	letter-spacing: 0.15em;
	text-transform: uppercase;
}
.badge-pill.small { letter-spacing: 0.05em; text-transform: none; }
.badge-row { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; margin-top: 3rem; }
.section { position: relative; z-index: 10; max-width: 72rem; margin: 0 auto; padding: 4rem 1.5rem; }
.section-head { text-align: center; margin-bottom: 3rem; }
.section-title { font-size: clamp(1.8rem, 4vw, 2.8rem); font-weight: 900; margin: 0.75rem 0; }
.grid { display: grid; gap: 1.5rem; }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
.card {
	position: relative;
	border: 2px solid;
	border-radius: 1rem;
	padding: 1.5rem;
	display: flex;
	flex-direction: column;
	gap: 0.75rem;
	backdrop-filter: blur(4px);
}
.card-title { font-size: 1.2rem; font-weight: 700; margin: 0; }
.card-body { flex: 1; line-height: 1.6; }
.step-card { align-items: center; text-align: center; }
.step-num { font-size: 2.2rem; font-weight: 900; opacity: 0.35; }
.step-label { font-size: 0.9rem; font-weight: 500; line-height: 1.5; }
.benefit {
	display: flex;
	align-items: center;
	gap: 0.75rem;
	border: 1px solid;
	border-radius: 0.8rem;
	padding: 1rem 1.25rem;
}
.benefit-check { font-weight: 900; }
.benefit-text { font-size: 0.9rem; font-weight: 500; }
.notice {
	max-width: 46rem;
	margin: 0 auto;
	border: 2px solid hsl(55, 100%, 60%);
	border-radius: 1rem;
	padding: 2rem;
	text-align: center;
}
.notice-title { font-size: 1.3rem; font-weight: 900; }
.content { position: relative; z-index: 10; margin: 0 auto; padding: 4rem 1.5rem; }
.content.narrow { max-width: 48rem; }
.intro-card { text-align: center; margin-bottom: 2rem; }
.contact-card { align-items: center; text-align: center; }
.contact-value { font-size: 0.95rem; font-weight: 600; text-decoration: none; word-break: break-all; }
.stack { display: flex; flex-direction: column; gap: 1.25rem; }
.center { text-align: center; margin-top: 2rem; }
.caps { text-transform: uppercase; letter-spacing: 0.15em; }
.muted { color: var(--muted); }
.small { font-size: 0.8rem; }
.tiny { font-size: 0.65rem; }
.footer {
	position: relative;
	z-index: 10;
	border-top: 1px solid var(--border);
	backdrop-filter: blur(8px);
	padding: 2.5rem 3rem;
}
.footer-inner {
	max-width: 72rem;
	margin: 0 auto;
	display: flex;
	flex-wrap: wrap;
	justify-content: space-between;
	align-items: center;
	gap: 1.5rem;
}
.footer-brand-row { display: flex; align-items: center; gap: 0.5rem; }
.footer-brand-name { font-weight: 700; }
.footer-links { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.footer-link { font-size: 0.8rem; font-weight: 500; text-decoration: none; }
.footer-link:hover { text-decoration: underline; }
.footer-tagline { text-align: center; margin-top: 1.5rem; }
"#;

/// Root application component: meta tags, global stylesheet, and routes.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{GLOBAL_CSS}</Style>

		<Router>
			<Routes fallback=HomePage>
				<Route path=path!("/") view=HomePage />
				<Route path=path!("/contact") view=ContactPage />
				<Route path=path!("/privacy") view=PrivacyPage />
				<Route path=path!("/terms") view=TermsPage />
			</Routes>
		</Router>
	}
}
