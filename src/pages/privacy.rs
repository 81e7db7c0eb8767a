//! Privacy policy page.

use leptos::prelude::*;
use log::info;

use crate::theme::Color;

use super::legal::{LegalLayout, LegalSection};

fn sections() -> Vec<LegalSection> {
	vec![
		LegalSection {
			title: "Information We Collect",
			accent: Color::hsl(197.0, 100.0, 60.0),
			body: "We may collect symptom inputs, non-identifiable usage data, and basic device/browser information. We do not intentionally collect personally identifiable information unless voluntarily submitted via contact forms.",
		},
		LegalSection {
			title: "How We Use Information",
			accent: Color::hsl(145.0, 100.0, 55.0),
			body: "Information is used to provide clinical decision support functionality, improve system performance, and enhance user experience.",
		},
		LegalSection {
			title: "Data Storage",
			accent: Color::hsl(320.0, 100.0, 60.0),
			body: "This platform does not guarantee permanent storage of medical or health-related inputs. Users should not rely on this system for medical record keeping.",
		},
		LegalSection {
			title: "Data Sharing",
			accent: Color::hsl(55.0, 100.0, 60.0),
			body: "We do not sell, rent, or trade personal information with third parties.",
		},
		LegalSection {
			title: "Security",
			accent: Color::hsl(0.0, 100.0, 65.0),
			body: "Reasonable safeguards are implemented to protect user data. However, no online system can guarantee complete security.",
		},
		LegalSection {
			title: "Medical Disclaimer",
			accent: Color::hsl(197.0, 100.0, 60.0),
			body: "AI Healthcare System provides clinical decision support only and does not replace licensed medical professionals.",
		},
	]
}

/// Privacy policy page component.
#[component]
pub fn PrivacyPage() -> impl IntoView {
	info!("privacy: mounted (seed: mirror global)");
	view! {
		<LegalLayout
			title="Privacy Policy \u{00b7} AI Healthcare System"
			badge="Your Data"
			heading="Privacy Policy"
			sections=sections()
		/>
	}
}
