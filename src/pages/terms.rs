//! Terms-of-use page.

use leptos::prelude::*;
use log::info;

use crate::theme::Color;

use super::legal::{LegalLayout, LegalSection};

fn sections() -> Vec<LegalSection> {
	vec![
		LegalSection {
			title: "Acceptance of Terms",
			accent: Color::hsl(197.0, 100.0, 60.0),
			body: "By accessing AI Healthcare System you agree to these terms of use. If you do not agree, do not use the platform.",
		},
		LegalSection {
			title: "Permitted Use",
			accent: Color::hsl(145.0, 100.0, 55.0),
			body: "The platform is provided for supervised institutional use by healthcare organizations and their authorized personnel. You agree not to misuse, probe, or disrupt the service.",
		},
		LegalSection {
			title: "No Medical Advice",
			accent: Color::hsl(320.0, 100.0, 60.0),
			body: "Output from this platform is clinical decision support only. It is not a diagnosis, prescription, or treatment recommendation, and must always be reviewed by a qualified healthcare provider.",
		},
		LegalSection {
			title: "Limitation of Liability",
			accent: Color::hsl(55.0, 100.0, 60.0),
			body: "The platform is provided \u{201c}as is\u{201d} without warranties of any kind. To the maximum extent permitted by law, we are not liable for decisions made in reliance on its output.",
		},
		LegalSection {
			title: "Changes to These Terms",
			accent: Color::hsl(0.0, 100.0, 65.0),
			body: "We may update these terms from time to time. Continued use of the platform after changes take effect constitutes acceptance of the revised terms.",
		},
	]
}

/// Terms-of-use page component.
#[component]
pub fn TermsPage() -> impl IntoView {
	info!("terms: mounted (seed: mirror global)");
	view! {
		<LegalLayout
			title="Terms of Use \u{00b7} AI Healthcare System"
			badge="The Fine Print"
			heading="Terms of Use"
			sections=sections()
		/>
	}
}
