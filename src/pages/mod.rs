//! Site pages. Each page independently instantiates its theme controller
//! and background; there is deliberately no cross-page theme state beyond
//! the global presentation flag.

pub mod contact;
pub mod home;
mod legal;
pub mod privacy;
pub mod terms;

pub use contact::ContactPage;
pub use home::HomePage;
pub use privacy::PrivacyPage;
pub use terms::TermsPage;
