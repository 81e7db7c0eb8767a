//! Procedural animated background: particle field and gradient orbs.
//!
//! The particle batch is randomized per mount and immutable afterwards; the
//! current theme flag only drives the per-frame styling pass. See
//! [`particles`] for the generation contract and [`style`] for the pure
//! style derivation.

mod component;
pub mod particles;
pub mod style;

pub use component::{NeonOrbs, Starfield};
pub use particles::{Particle, ParticleField};
pub use style::{NeonPalette, Orb};
