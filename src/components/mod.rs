//! Reusable UI components shared across pages.

pub mod shell;
pub mod starfield;
