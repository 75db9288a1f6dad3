//! Facade operations, grouped by concern.

mod enrollment;
mod identity;
mod registration;
mod revocation;

pub use enrollment::EnrollBuilder;
