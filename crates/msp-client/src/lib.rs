//! Identity facade over a certificate-authority client.
//!
//! This crate provides [`Msp`], bound to one organization, which forwards
//! enrollment, registration, revocation and user lookups to the CA client
//! and identity manager supplied by a session context.

mod client;
mod config;
pub mod api;

pub use api::EnrollBuilder;
pub use client::{Msp, MspBuilder};
pub use config::MspOptions;
pub use msp_core::{MspError, Result};
