//! Core types and collaborator contracts for the MSP identity facade.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - **Types**: registration, revocation and identity data exchanged with callers
//! - **Contracts**: the [`CaClient`](ca::CaClient), [`IdentityManager`],
//!   [`UserStore`], [`CryptoSuite`] and [`ClientContext`] traits the facade delegates to
//! - **Errors**: [`MspError`] at the facade boundary, [`ProviderError`] for collaborators
//! - **Config**: [`SdkConfig`] loaded from TOML
//!
//! # Example
//!
//! ```rust,ignore
//! use msp_core::{MspError, Result, SigningIdentity};
//!
//! fn describe(identity: Result<SigningIdentity>) {
//!     match identity {
//!         Ok(id) => println!("MSP: {}", id.msp_id),
//!         Err(MspError::UserNotFound) => println!("enroll first"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

pub mod ca;
mod config;
mod context;
mod error;
pub mod types;

pub use config::{ClientConfig, OrganizationConfig, SdkConfig};
pub use context::{ClientContext, CryptoSuite, IdentityManager, UserStore};
pub use error::{MspError, ProviderError, ProviderResult, Result};
pub use types::*;
