//! Identity facade over a certificate-authority client.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use msp::{Msp, MspError, RegistrationRequest};
//!
//! async fn onboard(provider: impl FnOnce() -> msp::ProviderResult<std::sync::Arc<dyn msp::ClientContext>>) -> msp::Result<()> {
//!     let msp = Msp::builder(provider).organization("Org1MSP").build()?;
//!
//!     let secret = msp
//!         .register(&RegistrationRequest::new("alice", "client").max_enrollments(1))
//!         .await?;
//!
//!     match msp.signing_identity("alice").await {
//!         Ok(identity) => println!("already enrolled under {}", identity.msp_id),
//!         Err(MspError::UserNotFound) => msp.enroll("alice").secret(secret).send().await?,
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `memory` - In-memory user store, key registry and session context

// Re-export core types
pub use msp_core::*;

// Re-export facade
pub use msp_client::{EnrollBuilder, Msp, MspBuilder, MspOptions};

#[cfg(feature = "memory")]
pub use msp_memory as memory;
