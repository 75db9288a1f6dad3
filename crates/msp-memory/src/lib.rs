//! In-memory collaborators for the MSP identity facade.
//!
//! Useful for embedding the facade without a credential backend and for
//! tests. Nothing here issues certificates or generates keys: the store
//! and key registry only hold what they are given.
//!
//! # Example
//!
//! ```rust,ignore
//! use msp_memory::StaticContext;
//!
//! let ctx = StaticContext::builder(config, ca_factory)
//!     .with_memory_identities()
//!     .build();
//! let msp = msp_client::Msp::new(ctx.provider())?;
//! ```

mod context;
mod crypto;
mod identity;
mod store;

pub use context::{StaticContext, StaticContextBuilder};
pub use crypto::MemoryCryptoSuite;
pub use identity::MemoryIdentityManager;
pub use store::MemoryUserStore;
