mod identity;
mod registration;
mod revocation;

pub use identity::*;
pub use registration::*;
pub use revocation::*;
