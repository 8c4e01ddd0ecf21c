//!
//! Resolution of the user on whose behalf operations are performed
//!

mod identity_context;
mod session_identity_context;

pub use identity_context::*;
pub use session_identity_context::*;
