//! Auth-provider contracts, identity tokens, and built-in providers.

pub mod memory;
pub mod session;
pub mod token;

pub use memory::*;
pub use session::*;
pub use token::*;
