//! # userdb core
//!
//! The `User` entity, its typed id, and the error type shared by the
//! configuration and repository crates.

pub mod error;
pub mod id;
pub mod result;
pub mod user;

pub use error::*;
pub use id::*;
pub use result::*;
pub use user::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
