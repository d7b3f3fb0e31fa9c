//! # userdb repository
//!
//! Create, read, update and delete over the `users` table.
//!
//! ```text
//! src/
//!   statement.rs                 ← the four parameterized statements
//!   handle.rs                    ← DatabaseHandle trait (driver seam), UserRow
//!   pool.rs                      ← DatabasePool (MySQL / SQLx)
//!   traits.rs                    ← UserRepository trait
//!   impl/
//!     user_repository_impl.rs    ← UserRepositoryImpl
//! ```

pub mod handle;
pub mod pool;
pub mod statement;
pub mod traits;
pub mod r#impl;

pub use handle::*;
pub use pool::*;
pub use statement::{SqlValue, Statement};
pub use traits::*;
pub use r#impl::UserRepositoryImpl;
