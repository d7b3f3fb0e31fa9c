//! # userdb config
//!
//! Layered configuration: TOML files, `.env`, and `USERDB_`-prefixed
//! environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
