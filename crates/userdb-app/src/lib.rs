//! # userdb app
//!
//! Wiring for the userdb binary: dependency injection and logging set-up.

pub mod di;
pub mod logging;
