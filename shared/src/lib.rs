//! # idp shared
//!
//! Configuration types shared across the idp workspace. Everything here is
//! loaded once at process startup and passed by reference into the service
//! constructors; nothing is reloaded at runtime.

pub mod config;

pub use config::{AppConfig, ConfigError};
