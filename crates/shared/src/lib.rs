//! Shared configuration for TaxLens.
//!
//! Settings are layered from optional config files and `TAXLENS__*`
//! environment variables; see [`AppConfig::load`].

pub mod config;

pub use config::{AppConfig, DataConfig, ServerConfig};
