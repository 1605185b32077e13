//! Configuration management for the terminal console.
//!
//! This module provides centralized configuration handling for the server URL,
//! the config file and the credential cache location.

mod config;

pub use config::*;
