//! Core domain logic for the terminal console.
//!
//! This module contains the session state machine, the data loaders and the
//! view controller, independent of how results are painted.

pub mod models;
pub mod services;
