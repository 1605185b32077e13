//! Infrastructure layer providing external integrations.
//!
//! This module contains the HTTP client for the WAGS server and the durable
//! credential storage backends.

pub mod clients;
pub mod storage;
