//! Type definitions for the WAGS queue REST surface
//!
//! This crate holds the shared contract between the WAGS server and its
//! clients: the read-only message and broadcast views served under `/api/ui`,
//! and the request/response bodies of the login and send endpoints. Keeping
//! them in one place lets the console and any other client decode the server
//! the same way.
//!
//! ## Example
//!
//! ```rust
//! use wags_types::{Message, MessageStatus};
//!
//! let message: Message = serde_json::from_str(
//!     r#"{"id":7,"recipient":"628111","status":"SENT","broadcast_message":"NO",
//!        "dt_store":"15-05-24 10:31:07","dt_queue":"15-05-24 10:31:08","message":"hi"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(message.status, MessageStatus::Sent);
//! assert!(message.dt_send.is_none());
//! ```

pub mod api;
pub mod types;

pub use api::*;
pub use types::*;
