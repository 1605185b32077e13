//! Terminal console for the WAGS message queue.
//!
//! This crate provides a line-driven terminal front-end for a WAGS server: it
//! logs a user in, caches the credential on disk, and renders the dashboard,
//! message and broadcast views fetched from the backend. The session/request
//! layer and the view-state machine live in the domain services; the terminal
//! printer is just one implementation of the rendering collaborator.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::start_loop;
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, ClientError, Clock, Credential, CredentialStore, PageId, Period, Renderer,
};
pub use domain::services::{SessionState, ViewController, ViewControllerProps};
pub use infrastructure::clients::ApiClient;
pub use infrastructure::storage::{FileCredentialStore, MemoryCredentialStore};
