//! Application layer driving the terminal console.
//!
//! This module holds the terminal renderer and the input loop that feeds
//! parsed commands to the view controller.

pub mod console;
pub mod ui;
