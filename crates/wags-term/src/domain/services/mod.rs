pub mod loaders;
mod session_state;
mod view_controller;

pub use session_state::*;
pub use view_controller::*;
