mod action;
mod clock;
mod credential;
mod error;
mod page;
mod period;
mod renderer;
mod view_data;

pub use action::*;
pub use clock::*;
pub use credential::*;
pub use error::*;
pub use page::*;
pub use period::*;
pub use renderer::*;
pub use view_data::*;
