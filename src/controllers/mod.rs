mod form;
mod gate;
mod list_controller;
mod page;
mod pending_action;

pub use form::*;
pub use gate::*;
pub use list_controller::*;
pub use page::*;
pub use pending_action::*;
