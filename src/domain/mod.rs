mod assignment;
mod data_stores;
mod entity;
mod error;
mod member;
mod notification;
mod record_id;
mod session_id;

pub use assignment::*;
pub use data_stores::*;
pub use entity::*;
pub use error::*;
pub use member::*;
pub use notification::*;
pub use record_id::*;
pub use session_id::*;
