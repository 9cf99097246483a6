pub mod error;
pub mod money;
pub mod notification;
pub mod traits;

pub use error::{AppError, Result};
pub use notification::Notification;
