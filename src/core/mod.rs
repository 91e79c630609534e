pub mod user_client;

pub use crate::domain::model::{RequestOptions, User};
pub use crate::domain::ports::{ConfigProvider, HttpTransport};
