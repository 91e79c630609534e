pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{dry_run::DryRunTransport, http::PendingRequest, http::ReqwestTransport};
pub use crate::config::{ClientFileConfig, ClientSettings};
pub use crate::core::user_client::{UserApiClient, DEFAULT_BASE_URL};
pub use crate::domain::model::{HttpMethod, RequestDescriptor, RequestOptions, User};
pub use crate::domain::ports::{ConfigProvider, HttpTransport};
pub use crate::utils::error::{Result, UserApiError};
