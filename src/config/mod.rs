#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::user_client::DEFAULT_BASE_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

pub use toml_config::ClientFileConfig;

pub const BASE_URL_ENV: &str = "USER_API_BASE_URL";

/// 合併旗標、環境變數、設定檔與預設值後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub token: Option<String>,
}

impl ClientSettings {
    /// base URL 優先順序：旗標 > 環境變數 > 設定檔 > 預設值
    pub fn resolve(
        flag_base_url: Option<&str>,
        env_base_url: Option<String>,
        file: Option<&ClientFileConfig>,
    ) -> Self {
        let file_section = file.map(|f| &f.client);

        let base_url = flag_base_url
            .map(str::to_string)
            .or(env_base_url)
            .or_else(|| file_section.and_then(|s| s.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            token: file_section.and_then(|s| s.token.clone()),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(token) = &self.token {
            validate_non_empty_string("token", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ClientSection;

    fn file_config() -> ClientFileConfig {
        ClientFileConfig {
            client: ClientSection {
                base_url: Some("http://file:8080/user".to_string()),
                token: Some("file-token".to_string()),
            },
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "http://localhost:8080/user");
        assert_eq!(settings.token, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_precedence() {
        let file = file_config();

        let from_file = ClientSettings::resolve(None, None, Some(&file));
        assert_eq!(from_file.base_url, "http://file:8080/user");
        assert_eq!(from_file.token.as_deref(), Some("file-token"));

        let from_env =
            ClientSettings::resolve(None, Some("http://env:8080/user".to_string()), Some(&file));
        assert_eq!(from_env.base_url, "http://env:8080/user");

        let from_flag = ClientSettings::resolve(
            Some("http://flag:8080/user"),
            Some("http://env:8080/user".to_string()),
            Some(&file),
        );
        assert_eq!(from_flag.base_url, "http://flag:8080/user");
        assert_eq!(from_flag.token.as_deref(), Some("file-token"));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let settings = ClientSettings::resolve(Some("not a url"), None, None);
        assert!(settings.validate().is_err());
    }
}
