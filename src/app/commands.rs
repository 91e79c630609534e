use crate::adapters::dry_run::DryRunTransport;
use crate::adapters::http::ReqwestTransport;
use crate::config::cli::{CliConfig, Command};
use crate::config::ClientSettings;
use crate::core::user_client::UserApiClient;
use crate::domain::model::RequestDescriptor;
use crate::domain::ports::HttpTransport;
use crate::utils::error::{Result, UserApiError};
use crate::utils::validation::validate_non_empty_string;
use reqwest::StatusCode;
use std::fmt;
use std::path::PathBuf;

/// 指令執行結果，可直接輸出
#[derive(Debug)]
pub enum Outcome {
    Described(RequestDescriptor),
    Response { status: StatusCode, body: String },
    Saved {
        status: StatusCode,
        path: PathBuf,
        bytes: usize,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Described(_) => true,
            Outcome::Response { status, .. } | Outcome::Saved { status, .. } => status.is_success(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Described(request) => {
                let json = serde_json::to_string_pretty(request).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            Outcome::Response { status, body } => {
                writeln!(f, "HTTP {}", status)?;
                f.write_str(body)
            }
            Outcome::Saved {
                status,
                path,
                bytes,
            } => {
                writeln!(f, "HTTP {}", status)?;
                write!(f, "Saved {} bytes to {}", bytes, path.display())
            }
        }
    }
}

fn issue<T: HttpTransport>(
    client: &UserApiClient<T>,
    command: &Command,
    settings: &ClientSettings,
) -> Result<T::Handle> {
    let handle = match command {
        Command::Register { .. } => {
            let user = command.user().unwrap_or_default();
            client.register(&user)
        }
        Command::List => client.get_all_users(),
        Command::Get { id } => client.get_by_id(id),
        Command::ByUsername { username, token } => {
            let token = token
                .as_deref()
                .or(settings.token.as_deref())
                .ok_or_else(|| UserApiError::InvalidConfigValueError {
                    field: "token".to_string(),
                    value: String::new(),
                    reason: "No token given; pass --token or set client.token".to_string(),
                })?;
            validate_non_empty_string("token", token)?;
            client.get_by_username(username, token)
        }
        Command::Picture { username, .. } => client.retrieve_user_picture(username),
    };
    Ok(handle)
}

fn pretty_body(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// 對設定好的服務執行單一 CLI 指令
///
/// `picture --output` 只有在 2xx 時才寫檔，錯誤回應不會覆蓋既有檔案
pub async fn execute(cli: &CliConfig, settings: &ClientSettings) -> Result<Outcome> {
    if cli.dry_run {
        let client = UserApiClient::from_config(DryRunTransport, settings);
        let request = issue(&client, &cli.command, settings)??;
        return Ok(Outcome::Described(request));
    }

    let client = UserApiClient::from_config(ReqwestTransport::new(), settings);
    let response = issue(&client, &cli.command, settings)?.await?;
    let status = response.status();

    match &cli.command {
        Command::Picture {
            output: Some(path), ..
        } if status.is_success() => {
            let bytes = response.bytes().await?;
            tokio::fs::write(path, &bytes).await?;
            tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
            Ok(Outcome::Saved {
                status,
                path: path.clone(),
                bytes: bytes.len(),
            })
        }
        _ => {
            let text = response.text().await?;
            Ok(Outcome::Response {
                status,
                body: pretty_body(&text),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_pretty_body() {
        assert_eq!(pretty_body("{\"a\":1}"), "{\n  \"a\": 1\n}");
        assert_eq!(pretty_body("plain text"), "plain text");
        assert_eq!(pretty_body(""), "");
    }

    #[test]
    fn test_outcome_display() {
        let outcome = Outcome::Response {
            status: StatusCode::NOT_FOUND,
            body: "missing".to_string(),
        };
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "HTTP 404 Not Found\nmissing");
    }

    #[tokio::test]
    async fn test_by_username_without_token_is_rejected() {
        let cli = CliConfig::try_parse_from(["user-api", "--dry-run", "by-username", "alice"])
            .unwrap();

        let result = execute(&cli, &ClientSettings::default()).await;
        assert!(matches!(
            result,
            Err(UserApiError::InvalidConfigValueError { ref field, .. }) if field == "token"
        ));
    }

    #[tokio::test]
    async fn test_by_username_rejects_blank_flag_token() {
        for token in ["", "   "] {
            let cli = CliConfig::try_parse_from([
                "user-api",
                "--dry-run",
                "by-username",
                "alice",
                "--token",
                token,
            ])
            .unwrap();

            let result = execute(&cli, &ClientSettings::default()).await;
            assert!(matches!(
                result,
                Err(UserApiError::InvalidConfigValueError { ref field, .. }) if field == "token"
            ));
        }
    }

    #[tokio::test]
    async fn test_by_username_falls_back_to_settings_token() {
        let cli = CliConfig::try_parse_from(["user-api", "--dry-run", "by-username", "alice"])
            .unwrap();
        let settings = ClientSettings {
            token: Some("file-token".to_string()),
            ..ClientSettings::default()
        };

        match execute(&cli, &settings).await.unwrap() {
            Outcome::Described(request) => {
                assert_eq!(request.headers["Authorization"], "file-token");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
