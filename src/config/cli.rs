use crate::config::{ClientFileConfig, ClientSettings, BASE_URL_ENV};
use crate::domain::model::User;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

const REDACTED: &str = "[redacted]";

#[derive(Debug, Clone, Parser)]
#[command(name = "user-api")]
#[command(about = "Command-line client for the user account service")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Base URL of the user endpoints (overrides USER_API_BASE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "TOML file with a [client] section")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print the request instead of sending it")]
    pub dry_run: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

// Debug 為手寫實作，避免密碼與 token 進入日誌
#[derive(Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(about = "Register a new account")]
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    #[command(about = "List every account")]
    List,
    #[command(about = "Fetch one account by id")]
    Get { id: String },
    #[command(about = "Fetch one account by username, authenticated with a token")]
    ByUsername {
        username: String,
        #[arg(long, help = "Sent verbatim as the Authorization header")]
        token: Option<String>,
    },
    #[command(about = "Download an account's profile picture")]
    Picture {
        username: String,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// 建立註冊用的 User，其他指令回傳 `None`
    pub fn user(&self) -> Option<User> {
        match self {
            Command::Register {
                username,
                password,
                email,
                first_name,
                last_name,
            } => Some(User {
                username: username.clone(),
                password: password.clone(),
                email: email.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                ..User::default()
            }),
            _ => None,
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Register {
                username,
                password,
                email,
                first_name,
                last_name,
            } => f
                .debug_struct("Register")
                .field("username", username)
                .field("password", &password.as_ref().map(|_| REDACTED))
                .field("email", email)
                .field("first_name", first_name)
                .field("last_name", last_name)
                .finish(),
            Command::List => f.write_str("List"),
            Command::Get { id } => f.debug_struct("Get").field("id", id).finish(),
            Command::ByUsername { username, token } => f
                .debug_struct("ByUsername")
                .field("username", username)
                .field("token", &token.as_ref().map(|_| REDACTED))
                .finish(),
            Command::Picture { username, output } => f
                .debug_struct("Picture")
                .field("username", username)
                .field("output", output)
                .finish(),
        }
    }
}

impl CliConfig {
    /// 載入設定檔（若有），依序套用旗標、環境變數與設定檔後驗證
    pub fn settings(&self) -> Result<ClientSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = ClientFileConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = ClientSettings::resolve(
            self.base_url.as_deref(),
            std::env::var(BASE_URL_ENV).ok(),
            file.as_ref(),
        );
        settings.validate()?;
        Ok(settings)
    }
}
