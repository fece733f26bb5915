use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use tracing::{info, warn};
use toml;

/// Configuration for the Showroom application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. "127.0.0.1:3000"
    pub listen_addr: String,
    /// Endpoint of the HTTP mail API used for inquiry notifications
    pub mail_api_url: String,
    /// API key for the mail API; notifications are disabled without one
    pub mail_api_key: Option<String>,
    /// Sender address for inquiry notification mails
    pub mail_from: String,
    /// Staff address inquiry notifications are delivered to
    pub mail_to: String,
    /// Directory for rotated log files; logs go to stdout only when unset
    pub log_dir: Option<PathBuf>,
    /// Base URL the CLI uses to reach the server
    pub server_url: Option<String>,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    /// Optional update for database URL
    #[serde(default)]
    pub database_url: Option<String>,
    /// Optional update for the listen address
    #[serde(default)]
    pub listen_addr: Option<String>,
    /// Optional update for the mail API endpoint
    #[serde(default)]
    pub mail_api_url: Option<String>,
    /// Optional update for the mail API key
    #[serde(default)]
    pub mail_api_key: Option<String>,
    /// Optional update for the notification sender address
    #[serde(default)]
    pub mail_from: Option<String>,
    /// Optional update for the notification recipient address
    #[serde(default)]
    pub mail_to: Option<String>,
    /// Optional update for the log directory
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    /// Optional update for the CLI's server URL
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Command line arguments for the application
#[derive(Parser, Debug)]
#[clap(name = "showroom", about = "A furniture project catalog service")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to bind the HTTP server to
    #[clap(long, env = "SHOWROOM_LISTEN_ADDR")]
    pub listen_addr: Option<String>,

    /// Mail API endpoint for inquiry notifications
    #[clap(long, env = "MAIL_API_URL")]
    pub mail_api_url: Option<String>,

    /// Mail API key; leave unset to disable notifications
    #[clap(long, env = "MAIL_API_KEY")]
    pub mail_api_key: Option<String>,

    /// Sender address for notification mails
    #[clap(long, env = "MAIL_FROM")]
    pub mail_from: Option<String>,

    /// Staff address notifications are delivered to
    #[clap(long, env = "MAIL_TO")]
    pub mail_to: Option<String>,

    /// Directory for rotated log files
    #[clap(long, env = "SHOWROOM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Debug mode
    #[clap(long, env = "SHOWROOM_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            listen_addr: update.listen_addr.unwrap_or(self.listen_addr),
            mail_api_url: update.mail_api_url.unwrap_or(self.mail_api_url),
            mail_api_key: update.mail_api_key.or(self.mail_api_key),
            mail_from: update.mail_from.unwrap_or(self.mail_from),
            mail_to: update.mail_to.unwrap_or(self.mail_to),
            log_dir: update.log_dir.or(self.log_dir),
            server_url: update.server_url.or(self.server_url),
        }
    }
}

/// Returns the base (default) configuration
pub fn base_config(config_path: Option<PathBuf>) -> Config {

    let database_url = config_path.map_or("showroom.db".to_string(), |path| path.join("showroom.db").to_string_lossy().to_string());

    Config {
        database_url,
        listen_addr: "127.0.0.1:3000".to_string(),
        mail_api_url: "https://api.resend.com/emails".to_string(),
        mail_api_key: None,
        mail_from: "Showroom <noreply@showroom.example>".to_string(),
        mail_to: "inquiries@showroom.example".to_string(),
        log_dir: None,
        server_url: None,
    }
}

/// Returns the XDG configuration directory for this application
pub fn get_config_dir_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "showroom", "showroom")
        .map(|proj_dirs| PathBuf::from(proj_dirs.config_dir()))
}

/// Loads configuration from a TOML file
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, String> {
    // if the config path is None, return the default config
    if config_path.is_none() {
            return Ok(ConfigUpdate::default());
        }

    let config_path = config_path.unwrap();

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    match fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<ConfigUpdate>(&content) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", config_path);
                Ok(config)
            },
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                Err(format!("Failed to parse config file: {}", e))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            Err(format!("Failed to read config file: {}", e))
        }
    }
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url,
        listen_addr: args.listen_addr,
        mail_api_url: args.mail_api_url,
        mail_api_key: args.mail_api_key,
        mail_from: args.mail_from,
        mail_to: args.mail_to,
        log_dir: args.log_dir,
        server_url: None,
    }
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: CliArgs) -> Config {
    let mut config_path = get_config_dir_path();
    if config_path.is_none() {
        warn!("Could not determine XDG config directory, skipping config file");
    }

    config_path = config_path.and_then(|path| {
        if !path.exists() {
            info!("Config path not found at {:?}, using defaults", path);
            None
        } else {
            Some(path)
        }
    });

    let base = base_config(config_path.clone());

    // Apply updates in order of increasing precedence
    let config = base
        .apply_update(config_from_file(config_path.map(|p| p.join("config.toml"))).unwrap_or_default())
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: database_url={}, listen_addr={}, notifications={}",
        config.database_url,
        config.listen_addr,
        if config.mail_api_key.is_some() { "on" } else { "off" }
    );

    config
}
