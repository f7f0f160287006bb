//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{num::NonZeroUsize, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{
    CliArgs, Command, CreateArgs, DeleteArgs, GlobalOverrides, ListArgs, ShowArgs,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "blogfront";
const ENV_PREFIX: &str = "BLOGFRONT";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;
const DEFAULT_DELETE_NOTICE_SECS: u64 = 4;
const DEFAULT_CREATE_NOTICE_SECS: u64 = 3;
const DEFAULT_PREVIEW_CHARS: usize = crate::domain::posts::DEFAULT_PREVIEW_CHARS;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
    pub notifications: NotificationSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// How long transient notifications stay visible.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    /// List and card notices (delete success or failure).
    pub delete_ttl: Duration,
    /// Create form outcome message.
    pub create_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub preview_chars: NonZeroUsize,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    logging: RawLoggingSettings,
    notifications: RawNotificationSettings,
    display: RawDisplaySettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(url) = overrides.api_base_url.as_ref() {
            self.api.base_url = Some(url.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            api,
            logging,
            notifications,
            display,
        } = raw;

        Ok(Self {
            api: build_api_settings(api)?,
            logging: build_logging_settings(logging)?,
            notifications: build_notification_settings(notifications)?,
            display: build_display_settings(display)?,
        })
    }
}

fn build_api_settings(api: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let raw_url = api
        .base_url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let base_url = Url::parse(&raw_url)
        .map_err(|err| LoadError::invalid("api.base_url", format!("`{raw_url}`: {err}")))?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "api.base_url",
            format!("unsupported scheme `{}`", base_url.scheme()),
        ));
    }

    Ok(ApiSettings { base_url })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => DEFAULT_LOG_LEVEL,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_notification_settings(
    notifications: RawNotificationSettings,
) -> Result<NotificationSettings, LoadError> {
    let delete_ttl = positive_seconds(
        notifications
            .delete_seconds
            .unwrap_or(DEFAULT_DELETE_NOTICE_SECS),
        "notifications.delete_seconds",
    )?;
    let create_ttl = positive_seconds(
        notifications
            .create_seconds
            .unwrap_or(DEFAULT_CREATE_NOTICE_SECS),
        "notifications.create_seconds",
    )?;

    Ok(NotificationSettings {
        delete_ttl,
        create_ttl,
    })
}

fn build_display_settings(display: RawDisplaySettings) -> Result<DisplaySettings, LoadError> {
    let preview_chars = NonZeroUsize::new(display.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS))
        .ok_or_else(|| {
            LoadError::invalid("display.preview_chars", "must be greater than zero")
        })?;
    Ok(DisplaySettings { preview_chars })
}

fn positive_seconds(value: u64, key: &'static str) -> Result<Duration, LoadError> {
    if value == 0 {
        return Err(LoadError::invalid(key, "must be greater than zero"));
    }
    Ok(Duration::from_secs(value))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawNotificationSettings {
    delete_seconds: Option<u64>,
    create_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDisplaySettings {
    preview_chars: Option<usize>,
}
