//! Global KinderCRM configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{KinderError, KinderResult};
use crate::locale::Locale;

static DEFAULT_DATA_PATH: &str = "~/kindercrm";
static DEFAULT_USER: &str = "default";

/// Prefix for environment overrides, e.g. `KINDERCRM_USER=maestra`
const ENV_PREFIX: &str = "KINDERCRM";

/// Keys accepted by `KinderConfig::set`
pub const SETTINGS: [&str; 5] = ["data_dir", "user", "timezone", "locale", "upcoming_limit"];

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

/// Configuration at ~/.config/kindercrm/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KinderConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,

    /// Whose events to show; each user gets a directory under `data_dir`
    #[serde(default = "default_user")]
    pub user: String,

    /// IANA zone name used as the calendar's local time. System zone when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default)]
    pub locale: Locale,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_limit: Option<usize>,
}

impl Default for KinderConfig {
    fn default() -> Self {
        KinderConfig {
            data_dir: default_data_path(),
            user: default_user(),
            timezone: None,
            locale: Locale::default(),
            upcoming_limit: None,
        }
    }
}

impl KinderConfig {
    pub fn config_path() -> KinderResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KinderError::Config("Could not determine config directory".into()))?
            .join("kindercrm");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out template first if
    /// no config exists yet.
    pub fn load() -> KinderResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load `path` (optional) layered under `KINDERCRM_*` environment variables.
    pub fn load_from(path: &Path) -> KinderResult<Self> {
        let config: KinderConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| KinderError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| KinderError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), user = %config.user, "loaded config");
        Ok(config)
    }

    /// Save the current config to ~/.config/kindercrm/config.toml
    pub fn save(&self) -> KinderResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> KinderResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| KinderError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| KinderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> KinderResult<()> {
        let contents = format!(
            "\
# KinderCRM configuration

# Where event data lives:
# data_dir = \"{}\"

# Whose calendar to open:
# user = \"{}\"

# Calendar timezone (defaults to the system timezone):
# timezone = \"America/Argentina/Buenos_Aires\"

# Labels: \"en\" or \"es\"
# locale = \"es\"

# How many upcoming events to list:
# upcoming_limit = 5
",
            DEFAULT_DATA_PATH, DEFAULT_USER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KinderError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KinderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Change one setting by key, checking the value first.
    ///
    /// An empty value resets optional keys (`timezone`, `upcoming_limit`).
    pub fn set(&mut self, key: &str, value: &str) -> KinderResult<()> {
        let value = value.trim();
        match key {
            "data_dir" => self.data_dir = PathBuf::from(value),
            "user" => {
                if value.is_empty() {
                    return Err(KinderError::Config("user must not be empty".into()));
                }
                self.user = value.to_string();
            }
            "timezone" if value.is_empty() => self.timezone = None,
            "timezone" => {
                value
                    .parse::<Tz>()
                    .map_err(|_| KinderError::Config(format!("Unknown timezone '{}'", value)))?;
                self.timezone = Some(value.to_string());
            }
            "locale" => self.locale = value.parse()?,
            "upcoming_limit" if value.is_empty() => self.upcoming_limit = None,
            "upcoming_limit" => {
                let limit = value.parse::<usize>().map_err(|_| {
                    KinderError::Config(format!("upcoming_limit must be a number, got '{}'", value))
                })?;
                self.upcoming_limit = Some(limit);
            }
            other => {
                return Err(KinderError::Config(format!(
                    "Unknown setting '{}'. Expected one of: {}",
                    other,
                    SETTINGS.join(", ")
                )));
            }
        }

        tracing::debug!(key, value, "config value changed");
        Ok(())
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The configured zone, or the system zone, or UTC if neither can be determined.
    pub fn timezone(&self) -> KinderResult<Tz> {
        if let Some(name) = &self.timezone {
            return name
                .parse::<Tz>()
                .map_err(|_| KinderError::Config(format!("Unknown timezone '{}'", name)));
        }

        match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => Ok(tz),
                Err(_) => {
                    tracing::warn!("system timezone '{name}' is not in the tz database, using UTC");
                    Ok(Tz::UTC)
                }
            },
            Err(e) => {
                tracing::warn!("could not determine system timezone, using UTC: {e}");
                Ok(Tz::UTC)
            }
        }
    }
}
