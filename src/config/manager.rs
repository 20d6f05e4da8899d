use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;

pub const DEFAULT_LOCAL_URL: &str = "http://localhost:5000";
pub const DEFAULT_REMOTE_URL: &str = "https://libretranslate.com";
pub const DEFAULT_SHORT_THRESHOLD: usize = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_LOCAL_URL: &str = "LT_LOCAL_URL";
pub const ENV_DEFAULT_URL: &str = "LT_DEFAULT_URL";
pub const ENV_DISABLE_LOCAL_SHORT: &str = "LT_DISABLE_LOCAL_SHORT";
pub const ENV_SHORT_THRESHOLD: &str = "LT_LOCAL_SHORT_THRESHOLD";
pub const ENV_TIMEOUT: &str = "LT_TIMEOUT";
pub const ENV_API_KEY: &str = "LT_API_KEY";

/// Settings in the `[lt]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LtConfig {
    /// Local LibreTranslate server preferred for short texts.
    pub local_url: Option<String>,
    /// Default (usually remote) LibreTranslate server.
    pub default_url: Option<String>,
    /// Set to `false` to never prefer the local server.
    pub local_short: Option<bool>,
    /// Maximum word count routed to the local server.
    pub short_threshold: Option<usize>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// API key sent with every request.
    pub api_key: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/enes/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub lt: LtConfig,
}

/// Raw values of the `LT_*` environment variables, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub local_url: Option<String>,
    pub default_url: Option<String>,
    pub disable_local_short: Option<String>,
    pub short_threshold: Option<String>,
    pub timeout: Option<String>,
    pub api_key: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment snapshot from an arbitrary lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            local_url: get(ENV_LOCAL_URL),
            default_url: get(ENV_DEFAULT_URL),
            disable_local_short: get(ENV_DISABLE_LOCAL_SHORT),
            short_threshold: get(ENV_SHORT_THRESHOLD),
            timeout: get(ENV_TIMEOUT),
            api_key: get(ENV_API_KEY),
        }
    }

    fn local_short_disabled(&self) -> bool {
        matches!(
            self.disable_local_short.as_deref(),
            Some("1" | "true" | "True")
        )
    }
}

/// CLI overrides that take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub local_url: Option<String>,
    pub default_url: Option<String>,
    pub no_local_short: bool,
    pub short_threshold: Option<usize>,
    pub timeout_secs: Option<u64>,
}

/// Resolved, immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub local_url: String,
    pub default_url: String,
    pub local_short_enabled: bool,
    pub short_threshold: usize,
    pub timeout: Duration,
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_url: DEFAULT_LOCAL_URL.to_string(),
            default_url: DEFAULT_REMOTE_URL.to_string(),
            local_short_enabled: true,
            short_threshold: DEFAULT_SHORT_THRESHOLD,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

/// Resolves configuration from CLI options, environment and config file.
///
/// Priority (highest first): CLI options, environment, config file,
/// built-in defaults. Local preference is off if any source disables it.
///
/// # Errors
///
/// Returns an error if a numeric environment value cannot be parsed or the
/// timeout is zero.
pub fn resolve_config(
    options: &ResolveOptions,
    env: &EnvConfig,
    file: &ConfigFile,
) -> Result<Config> {
    let defaults = Config::default();

    let local_url = options
        .local_url
        .clone()
        .or_else(|| env.local_url.clone())
        .or_else(|| file.lt.local_url.clone())
        .unwrap_or(defaults.local_url);

    let default_url = options
        .default_url
        .clone()
        .or_else(|| env.default_url.clone())
        .or_else(|| file.lt.default_url.clone())
        .unwrap_or(defaults.default_url);

    let local_short_enabled = !options.no_local_short
        && !env.local_short_disabled()
        && file.lt.local_short.unwrap_or(true);

    let env_threshold = env
        .short_threshold
        .as_deref()
        .map(|v| parse_env::<usize>(ENV_SHORT_THRESHOLD, v))
        .transpose()?;

    let short_threshold = options
        .short_threshold
        .or(env_threshold)
        .or(file.lt.short_threshold)
        .unwrap_or(defaults.short_threshold);

    let env_timeout = env
        .timeout
        .as_deref()
        .map(|v| parse_env::<u64>(ENV_TIMEOUT, v))
        .transpose()?;

    let timeout_secs = options
        .timeout_secs
        .or(env_timeout)
        .or(file.lt.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    if timeout_secs == 0 {
        bail!("Invalid timeout: must be at least 1 second");
    }

    let api_key = env.api_key.clone().or_else(|| file.lt.api_key.clone());

    Ok(Config {
        local_url,
        default_url,
        local_short_enabled,
        short_threshold,
        timeout: Duration::from_secs(timeout_secs),
        api_key,
    })
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {name}: '{value}' is not a non-negative integer"))
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/enes/config.toml`
    /// or `~/.config/enes/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file; a missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConfigFile::default()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file: {}", self.config_path.display())
                });
            }
        };

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        EnvConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config =
            resolve_config(&ResolveOptions::default(), &EnvConfig::default(), &ConfigFile::default())
                .unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.local_url, "http://localhost:5000");
        assert_eq!(config.short_threshold, 200);
        assert!(config.local_short_enabled);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env(&[
            (ENV_LOCAL_URL, "http://10.0.0.2:5000"),
            (ENV_SHORT_THRESHOLD, "50"),
            (ENV_TIMEOUT, "5"),
            (ENV_API_KEY, "key"),
        ]);
        let config =
            resolve_config(&ResolveOptions::default(), &env, &ConfigFile::default()).unwrap();

        assert_eq!(config.local_url, "http://10.0.0.2:5000");
        assert_eq!(config.short_threshold, 50);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_disable_local_short_values() {
        for value in ["1", "true", "True"] {
            let env = env(&[(ENV_DISABLE_LOCAL_SHORT, value)]);
            let config =
                resolve_config(&ResolveOptions::default(), &env, &ConfigFile::default()).unwrap();
            assert!(!config.local_short_enabled, "{value} should disable");
        }

        for value in ["0", "false", "TRUE", "yes"] {
            let env = env(&[(ENV_DISABLE_LOCAL_SHORT, value)]);
            let config =
                resolve_config(&ResolveOptions::default(), &env, &ConfigFile::default()).unwrap();
            assert!(config.local_short_enabled, "{value} should not disable");
        }
    }

    #[test]
    fn test_no_local_short_flag_disables() {
        let options = ResolveOptions {
            no_local_short: true,
            ..ResolveOptions::default()
        };
        let config = resolve_config(&options, &EnvConfig::default(), &ConfigFile::default()).unwrap();
        assert!(!config.local_short_enabled);
    }

    #[test]
    fn test_invalid_env_threshold_is_error() {
        let env = env(&[(ENV_SHORT_THRESHOLD, "lots")]);
        let err = resolve_config(&ResolveOptions::default(), &env, &ConfigFile::default())
            .unwrap_err();
        assert!(err.to_string().contains(ENV_SHORT_THRESHOLD));

        let env = self::env(&[(ENV_SHORT_THRESHOLD, "-1")]);
        assert!(resolve_config(&ResolveOptions::default(), &env, &ConfigFile::default()).is_err());
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let options = ResolveOptions {
            timeout_secs: Some(0),
            ..ResolveOptions::default()
        };
        assert!(resolve_config(&options, &EnvConfig::default(), &ConfigFile::default()).is_err());
    }

    #[test]
    fn test_empty_env_value_counts_as_unset() {
        let env = env(&[(ENV_LOCAL_URL, "")]);
        assert!(env.local_url.is_none());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(manager.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[lt]
local_url = "http://lt.lan:5000"
default_url = "https://lt.example.com"
local_short = false
short_threshold = 25
timeout_secs = 10
api_key = "abc"
"#,
        )
        .unwrap();

        let file = ConfigManager::with_path(&path).load().unwrap();
        assert_eq!(file.lt.local_url.as_deref(), Some("http://lt.lan:5000"));
        assert_eq!(file.lt.local_short, Some(false));
        assert_eq!(file.lt.short_threshold, Some(25));

        let config =
            resolve_config(&ResolveOptions::default(), &EnvConfig::default(), &file).unwrap();
        assert_eq!(config.default_url, "https://lt.example.com");
        assert!(!config.local_short_enabled);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[lt]\nshort_threshold = \"many\"\n").unwrap();

        let err = ConfigManager::with_path(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
