//! Configuration file management and resolution.

mod manager;

pub use manager::{
    Config, ConfigFile, ConfigManager, DEFAULT_LOCAL_URL, DEFAULT_REMOTE_URL,
    DEFAULT_SHORT_THRESHOLD, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_DEFAULT_URL,
    ENV_DISABLE_LOCAL_SHORT, ENV_LOCAL_URL, ENV_SHORT_THRESHOLD, ENV_TIMEOUT, EnvConfig,
    LtConfig, ResolveOptions, resolve_config,
};
