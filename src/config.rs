//! Assistant configuration and the shared command-line argument block.

use std::path::PathBuf;

use clap::Args;

/// Default chat model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Default full-page translation model identifier.
pub const DEFAULT_TRANSLATION_MODEL: &str = "gemini-2.5-pro";

/// Default per-credential request ceiling.
pub const DEFAULT_MAX_REQUESTS_PER_KEY: u32 = 100;

/// Default conversation-history bound.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Startup configuration for the assistant services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    api_keys: Vec<String>,
    max_requests_per_key: u32,
    model: String,
    translation_model: String,
    max_history: usize,
    debug: bool,
    log_api_requests: bool,
}

impl AssistantConfig {
    /// Builds a configuration with explicit values for every field.
    pub fn new(
        api_keys: Vec<String>,
        max_requests_per_key: u32,
        model: String,
        translation_model: String,
        max_history: usize,
        debug: bool,
        log_api_requests: bool,
    ) -> Self {
        Self {
            api_keys,
            max_requests_per_key,
            model,
            translation_model,
            max_history,
            debug,
            log_api_requests,
        }
    }

    /// Credential list for the rotation pool.
    pub fn api_keys(&self) -> &[String] {
        &self.api_keys
    }

    /// How many requests a single credential may serve per process lifetime.
    pub fn max_requests_per_key(&self) -> u32 {
        self.max_requests_per_key
    }

    /// Chat model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Translation model identifier.
    pub fn translation_model(&self) -> &str {
        &self.translation_model
    }

    /// Conversation-history bound (0 disables the bound).
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Whether verbose diagnostics are enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether outbound API requests are logged.
    pub fn log_api_requests(&self) -> bool {
        self.log_api_requests
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            max_requests_per_key: DEFAULT_MAX_REQUESTS_PER_KEY,
            model: DEFAULT_MODEL.to_string(),
            translation_model: DEFAULT_TRANSLATION_MODEL.to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            debug: false,
            log_api_requests: false,
        }
    }
}

/// Service options shared by every binary; flatten into each CLI parser.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// API keys for the generation service, comma separated
    #[arg(long, env = "OURBOOKS_API_KEYS", default_value = "", hide_env_values = true)]
    pub api_keys: String,

    /// Requests allowed per key before rotating to the next one
    #[arg(long, env = "OURBOOKS_MAX_REQUESTS_PER_KEY", default_value_t = DEFAULT_MAX_REQUESTS_PER_KEY)]
    pub max_requests_per_key: u32,

    /// Chat model identifier
    #[arg(long, env = "OURBOOKS_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Translation model identifier
    #[arg(long, env = "OURBOOKS_TRANSLATION_MODEL", default_value = DEFAULT_TRANSLATION_MODEL)]
    pub translation_model: String,

    /// Maximum conversation entries kept in history (0 = unbounded)
    #[arg(long, env = "OURBOOKS_MAX_HISTORY", default_value_t = DEFAULT_MAX_HISTORY)]
    pub max_history: usize,

    /// Directory holding persisted history and translation snapshots
    #[arg(long, env = "OURBOOKS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Enable verbose diagnostics
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Log outbound API requests
    #[arg(long, default_value_t = false)]
    pub log_api_requests: bool,
}

impl ServiceArgs {
    /// Converts the parsed arguments into an [`AssistantConfig`].
    pub fn build_config(&self) -> AssistantConfig {
        AssistantConfig::new(
            self.keys_vec(),
            self.max_requests_per_key,
            self.model.clone(),
            self.translation_model.clone(),
            self.max_history,
            self.debug,
            self.log_api_requests,
        )
    }

    fn keys_vec(&self) -> Vec<String> {
        self.api_keys
            .split(',')
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_keys: &str) -> ServiceArgs {
        ServiceArgs {
            api_keys: api_keys.to_string(),
            max_requests_per_key: DEFAULT_MAX_REQUESTS_PER_KEY,
            model: DEFAULT_MODEL.to_string(),
            translation_model: DEFAULT_TRANSLATION_MODEL.to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            data_dir: PathBuf::from("data"),
            debug: false,
            log_api_requests: false,
        }
    }

    #[test]
    fn key_list_splits_and_trims() {
        let config = args(" key-a, key-b ,, key-c").build_config();
        assert_eq!(config.api_keys(), ["key-a", "key-b", "key-c"]);
    }

    #[test]
    fn empty_key_string_yields_no_keys() {
        let config = args("").build_config();
        assert!(config.api_keys().is_empty());
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = AssistantConfig::default();
        assert_eq!(config.max_requests_per_key(), 100);
        assert_eq!(config.max_history(), 50);
        assert_eq!(config.model(), "gemini-2.5-flash-preview-05-20");
        assert_eq!(config.translation_model(), "gemini-2.5-pro");
        assert!(!config.debug());
    }
}
