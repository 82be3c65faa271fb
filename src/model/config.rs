use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "ZENI_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const ENV_CHAT_MODEL: &str = "CHAT_MODEL";
const ENV_SYLLABUS_MODEL: &str = "SYLLABUS_MODEL";
const ENV_CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

/// Model used for both chat replies and syllabus extraction unless overridden
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Model overrides from the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub chat: Option<String>,
    #[serde(default)]
    pub syllabus: Option<String>,
}

/// Cross-origin policy from the config file
///
/// An empty list allows any origin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub models: ModelConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub openai_api_key: Option<String>,
    pub chat_model: String,
    pub syllabus_model: String,
    /// Origins allowed to call the API from a browser, empty means any
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            openai_api_key: None,
            chat_model: DEFAULT_MODEL.to_string(),
            syllabus_model: DEFAULT_MODEL.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    ///
    /// Environment variables take precedence over the file.
    pub fn from_env() -> Self {
        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file settings with variables from `env`
    fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = env("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let host = env("HOST").unwrap_or(defaults.host);

        let openai_api_key = env(ENV_OPENAI_API_KEY).filter(|k| !k.trim().is_empty());

        let chat_model = env(ENV_CHAT_MODEL)
            .or(file.models.chat)
            .unwrap_or(defaults.chat_model);
        let syllabus_model = env(ENV_SYLLABUS_MODEL)
            .or(file.models.syllabus)
            .unwrap_or(defaults.syllabus_model);

        let allowed_origins = match env(ENV_CORS_ALLOWED_ORIGINS) {
            Some(list) => split_origins(&list),
            None => file.cors.allowed_origins,
        };

        Self {
            port,
            host,
            openai_api_key,
            chat_model,
            syllabus_model,
            allowed_origins,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents, path),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config(contents: &str, path: &Path) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Comma-separated origins, `*` alone means any
fn split_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_model_overrides() {
        let yaml = "models:\n  chat: gpt-4o-mini\n";
        let cf = Config::parse_config(yaml, Path::new("test.yaml")).unwrap();
        assert_eq!(cf.models.chat.as_deref(), Some("gpt-4o-mini"));
        assert!(cf.models.syllabus.is_none());
    }

    #[test]
    fn test_empty_and_invalid_files() {
        let cf = Config::parse_config("   \n", Path::new("empty.yaml")).unwrap();
        assert!(cf.models.chat.is_none());

        assert!(Config::parse_config("models: [unclosed", Path::new("bad.yaml")).is_none());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.chat_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_env_overrides_file_models() {
        let yaml = "models:\n  chat: gpt-4o-mini\n  syllabus: gpt-4o\n";
        let file = Config::parse_config(yaml, Path::new("test.yaml")).unwrap();

        let config = Config::resolve(file, env_from(&[("CHAT_MODEL", "gpt-4.1")]));
        assert_eq!(config.chat_model, "gpt-4.1");
        assert_eq!(config.syllabus_model, "gpt-4o");
    }

    #[test]
    fn test_resolve_defaults_without_env_or_file() {
        let config = Config::resolve(ConfigFile::default(), env_from(&[]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.syllabus_model, DEFAULT_MODEL);
        assert!(config.openai_api_key.is_none());
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = Config::resolve(
            ConfigFile::default(),
            env_from(&[("OPENAI_API_KEY", "  "), ("PORT", "not-a-port")]),
        );
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_cors_origins_from_file_and_env() {
        let yaml = "cors:\n  allowed_origins:\n    - https://app.zeni.study\n";
        let file = Config::parse_config(yaml, Path::new("test.yaml")).unwrap();

        let config = Config::resolve(file.clone(), env_from(&[]));
        assert_eq!(config.allowed_origins, vec!["https://app.zeni.study"]);

        let config = Config::resolve(
            file.clone(),
            env_from(&[(
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000, https://zeni.study,",
            )]),
        );
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://zeni.study"]
        );

        let config = Config::resolve(file, env_from(&[("CORS_ALLOWED_ORIGINS", "*")]));
        assert!(config.allowed_origins.is_empty());
    }
}
