//! Configuration loader for Listkeeper.
//!
//! Reads `config.toml` and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed, then applies environment
//! overrides.

use std::path::{Path, PathBuf};

use listkeeper_types::config::AppConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LISTKEEPER_CONFIG";

/// Environment variable overriding `session.secret`.
pub const SESSION_SECRET_ENV: &str = "LISTKEEPER_SESSION_SECRET";

/// Resolve which config file to read.
///
/// Priority:
/// 1. An explicit path (from `--config`)
/// 2. `LISTKEEPER_CONFIG` environment variable
/// 3. Platform config directory (e.g., `~/.config/listkeeper/config.toml`)
/// 4. `./listkeeper.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::config_dir() {
        return dir.join("listkeeper").join("config.toml");
    }

    PathBuf::from("listkeeper.toml")
}

/// Configuration plus any problems met while loading it.
///
/// Loading happens before the tracing subscriber exists (the config chooses
/// the log format), so warnings are returned for the caller to log.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warnings: Vec<String>,
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but cannot be read or parsed, returns the default
///   with a warning.
/// - `LISTKEEPER_SESSION_SECRET` replaces `session.secret` when set and non-empty.
pub async fn load_config(path: &Path) -> LoadedConfig {
    let (config, warning) = read_config_file(path).await;
    LoadedConfig {
        config: apply_env_overrides(config, std::env::var(SESSION_SECRET_ENV).ok()),
        warnings: warning.into_iter().collect(),
    }
}

async fn read_config_file(path: &Path) -> (AppConfig, Option<String>) {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), None);
        }
        Err(err) => {
            return (
                AppConfig::default(),
                Some(format!("Failed to read {}: {err}, using defaults", path.display())),
            );
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => (config, None),
        Err(err) => (
            AppConfig::default(),
            Some(format!("Failed to parse {}: {err}, using defaults", path.display())),
        ),
    }
}

fn apply_env_overrides(mut config: AppConfig, session_secret: Option<String>) -> AppConfig {
    if let Some(secret) = session_secret.filter(|s| !s.is_empty()) {
        config.session.secret = Some(secret);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config(&dir.path().join("absent.toml")).await;
        assert_eq!(loaded.config.server.port, 4567);
        assert!(loaded.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_reads_values_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[server]\nport = 9000\n\n[session]\nidle_timeout_secs = 60\n")
            .await
            .unwrap();

        let (config, warning) = read_config_file(&path).await;

        assert!(warning.is_none());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.session.idle_timeout_secs, 60);
        assert_eq!(config.session.cookie_name, "listkeeper.session");
    }

    #[tokio::test]
    async fn test_malformed_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[server\nport = 'nope'").await.unwrap();

        let loaded = load_config(&path).await;

        assert_eq!(loaded.config.server.port, 4567);
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].starts_with("Failed to parse"));
        assert!(loaded.warnings[0].contains("config.toml"));
    }

    #[tokio::test]
    async fn test_unreadable_path_warns() {
        let dir = tempdir().unwrap();

        // A directory exists but cannot be read as a file.
        let loaded = load_config(dir.path()).await;

        assert_eq!(loaded.config.server.port, 4567);
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].starts_with("Failed to read"));
    }

    #[test]
    fn test_env_secret_overrides_file() {
        let mut config = AppConfig::default();
        config.session.secret = Some("from-file".to_string());

        let config = apply_env_overrides(config, Some("from-env".to_string()));
        assert_eq!(config.session.secret.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_empty_env_secret_is_ignored() {
        let config = apply_env_overrides(AppConfig::default(), Some(String::new()));
        assert!(config.session.secret.is_none());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
