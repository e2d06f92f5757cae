pub mod cli;
pub mod toml_config;

pub use cli::CliArgs;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Effective settings after layering CLI flags over the TOML file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub log_level: String,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
            verbose: false,
        }
    }
}

impl ServerConfig {
    pub fn load(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file.validate()?;

        let config = Self::merge(args, &file);
        config.validate()?;
        Ok(config)
    }

    /// `--verbose` only picks the level when neither the CLI nor the file sets one.
    pub fn merge(args: &CliArgs, file: &TomlConfig) -> Self {
        let defaults = Self::default();
        let fallback_level = if args.verbose {
            VERBOSE_LOG_LEVEL.to_string()
        } else {
            defaults.log_level
        };

        Self {
            bind: args
                .bind
                .clone()
                .or_else(|| file.server.bind.clone())
                .unwrap_or(defaults.bind),
            log_level: args
                .log_level
                .clone()
                .or_else(|| file.logging.level.clone())
                .unwrap_or(fallback_level),
            json_logs: args
                .json_logs
                .or(file.logging.json)
                .unwrap_or(defaults.json_logs),
            verbose: args.verbose,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("bind", &self.bind)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("bind", &self.bind)?;
        validation::validate_one_of("log_level", &self.log_level, &toml_config::LOG_LEVELS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = ServerConfig::load(&CliArgs::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:9000"

[logging]
level = "warn"
"#,
        )
        .unwrap();

        let args = CliArgs {
            bind: Some("127.0.0.1:9100".to_string()),
            ..CliArgs::default()
        };

        let config = ServerConfig::merge(&args, &file);
        assert_eq!(config.bind, "127.0.0.1:9100");
        assert_eq!(config.log_level, "warn");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_load_reads_file_and_validates() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind = \"0.0.0.0:8080\"\n[logging]\njson = true\n")
            .unwrap();

        let args = CliArgs {
            config: Some(temp_file.path().to_string_lossy().to_string()),
            ..CliArgs::default()
        };

        let config = ServerConfig::load(&args).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert!(config.json_logs);
    }

    #[test]
    fn test_verbose_keeps_explicit_level() {
        let args = CliArgs {
            verbose: true,
            log_level: Some("warn".to_string()),
            ..CliArgs::default()
        };
        let config = ServerConfig::merge(&args, &TomlConfig::default());
        assert_eq!(config.log_level, "warn");

        let file = TomlConfig::from_toml_str("[logging]\nlevel = \"error\"\n").unwrap();
        let args = CliArgs {
            verbose: true,
            ..CliArgs::default()
        };
        assert_eq!(ServerConfig::merge(&args, &file).log_level, "error");
    }

    #[test]
    fn test_verbose_raises_default_level() {
        let args = CliArgs {
            verbose: true,
            ..CliArgs::default()
        };
        let config = ServerConfig::merge(&args, &TomlConfig::default());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_cli_can_disable_json_logs_from_file() {
        let file = TomlConfig::from_toml_str("[logging]\njson = true\n").unwrap();

        let args = CliArgs {
            json_logs: Some(false),
            ..CliArgs::default()
        };
        assert!(!ServerConfig::merge(&args, &file).json_logs);
        assert!(ServerConfig::merge(&CliArgs::default(), &file).json_logs);
    }

    #[test]
    fn test_invalid_cli_value_is_rejected() {
        let args = CliArgs {
            log_level: Some("shout".to_string()),
            ..CliArgs::default()
        };
        assert!(ServerConfig::load(&args).is_err());
    }
}
