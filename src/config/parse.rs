//! Declaration file parsing and discovery

use crate::config::types::CommandConfig;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default declaration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["kubo.yml", "kubo.yaml"];

/// Find the declaration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the declaration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Parse a declaration file from a path
pub fn parse_config_file(path: &Path) -> ConfigResult<CommandConfig> {
    log::info!("Loading command declarations from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse declarations from a string
pub fn parse_config(yaml: &str) -> ConfigResult<CommandConfig> {
    let config: CommandConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse declarations with automatic file discovery
pub fn parse_config_auto() -> ConfigResult<(CommandConfig, PathBuf)> {
    let config_path = find_config_file()?;
    let config = parse_config_file(&config_path)?;
    Ok((config, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SIMPLE: &str = r#"
name: app
commands:
  - name: hello
    run: hello
"#;

    #[test]
    fn test_parse_simple_config() {
        let config = parse_config(SIMPLE).unwrap();
        assert_eq!(config.name, "app");
        assert_eq!(config.commands.len(), 1);
        assert_eq!(config.commands[0].run.as_deref(), Some("hello"));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_config("name: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("kubo.yml");
        fs::write(&config_path, SIMPLE).unwrap();

        let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_yaml_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("kubo.yaml");
        fs::write(&config_path, SIMPLE).unwrap();

        let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("kubo.yml");
        let sub_dir = temp_dir.path().join("subdir");

        fs::create_dir(&sub_dir).unwrap();
        fs::write(&config_path, SIMPLE).unwrap();

        let found = find_config_file_from(sub_dir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_config_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_config_file_from(temp_dir.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_parse_config_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = parse_config_file(&temp_dir.path().join("absent.yml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
