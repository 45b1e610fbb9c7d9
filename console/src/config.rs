use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::MarkAssignment;

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_NAME_LENGTH: usize = 32;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_name: String,
    #[serde(default = "default_computer_name")]
    pub computer_name: String,
    #[serde(default = "default_human_mark")]
    pub human_mark: MarkAssignment,
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_human_mark() -> MarkAssignment {
    MarkAssignment::X
}

fn validate_name(field: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LENGTH
        ));
    }
    Ok(())
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_name("player_name", &self.player_name)?;
        validate_name("computer_name", &self.computer_name)?;
        if self.player_name == self.computer_name {
            return Err("player_name and computer_name must differ".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            computer_name: default_computer_name(),
            human_mark: default_human_mark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("player_name: Alex\n").unwrap();
        assert_eq!(config.player_name, "Alex");
        assert_eq!(config.computer_name, "Computer");
        assert_eq!(config.human_mark, MarkAssignment::X);
    }

    #[test]
    fn test_validation_rejects_bad_names() {
        let mut config = Config::default();
        config.player_name = "   ".to_string();
        assert!(config.validate().is_err());

        config.player_name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(config.validate().is_err());

        config.player_name = "Computer".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let manager = get_config_manager(Some(&get_temp_file_path()));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        let config = Config {
            player_name: "Alex".to_string(),
            computer_name: "Deep Thought".to_string(),
            human_mark: MarkAssignment::Random,
        };

        assert!(manager.set_config(&config).is_ok());

        let fresh_manager = get_config_manager(Some(&file_path));
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_file_content_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("player_name: \"\"\n").unwrap();

        let manager = get_config_manager(Some(&file_path));
        let result = manager.get_config();
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Config validation error"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        let mut config = Config::default();
        config.computer_name = String::new();

        assert!(manager.set_config(&config).is_err());
        assert!(!std::path::Path::new(&file_path).exists());
    }
}
