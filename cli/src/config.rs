use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::BotType;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tic_tac_toe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CliConfig {
    /// Menu number to start with instead of asking.
    pub default_mode: Option<u8>,
    pub seed: Option<u64>,
    pub verbose: bool,
    pub ai_vs_ai: AiVsAiConfig,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(mode) = self.default_mode
            && !(1..=4).contains(&mode)
        {
            return Err(format!("default_mode must be between 1 and 4, got {}", mode));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct AiVsAiConfig {
    pub x: BotType,
    pub o: BotType,
}

impl Default for AiVsAiConfig {
    fn default() -> Self {
        Self {
            x: BotType::Random,
            o: BotType::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tic_tac_toe_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = CliConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: CliConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("default_mode: 3\nai_vs_ai:\n  x: Optimal\n  o: Random\n")
            .unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.default_mode, Some(3));
        assert_eq!(config.ai_vs_ai.x, BotType::Optimal);
        assert_eq!(config.seed, None);
        assert!(!config.verbose);

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let config = get_config_manager(Some(&get_temp_file_path()))
            .get_config()
            .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_out_of_range_mode_fails_validation() {
        let config = CliConfig {
            default_mode: Some(5),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_saved_config_is_read_back() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        let config = CliConfig {
            default_mode: Some(4),
            seed: Some(1234),
            verbose: true,
            ai_vs_ai: AiVsAiConfig {
                x: BotType::Optimal,
                o: BotType::Optimal,
            },
        };
        manager.set_config(&config).unwrap();

        let reread = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(reread, config);

        std::fs::remove_file(&file_path).ok();
    }
}
