use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to parse YAML config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<BTreeMap<String, u32>, String> = serializer.deserialize("a: [1, 2");
        assert!(result.unwrap_err().starts_with("Failed to parse YAML config"));
    }

    #[test]
    fn test_serialize_writes_mapping() {
        let serializer = YamlConfigSerializer::new();
        let mut map = BTreeMap::new();
        map.insert("seed".to_string(), 5u32);
        assert_eq!(serializer.serialize(&map).unwrap(), "seed: 5\n");
    }
}
