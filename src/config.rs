use std::path::PathBuf;

use anyhow::Result;

/// Default location of the preference file, relative to the working
/// directory.
const DEFAULT_PREFERENCE_FILE: &str = "preferred-language.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the language preference is persisted.
    pub preference_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            preference_file: std::env::var("PREFERENCE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREFERENCE_FILE)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_preference_file() {
        std::env::remove_var("PREFERENCE_FILE");
        let config = Config::from_env().expect("config");
        assert_eq!(
            config.preference_file,
            PathBuf::from("preferred-language.json")
        );
    }

    #[test]
    #[serial]
    fn test_preference_file_from_env() {
        std::env::set_var("PREFERENCE_FILE", "/tmp/lang.json");
        let config = Config::from_env().expect("config");
        assert_eq!(config.preference_file, PathBuf::from("/tmp/lang.json"));
        std::env::remove_var("PREFERENCE_FILE");
    }
}
