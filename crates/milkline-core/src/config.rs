//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Delay between a customer submission and the scripted reply, in ms.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Seed for opener / quick-fact selection. Unset means seed from entropy;
    /// set it for reproducible demo runs.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_reply_delay_ms() -> u64 {
    750
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load `config.yaml` from `dir`, falling back to defaults (still with
    /// env overrides) when the file doesn't exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.yaml");
        if config_path.is_file() {
            Self::load(&config_path)
        } else {
            let mut config = Config::default();
            config.apply_env_overrides()?;
            Ok(config)
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(ms) = std::env::var("MILKLINE_REPLY_DELAY_MS") {
            self.reply_delay_ms = ms
                .parse()
                .context("MILKLINE_REPLY_DELAY_MS must be an integer")?;
        }
        if let Ok(seed) = std::env::var("MILKLINE_SEED") {
            self.rng_seed = Some(seed.parse().context("MILKLINE_SEED must be an integer")?);
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "{{}}").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.reply_delay_ms, 750);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "reply_delay_ms: 10\nrng_seed: 42").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.reply_delay_ms, 10);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.reply_delay_ms, 750);
    }

    #[test]
    fn test_garbage_config_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "reply_delay_ms: [not, a, number]").unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }
}
