//! Engine configuration from the environment.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;

use super::storage::FileKeyValueStore;

pub const STATE_BACKEND_VAR: &str = "BREWSHEET_STATE_BACKEND";
pub const STATE_PATH_VAR: &str = "BREWSHEET_STATE_PATH";

/// Where per-character local state is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateBackend {
    /// Lost when the process exits
    Memory,
    #[default]
    File,
}

impl FromStr for StateBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => anyhow::bail!("unknown state backend '{}' (expected memory or file)", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub state_backend: StateBackend,
    pub state_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            state_backend: StateBackend::default(),
            state_path: FileKeyValueStore::default_path(),
        }
    }
}

impl EngineConfig {
    /// Load `.env.local` / `.env` from the working directory, then read the
    /// process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        load_dotenv(Path::new("."));
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let state_backend = match var(STATE_BACKEND_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid {}", STATE_BACKEND_VAR))?,
            None => StateBackend::default(),
        };
        let state_path = var(STATE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(FileKeyValueStore::default_path);

        Ok(Self {
            state_backend,
            state_path,
        })
    }
}

fn load_dotenv(root: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_file_backend() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.state_backend, StateBackend::File);
        assert!(config.state_path.ends_with("state.json"));
    }

    #[test]
    fn reads_backend_and_path() {
        let config = EngineConfig::from_lookup(lookup(&[
            (STATE_BACKEND_VAR, " Memory "),
            (STATE_PATH_VAR, "/tmp/sheet-state.json"),
        ]))
        .unwrap();
        assert_eq!(config.state_backend, StateBackend::Memory);
        assert_eq!(config.state_path, PathBuf::from("/tmp/sheet-state.json"));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup(&[
            (STATE_BACKEND_VAR, "  "),
            (STATE_PATH_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let err = EngineConfig::from_lookup(lookup(&[(STATE_BACKEND_VAR, "redis")])).unwrap_err();
        assert!(format!("{:#}", err).contains("redis"));
    }
}
