//! Opaque key-value secrets provider.
//!
//! Secret values are only ever inspected for presence; no code path in
//! this crate prints, logs or serializes them.

pub mod status;

pub use status::{EnvFlags, compute_status};

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

/// Read-only access to locally stored secrets.
pub trait SecretsProvider {
    fn get(&self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Secrets loaded once from a JSON key-value file.
///
/// A missing file yields an empty provider; integrations simply show as
/// unavailable.
#[derive(Default)]
pub struct FileSecrets {
    values: IndexMap<String, String>,
}

impl FileSecrets {
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read secrets from `{}`", path.display()));
            }
        };
        let values = serde_json::from_str(&content)
            .with_context(|| format!("malformed secrets file `{}`", path.display()))?;
        Ok(Self { values })
    }
}

impl SecretsProvider for FileSecrets {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// In-memory provider for tests.
#[derive(Default)]
pub struct MemorySecrets {
    values: IndexMap<String, String>,
}

impl MemorySecrets {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SecretsProvider for MemorySecrets {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_secrets_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let secrets = FileSecrets::load(&dir.path().join("secrets.json")).unwrap();
        assert!(!secrets.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_file_secrets_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.json");
        std::fs::write(&path, r#"{"OPENAI_API_KEY": "sk-test"}"#).unwrap();

        let secrets = FileSecrets::load(&path).unwrap();
        assert!(secrets.contains("OPENAI_API_KEY"));
        assert!(!secrets.contains("GA4_PROPERTY_ID"));
    }

    #[test]
    fn test_file_secrets_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(FileSecrets::load(&path).is_err());
    }
}
