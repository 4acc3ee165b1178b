//! Demo configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! standard walkthrough.
//!
//! ```toml
//! counter_calls = [4, 3]
//! lookups = [3, 4]
//!
//! [[animals]]
//! id = 1
//! name = "chicken"
//! verse = "cluck"
//!
//! [[updates]]
//! id = 4
//! verse = "bark"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, RegistryError};
use crate::registry::{seed_animals, Animal, Registry};

/// One registry instance gets created per update, and this is applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseUpdate {
    pub id: u32,
    pub verse: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How many times to call each counter; one counter per entry.
    pub counter_calls: Vec<u32>,
    pub animals: Vec<Animal>,
    pub updates: Vec<VerseUpdate>,
    pub lookups: Vec<u32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            counter_calls: vec![4, 3],
            animals: seed_animals(),
            updates: vec![
                VerseUpdate {
                    id: 4,
                    verse: "bark".to_string(),
                },
                VerseUpdate {
                    id: 4,
                    verse: "buzz".to_string(),
                },
            ],
            lookups: vec![3, 4],
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        self.registry().map(|_| ())
    }

    /// Builds a fresh, independent registry from the configured seed.
    pub fn registry(&self) -> Result<Registry, RegistryError> {
        Registry::with_animals(self.animals.clone())
    }
}
