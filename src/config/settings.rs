use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Project-level configuration, loaded from `.pwvault.toml`.
///
/// Every field has a sensible default so pwvault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file path, relative to the directory the config was loaded from.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Number of hex groups in generated passwords.
    #[serde(default = "default_generator_groups")]
    pub generator_groups: usize,

    /// Random bytes per group in generated passwords.
    #[serde(default = "default_generator_group_bytes")]
    pub generator_group_bytes: usize,

    /// How many times to ask for the master password before giving up.
    #[serde(default = "default_password_attempts")]
    pub password_attempts: u32,
}

/// Upper bound for `generator_groups`.
pub const MAX_GENERATOR_GROUPS: usize = 64;

/// Upper bound for `generator_group_bytes`.
pub const MAX_GENERATOR_GROUP_BYTES: usize = 64;

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "vault.pwmanager".to_string()
}

fn default_generator_groups() -> usize {
    crate::generator::DEFAULT_GROUPS
}

fn default_generator_group_bytes() -> usize {
    crate::generator::DEFAULT_GROUP_BYTES
}

fn default_password_attempts() -> u32 {
    3
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            generator_groups: default_generator_groups(),
            generator_group_bytes: default_generator_group_bytes(),
            password_attempts: default_password_attempts(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".pwvault.toml";

    /// Load settings from `<dir>/.pwvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would make the CLI unusable or panic later.
    fn validate(&self) -> Result<()> {
        if self.password_attempts == 0 {
            return Err(VaultError::Config(
                "password_attempts must be at least 1".into(),
            ));
        }

        for (name, value, max) in [
            ("generator_groups", self.generator_groups, MAX_GENERATOR_GROUPS),
            (
                "generator_group_bytes",
                self.generator_group_bytes,
                MAX_GENERATOR_GROUP_BYTES,
            ),
        ] {
            if value == 0 || value > max {
                return Err(VaultError::Config(format!(
                    "{name} must be between 1 and {max}, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the vault file path against `dir`.
    ///
    /// Example: `dir/vault.pwmanager`
    pub fn vault_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.vault_file)
    }

    /// Generate a password with the configured shape.
    pub fn generate_password(&self) -> String {
        crate::generator::generate_with(self.generator_groups, self.generator_group_bytes)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
