use crate::error::{Result, ViewError};
use crate::serializer::{IdPrefix, SerializerOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "viewkit.json";
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_TEMPLATE_EXT: &str = ".html";

/// Configuration for the view helpers, stored in viewkit.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    /// Directory partial templates are loaded from
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Extension appended to partial names that have none (e.g. ".html")
    #[serde(default = "default_template_ext")]
    pub template_ext: String,

    /// Encode structured attribute values as JSON under any attribute name
    #[serde(default)]
    pub structured_values_as_json: bool,

    /// Fully-qualified type name used to namespace `id` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,

    /// Escape every non-alphanumeric character in attribute values
    #[serde(default)]
    pub strict_attribute_escaping: bool,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATES_DIR)
}

fn default_template_ext() -> String {
    DEFAULT_TEMPLATE_EXT.to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            template_ext: default_template_ext(),
            structured_values_as_json: false,
            id_prefix: None,
            strict_attribute_escaping: false,
        }
    }
}

impl ViewConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: ViewConfig = serde_json::from_str(&content)?;
            config.validate()?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            config
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };

        // Relative template dirs are relative to the config dir
        if config.templates_dir.is_relative() {
            config.templates_dir = config_dir.join(&config.templates_dir);
        }

        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Set the template extension (normalizes to start with a dot)
    pub fn set_template_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.template_ext = ext.to_string();
        } else {
            self.template_ext = format!(".{}", ext);
        }
    }

    /// Serializer switches derived from this config.
    pub fn serializer_options(&self) -> SerializerOptions {
        SerializerOptions {
            structured_values_as_json: self.structured_values_as_json,
            id_prefix: self.id_prefix.as_deref().map(IdPrefix::from_type_name),
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.id_prefix {
            if IdPrefix::from_type_name(prefix).as_str().is_empty() {
                return Err(ViewError::Config(format!(
                    "id_prefix '{}' has no type name segment",
                    prefix
                )));
            }
        }
        Ok(())
    }
}
