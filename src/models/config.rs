use crate::error::ConfigError;
use crate::models::GradientColor;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Named gradient definitions
    #[serde(default)]
    pub gradients: HashMap<String, GradientColor>,

    /// Gradient used when no name is given
    #[serde(default = "default_gradient")]
    pub default_gradient: Option<String>,
}

fn default_gradient() -> Option<String> {
    Some("default".to_string())
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration from `path`, or the built-in defaults without one.
    ///
    /// An explicitly named file that cannot be read or parsed is an error,
    /// never silently replaced by the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let config = Self::from_file(path)?;
        tracing::info!(
            path = %path.display(),
            gradients = config.gradients.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Get a gradient by name
    pub fn gradient(&self, name: &str) -> Option<&GradientColor> {
        self.gradients.get(name)
    }

    /// Get the default gradient
    pub fn get_default_gradient(&self) -> Option<&GradientColor> {
        self.default_gradient
            .as_ref()
            .and_then(|name| self.gradients.get(name))
    }

    /// Configured gradient names, sorted
    pub fn gradient_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gradients.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut gradients = HashMap::new();
        gradients.insert(
            "default".to_string(),
            GradientColor::new(vec!["#ff0000".into(), "#0000ff".into()], vec![]),
        );

        Self {
            gradients,
            default_gradient: Some("default".to_string()),
        }
    }
}
