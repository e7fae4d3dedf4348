//! Configuration management for keelctl

use crate::cli::{Cli, OutputFormat};
use figment::{Figment, providers::{Format, Yaml, Env}};
use keel_core::errors::CoreError;
use keel_core::{id, ComponentBase, ComponentSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the built component generates identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs (the component's own fallback)
    #[default]
    Uuid,
    /// `<prefix>-1`, `<prefix>-2`, ...
    Sequential { prefix: String },
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Uuid => write!(f, "uuid"),
            IdStrategy::Sequential { prefix } => write!(f, "sequential ({})", prefix),
        }
    }
}

/// Configuration for keelctl
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeelctlConfig {
    /// Settings for the component under inspection
    pub component: ComponentSettings,
    /// Identifier strategy wired into the component
    pub id_strategy: IdStrategy,
    /// Default output format
    pub format: OutputFormat,
}

impl KeelctlConfig {
    /// Load configuration from defaults, config files and environment
    pub fn load(config_path: &Option<PathBuf>) -> Result<Self, CoreError> {
        let mut figment = Figment::new();

        // Load from default config file if it exists
        let default_config_paths = [
            "keelctl.yaml",
            "keelctl.yml",
            ".keelctl.yaml",
            ".keelctl.yml",
        ];

        for path in &default_config_paths {
            if Path::new(path).exists() {
                figment = figment.merge(Yaml::file(path));
                break;
            }
        }

        // Load from specified config file
        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Yaml::file(path));
            } else {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
        }

        // Environment variables prefixed with KEELCTL_, nested with `__`
        figment = figment.merge(Env::prefixed("KEELCTL_").split("__"));

        figment.extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(category) = args.category {
            self.component.category = category;
        }

        if let Some(ref name) = args.name {
            self.component.name = Some(name.clone());
        }

        if let Some(format) = args.format {
            self.format = format;
        }

        self
    }

    /// Build the component described by this configuration
    pub fn build_component(&self) -> ComponentBase {
        let mut base = ComponentBase::from_settings(&self.component);
        if let IdStrategy::Sequential { prefix } = &self.id_strategy {
            base.set_id_generator(id::sequential(prefix.clone()));
        }
        base
    }
}
