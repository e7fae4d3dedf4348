//! Component settings
//!
//! Plain data; loading from files or the environment is left to the host.

use crate::category::Category;
use crate::logger::LogLevel;
use crate::telemetry::TelemetrySettings;
use serde::{Deserialize, Serialize};

/// Settings used to build a [`crate::base::ComponentBase`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSettings {
    pub category: Category,
    pub name: Option<String>,
    /// Minimum level for the default console logger
    pub log_level: LogLevel,
    /// Built-in telemetry to inject; none when absent
    pub telemetry: Option<TelemetrySettings>,
}

impl ComponentSettings {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetrySettings) -> Self {
        self.telemetry = Some(telemetry);
        self
    }
}
