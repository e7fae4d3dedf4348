//! Describe command implementation

use crate::config::KeelctlConfig;
use crate::output::{self, ComponentDescription};
use keel_core::errors::CoreError;
use tracing::info;

/// Handle the `describe` command
pub fn handle_describe_command(config: &KeelctlConfig) -> Result<(), CoreError> {
    let description = describe(config);
    info!("Describing {} component", description.category);
    output::display_description(&description, &config.format)
}

/// Build the component and capture how it is wired
pub fn describe(config: &KeelctlConfig) -> ComponentDescription {
    let base = config.build_component();
    let view = base.experimental_telemetry();

    ComponentDescription {
        category: base.category().to_string(),
        name: base.name().map(str::to_string),
        logger: base.logger().name().to_string(),
        telemetry: base.telemetry().map(|t| t.name().to_string()),
        telemetry_enabled: view.map_or(false, |v| v.is_enabled),
        id_strategy: config.id_strategy.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::{Category, TelemetrySettings};

    #[test]
    fn test_describe_defaults() {
        let description = describe(&KeelctlConfig::default());
        assert_eq!(description.category, "LLM");
        assert_eq!(description.name, None);
        assert_eq!(description.logger, "LLM");
        assert_eq!(description.telemetry, None);
        assert!(!description.telemetry_enabled);
        assert_eq!(description.id_strategy, "uuid");
    }

    #[test]
    fn test_describe_with_telemetry() {
        let mut config = KeelctlConfig::default();
        config.component = config
            .component
            .with_category(Category::Agent)
            .with_name("planner")
            .with_telemetry(TelemetrySettings::default());

        let description = describe(&config);
        assert_eq!(description.logger, "AGENT - planner");
        assert_eq!(description.telemetry.as_deref(), Some("keel"));
        assert!(description.telemetry_enabled);
    }
}
