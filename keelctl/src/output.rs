//! Output formatting utilities for keelctl

use crate::cli::OutputFormat;
use colored::*;
use keel_core::errors::CoreError;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Snapshot of how a component is wired
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDescription {
    pub category: String,
    pub name: Option<String>,
    pub logger: String,
    pub telemetry: Option<String>,
    pub telemetry_enabled: bool,
    pub id_strategy: String,
}

#[derive(Tabled)]
struct DescriptionRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl ComponentDescription {
    fn rows(&self) -> Vec<DescriptionRow> {
        vec![
            DescriptionRow { field: "category", value: self.category.clone() },
            DescriptionRow { field: "name", value: self.name.clone().unwrap_or_else(|| "-".to_string()) },
            DescriptionRow { field: "logger", value: self.logger.clone() },
            DescriptionRow { field: "telemetry", value: self.telemetry.clone().unwrap_or_else(|| "-".to_string()) },
            DescriptionRow { field: "telemetry enabled", value: self.telemetry_enabled.to_string() },
            DescriptionRow { field: "id strategy", value: self.id_strategy.clone() },
        ]
    }
}

/// Render a component description in the requested format
pub fn render_description(description: &ComponentDescription, format: &OutputFormat) -> Result<String, CoreError> {
    match format {
        OutputFormat::Table => Ok(Table::new(description.rows()).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(description)?),
    }
}

/// Display a component description
pub fn display_description(description: &ComponentDescription, format: &OutputFormat) -> Result<(), CoreError> {
    if *format == OutputFormat::Table {
        println!("{}", "Component".bold());
    }
    println!("{}", render_description(description, format)?);
    Ok(())
}

/// Display generated identifiers, one per line
pub fn display_ids(ids: &[String]) {
    for id in ids {
        println!("{}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentDescription {
        ComponentDescription {
            category: "AGENT".to_string(),
            name: Some("planner".to_string()),
            logger: "AGENT - planner".to_string(),
            telemetry: None,
            telemetry_enabled: false,
            id_strategy: "uuid".to_string(),
        }
    }

    #[test]
    fn test_render_table() {
        let table = render_description(&sample(), &OutputFormat::Table).unwrap();
        assert!(table.contains("AGENT - planner"));
        assert!(table.contains("id strategy"));
    }

    #[test]
    fn test_render_json() {
        let json = render_description(&sample(), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category"], "AGENT");
        assert_eq!(value["telemetry"], serde_json::Value::Null);
        assert_eq!(value["telemetry_enabled"], false);
    }
}
