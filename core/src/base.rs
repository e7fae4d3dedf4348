//! The component base shared by every Keel component
//!
//! A [`ComponentBase`] carries a category, an optional name, a logger that is
//! always present, an optional telemetry handle and an optional ID generator.
//! Logger, telemetry and generator are usually wired in by the surrounding
//! runtime after construction, so each has a setter that replaces the current
//! value outright.
//!
//! Higher-level components embed a `ComponentBase` and implement [`Component`]
//! to pick up the same surface.

use crate::category::Category;
use crate::config::ComponentSettings;
use crate::id::{self, IdGenerator};
use crate::logger::{ConsoleLogger, Logger};
use crate::telemetry::{ExperimentalTelemetry, Telemetry, TracingTelemetry};
use serde_json::json;
use std::sync::Arc;

/// Shown in diagnostics when a component has no name
const UNNAMED: &str = "unnamed";

/// Construction options for a [`ComponentBase`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentOptions {
    pub category: Option<Category>,
    pub name: Option<String>,
}

impl ComponentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Identity, logging, telemetry and ID generation for one component
pub struct ComponentBase {
    category: Category,
    name: Option<String>,
    logger: Arc<dyn Logger>,
    telemetry: Option<Arc<dyn Telemetry>>,
    id_generator: Option<IdGenerator>,
}

impl ComponentBase {
    /// Create a base with a console logger labelled from category and name
    ///
    /// The logger label is `"<category> - <name>"`, or just `"<category>"`
    /// when no name is given.
    pub fn new(options: ComponentOptions) -> Self {
        let category = options.category.unwrap_or_default();
        let logger = ConsoleLogger::new(logger_label(category, options.name.as_deref()));
        Self {
            category,
            name: options.name,
            logger: Arc::new(logger),
            telemetry: None,
            id_generator: None,
        }
    }

    /// Build a base from settings, applying the log level and any telemetry
    pub fn from_settings(settings: &ComponentSettings) -> Self {
        let logger = ConsoleLogger::new(logger_label(settings.category, settings.name.as_deref()))
            .with_level(settings.log_level);
        let mut base = Self {
            category: settings.category,
            name: settings.name.clone(),
            logger: Arc::new(logger),
            telemetry: None,
            id_generator: None,
        };
        if let Some(telemetry) = &settings.telemetry {
            base.set_telemetry(Arc::new(TracingTelemetry::from_settings(telemetry)));
        }
        base
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Replace the logger
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = logger;
        self.log_update("Logger", self.display_name());
    }

    /// Replace the telemetry handle
    pub fn set_telemetry(&mut self, telemetry: Arc<dyn Telemetry>) {
        self.telemetry = Some(telemetry);
        if let Some(telemetry) = &self.telemetry {
            self.log_update("Telemetry", telemetry.name());
        }
    }

    /// Replace the ID generator
    pub fn set_id_generator(&mut self, generator: IdGenerator) {
        self.id_generator = Some(generator);
        self.log_update("ID generator", self.display_name());
    }

    /// Replace the ID generator with a closure
    pub fn set_id_generator_fn<F>(&mut self, generator: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.set_id_generator(Arc::new(generator));
    }

    /// Produce an identifier from the configured generator, or a random UUID
    ///
    /// A custom generator's output is returned as is, and a panic inside it
    /// propagates to the caller.
    pub fn generate_id(&self) -> String {
        match &self.id_generator {
            Some(generator) => generator(),
            None => id::random_uuid(),
        }
    }

    pub fn has_id_generator(&self) -> bool {
        self.id_generator.is_some()
    }

    pub fn telemetry(&self) -> Option<Arc<dyn Telemetry>> {
        self.telemetry.clone()
    }

    /// Tracer view for downstream consumers, recomputed on every call
    ///
    /// `tracer` comes from the baggage tracer while `is_enabled` reports
    /// whether the primary tracer is present.
    pub fn experimental_telemetry(&self) -> Option<ExperimentalTelemetry> {
        self.telemetry.as_ref().map(|telemetry| ExperimentalTelemetry {
            tracer: telemetry.baggage_tracer(),
            is_enabled: telemetry.tracer().is_some(),
        })
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    fn log_update(&self, what: &str, name: &str) {
        if self.category.is_default() {
            return;
        }
        self.logger.debug(
            &format!("{} updated [component={}] [name={}]", what, self.category, name),
            Some(&json!({ "component": self.category, "name": name })),
        );
    }
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self::new(ComponentOptions::default())
    }
}

impl std::fmt::Debug for ComponentBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentBase")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("logger", &self.logger.name())
            .field("telemetry", &self.telemetry.as_ref().map(|t| t.name().to_string()))
            .field("id_generator", &self.id_generator.is_some())
            .finish()
    }
}

/// Label given to the default logger
fn logger_label(category: Category, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} - {}", category, name),
        None => category.to_string(),
    }
}

/// Extension seam for components built on a [`ComponentBase`]
pub trait Component {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    fn category(&self) -> Category {
        self.base().category()
    }

    fn name(&self) -> Option<&str> {
        self.base().name()
    }

    fn logger(&self) -> &Arc<dyn Logger> {
        self.base().logger()
    }

    fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.base_mut().set_logger(logger);
    }

    fn set_telemetry(&mut self, telemetry: Arc<dyn Telemetry>) {
        self.base_mut().set_telemetry(telemetry);
    }

    fn set_id_generator(&mut self, generator: IdGenerator) {
        self.base_mut().set_id_generator(generator);
    }

    fn generate_id(&self) -> String {
        self.base().generate_id()
    }

    fn telemetry(&self) -> Option<Arc<dyn Telemetry>> {
        self.base().telemetry()
    }

    fn experimental_telemetry(&self) -> Option<ExperimentalTelemetry> {
        self.base().experimental_telemetry()
    }
}

impl Component for ComponentBase {
    fn base(&self) -> &ComponentBase {
        self
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        self
    }
}
