//! # Keel Core
//!
//! The component base every Keel component is built on: a category and name
//! for diagnostics, a logger and telemetry handle that can be injected after
//! construction, and unique ID generation with a random-UUID fallback.

pub mod base;
pub mod category;
pub mod config;
pub mod errors;
pub mod id;
pub mod logger;
pub mod telemetry;

#[cfg(test)]
mod test_support;

// Re-export commonly used types and traits
pub use base::{Component, ComponentBase, ComponentOptions};
pub use category::Category;
pub use config::ComponentSettings;
pub use errors::{CoreError, CoreResult};
pub use id::IdGenerator;
pub use logger::{ConsoleLogger, LogLevel, Logger, NoopLogger};
pub use telemetry::{ExperimentalTelemetry, Telemetry, TelemetrySettings, Tracer, TracingTelemetry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::base::*;
    pub use crate::category::*;
    pub use crate::config::*;
    pub use crate::errors::*;
    pub use crate::id::*;
    pub use crate::logger::*;
    pub use crate::telemetry::*;
}
