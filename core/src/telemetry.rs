//! Telemetry capability consumed by components
//!
//! A component only holds a [`Telemetry`] handle; it never collects or exports
//! anything itself. [`TracingTelemetry`] is the built-in handle, backed by
//! `tracing` spans.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Something that can open spans
pub trait Tracer: Send + Sync {
    /// Name of the tracer, usually the service it reports for
    fn name(&self) -> &str;

    /// Open a span for `operation`. The caller decides whether to enter it.
    fn start_span(&self, operation: &str) -> tracing::Span;
}

/// Telemetry handle injected into components
pub trait Telemetry: Send + Sync {
    fn name(&self) -> &str;

    /// Primary tracer; `None` when tracing is switched off
    fn tracer(&self) -> Option<Arc<dyn Tracer>>;

    /// Tracer that attaches this handle's baggage to every span it opens
    fn baggage_tracer(&self) -> Arc<dyn Tracer>;
}

/// Derived telemetry view exposed to downstream consumers
///
/// `tracer` is the baggage tracer while `is_enabled` reflects whether the
/// primary tracer exists. The two are not guaranteed to agree.
#[derive(Clone)]
pub struct ExperimentalTelemetry {
    pub tracer: Arc<dyn Tracer>,
    pub is_enabled: bool,
}

impl std::fmt::Debug for ExperimentalTelemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExperimentalTelemetry")
            .field("tracer", &self.tracer.name())
            .field("is_enabled", &self.is_enabled)
            .finish()
    }
}

/// Tracer opening plain `tracing` spans
#[derive(Debug, Clone)]
pub struct TracingTracer {
    name: String,
}

impl TracingTracer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Tracer for TracingTracer {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_span(&self, operation: &str) -> tracing::Span {
        tracing::info_span!(
            "keel",
            tracer = %self.name,
            operation = %operation,
            baggage = tracing::field::Empty
        )
    }
}

/// Tracer wrapping another and recording baggage entries on its spans
#[derive(Clone)]
pub struct BaggageTracer {
    inner: Arc<dyn Tracer>,
    baggage: BTreeMap<String, String>,
}

impl BaggageTracer {
    pub fn new(inner: Arc<dyn Tracer>) -> Self {
        Self {
            inner,
            baggage: BTreeMap::new(),
        }
    }

    /// Add a baggage entry; a repeated key replaces the earlier value
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.baggage.insert(key.into(), value.into());
        self
    }

    pub fn baggage(&self) -> &BTreeMap<String, String> {
        &self.baggage
    }
}

impl Tracer for BaggageTracer {
    fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the inner tracer's span with `baggage` recorded on it.
    ///
    /// The inner span must declare a `baggage` field, as [`TracingTracer`]
    /// spans do; otherwise the entries are dropped.
    fn start_span(&self, operation: &str) -> tracing::Span {
        let span = self.inner.start_span(operation);
        if !self.baggage.is_empty() {
            span.record("baggage", tracing::field::debug(&self.baggage));
        }
        span
    }
}

/// Settings for the built-in telemetry handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    /// Service name reported by the tracers
    pub service_name: String,
    /// When false the primary tracer is absent
    pub enabled: bool,
    /// Entries attached to every span opened by the baggage tracer
    pub baggage: BTreeMap<String, String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: "keel".to_string(),
            enabled: true,
            baggage: BTreeMap::new(),
        }
    }
}

/// Telemetry handle backed by `tracing`
pub struct TracingTelemetry {
    name: String,
    tracer: Option<Arc<dyn Tracer>>,
    baggage_tracer: Arc<dyn Tracer>,
}

impl TracingTelemetry {
    /// Create an enabled handle with no baggage
    pub fn new(service_name: impl Into<String>) -> Self {
        Self::from_settings(&TelemetrySettings {
            service_name: service_name.into(),
            ..TelemetrySettings::default()
        })
    }

    pub fn from_settings(settings: &TelemetrySettings) -> Self {
        let base: Arc<dyn Tracer> = Arc::new(TracingTracer::new(settings.service_name.clone()));
        let baggage_tracer = settings
            .baggage
            .iter()
            .fold(BaggageTracer::new(Arc::clone(&base)), |tracer, (key, value)| {
                tracer.with_entry(key.clone(), value.clone())
            });

        Self {
            name: settings.service_name.clone(),
            tracer: settings.enabled.then_some(base),
            baggage_tracer: Arc::new(baggage_tracer),
        }
    }
}

impl Telemetry for TracingTelemetry {
    fn name(&self) -> &str {
        &self.name
    }

    fn tracer(&self) -> Option<Arc<dyn Tracer>> {
        self.tracer.clone()
    }

    fn baggage_tracer(&self) -> Arc<dyn Tracer> {
        Arc::clone(&self.baggage_tracer)
    }
}
