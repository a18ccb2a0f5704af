//! Structured logging with page context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::sink::{LogSink, StderrSink};

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Logical source, e.g. `product_form`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Route path the entry was logged from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] ", self.level);

        if let Some(ref component) = self.component {
            s.push_str(&format!("{}: ", component));
        }
        s.push_str(&self.message);

        if let Some(ref route) = self.route {
            s.push_str(&format!(" @ {}", route));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Timestamp as RFC 3339 with millisecond precision.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

/// Structured logger with page context.
///
/// Cloning is cheap; clones share the sink.
#[derive(Clone)]
pub struct StructuredLogger {
    component: Option<String>,
    route: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("component", &self.component)
            .field("route", &self.route)
            .field("min_level", &self.min_level)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new(StderrSink)
    }
}

impl StructuredLogger {
    /// Create a logger writing to `sink`.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            component: None,
            route: None,
            min_level: LogLevel::Info,
            format: LogFormat::Human,
            sink: Arc::new(sink),
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether an entry at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Log at info level with fields.
    pub fn info_with(&self, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(v.to_string())))
            .collect();
        self.log(LogLevel::Info, message, fields);
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            fields,
            timestamp: Utc::now(),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        self.sink.write(level, &output);
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_human_format_with_context() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone())
            .with_component("product_detail")
            .with_route("/products/42");

        logger.info_builder("Delete product").field("id", "42").emit();

        assert_eq!(
            sink.lines(),
            vec![r#"[INFO] product_detail: Delete product @ /products/42 | id="42""#]
        );
    }

    #[test]
    fn test_json_format() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone())
            .with_format(LogFormat::Json)
            .with_component("product_form");

        logger.info_builder("Create product").field_bool("edit", false).emit();

        let line = &sink.lines()[0];
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "Create product");
        assert_eq!(json["component"], "product_form");
        assert_eq!(json["edit"], false);
        assert!(json.get("route").is_none());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_min_level_filters() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone()).with_min_level(LogLevel::Warn);

        logger.debug("hidden");
        logger.info("hidden");
        logger.warn("shown");
        logger.error("shown too");

        assert_eq!(sink.lines().len(), 2);
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn test_info_with_fields() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone());

        logger.info_with("Search", &[("query", &"iphone"), ("page", &2)]);

        assert_eq!(sink.lines()[0], r#"[INFO] Search | page="2" query="iphone""#);
    }

    #[test]
    fn test_clones_share_sink() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone());
        let scoped = logger.clone().with_component("layout");

        logger.info("a");
        scoped.info("b");

        assert_eq!(sink.lines(), vec!["[INFO] a", "[INFO] layout: b"]);
    }

    #[test]
    fn test_level_parse_and_order() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Trace < LogLevel::Error);
    }
}
