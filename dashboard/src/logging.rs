//! Browser console logging for the dashboard.

use inventory_core::config::AppConfig;
use inventory_observability::{LogFormat, LogLevel, LogSink, StructuredLogger};
use inventory_router::{use_location, GuardDecision};
use leptos::logging::{error, log, warn};
use leptos::prelude::*;

/// Writes log lines to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Error => error!("{}", line),
            LogLevel::Warn => warn!("{}", line),
            _ => log!("{}", line),
        }
    }
}

/// Root logger for the app. Development builds log debug lines too.
pub fn app_logger(config: &AppConfig) -> StructuredLogger {
    let logger = StructuredLogger::new(ConsoleSink).with_component("dashboard");
    if config.is_production() {
        logger.with_format(LogFormat::Json)
    } else {
        logger.with_min_level(LogLevel::Debug)
    }
}

/// `base` tagged with the component and the route it logs from.
pub fn scoped_logger(base: StructuredLogger, component: &str, route: &str) -> StructuredLogger {
    base.with_component(component).with_route(route)
}

/// The app logger scoped to a component and the current location.
///
/// Call from inside `<Router>`.
pub fn use_logger(component: &str) -> StructuredLogger {
    let base = use_context::<StructuredLogger>()
        .unwrap_or_else(|| StructuredLogger::new(ConsoleSink));
    scoped_logger(base, component, &use_location().pathname.get_untracked())
}

/// Debug line for a guard redirect. Open decisions are not logged.
pub fn log_guard_decision(logger: &StructuredLogger, decision: &GuardDecision) {
    let Some(target) = decision.redirect_target() else {
        return;
    };
    let mut line = logger.debug_builder("Guard redirect").field("target", target);
    if let GuardDecision::RedirectLogin { from } = decision {
        line = line.field("from", from.as_str());
    }
    line.emit();
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::config::Environment;
    use inventory_observability::MemorySink;

    fn debug_logger(sink: &MemorySink) -> StructuredLogger {
        StructuredLogger::new(sink.clone()).with_min_level(LogLevel::Debug)
    }

    #[test]
    fn test_development_logger_includes_debug() {
        let logger = app_logger(&AppConfig::default());
        assert!(logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_production_logger_skips_debug() {
        let config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };
        let logger = app_logger(&config);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_scoped_logger_carries_route() {
        let sink = MemorySink::new();
        let logger = scoped_logger(debug_logger(&sink), "product_detail", "/products/42");

        logger.info("Delete product: 42");

        assert_eq!(
            sink.lines(),
            vec!["[INFO] product_detail: Delete product: 42 @ /products/42"]
        );
    }

    #[test]
    fn test_login_redirect_is_logged_with_origin() {
        let sink = MemorySink::new();
        let logger = scoped_logger(debug_logger(&sink), "protected_route", "/products/42");

        log_guard_decision(
            &logger,
            &GuardDecision::RedirectLogin {
                from: "/products/42".to_string(),
            },
        );

        assert_eq!(
            sink.entries(),
            vec![(
                LogLevel::Debug,
                r#"[DEBUG] protected_route: Guard redirect @ /products/42 | from="/products/42" target="/login""#
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_unauthorized_redirect_is_logged() {
        let sink = MemorySink::new();
        log_guard_decision(&debug_logger(&sink), &GuardDecision::RedirectUnauthorized);
        assert_eq!(sink.lines(), vec![r#"[DEBUG] Guard redirect | target="/unauthorized""#]);
    }

    #[test]
    fn test_open_decision_is_not_logged() {
        let sink = MemorySink::new();
        log_guard_decision(&debug_logger(&sink), &GuardDecision::Open);
        assert!(sink.is_empty());
    }
}
