//! Structured request logging with per-request correlation ids
//!
//! Every outgoing request gets a uuid so request, response and failure
//! lines can be tied together in the log file.

use log::{debug, info, warn};
use serde_json::json;
use std::time::{Duration, Instant};

/// Monitoring configuration for the request logger
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub request_logging: bool,
    pub performance_metrics: bool,
    pub log_level: LogLevel,
    pub slow_request_threshold: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            request_logging: true,
            performance_metrics: true,
            log_level: LogLevel::Debug,
            slow_request_threshold: Duration::from_secs(3),
        }
    }
}

/// Structured logger for outgoing requests
#[derive(Debug, Clone)]
pub struct ApiLogger {
    config: MonitoringConfig,
}

/// Context for a single request
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique id for this request
    pub correlation_id: String,
    /// Logical operation (search, person, page, reference, catalog)
    pub operation: String,
    pub url: String,
    pub start_time: Instant,
}

impl ApiLogger {
    pub fn new(config: MonitoringConfig) -> Self {
        Self { config }
    }

    /// Start tracking a request and log it
    pub fn start_request(&self, operation: &str, url: &str) -> RequestContext {
        let context = RequestContext {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            url: url.to_string(),
            start_time: Instant::now(),
        };

        if self.config.request_logging && self.should_log(LogLevel::Debug) {
            let log_data = json!({
                "event": "http_request",
                "correlation_id": context.correlation_id,
                "operation": context.operation,
                "method": "GET",
                "url": context.url,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            debug!("HTTP Request: {}", log_data);
        }

        context
    }

    /// Log the response status and duration
    pub fn log_response(&self, context: &RequestContext, status_code: u16) {
        let duration = context.elapsed();

        if self.config.request_logging && self.should_log(LogLevel::Debug) {
            let log_data = json!({
                "event": "http_response",
                "correlation_id": context.correlation_id,
                "operation": context.operation,
                "status_code": status_code,
                "duration_ms": duration.as_millis(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            debug!("HTTP Response: {}", log_data);
        }

        if self.config.performance_metrics
            && duration > self.config.slow_request_threshold
            && self.should_log(LogLevel::Warn)
        {
            let log_data = json!({
                "event": "performance_warning",
                "correlation_id": context.correlation_id,
                "operation": context.operation,
                "url": context.url,
                "duration_ms": duration.as_millis(),
                "threshold_ms": self.config.slow_request_threshold.as_millis(),
            });

            warn!("Slow Request Detected: {}", log_data);
        }
    }

    /// Log a failed request. Missing records are expected during ID walks
    /// and only logged at info.
    pub fn log_failure(&self, context: &RequestContext, status_code: Option<u16>, error: &str) {
        let log_data = json!({
            "event": "http_failure",
            "correlation_id": context.correlation_id,
            "operation": context.operation,
            "url": context.url,
            "status_code": status_code,
            "error": error,
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if status_code == Some(404) {
            if self.should_log(LogLevel::Info) {
                info!("HTTP Not Found: {}", log_data);
            }
        } else if self.should_log(LogLevel::Warn) {
            warn!("HTTP Failure: {}", log_data);
        }
    }

    fn should_log(&self, level: LogLevel) -> bool {
        match (self.config.log_level, level) {
            (LogLevel::Error, LogLevel::Error) => true,
            (LogLevel::Warn, LogLevel::Error | LogLevel::Warn) => true,
            (LogLevel::Info, LogLevel::Error | LogLevel::Warn | LogLevel::Info) => true,
            (LogLevel::Debug, LogLevel::Error | LogLevel::Warn | LogLevel::Info | LogLevel::Debug) => true,
            (LogLevel::Trace, _) => true,
            _ => false,
        }
    }
}

impl RequestContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_creation() {
        let logger = ApiLogger::new(MonitoringConfig::default());
        let first = logger.start_request("person", "https://swapi.dev/api/people/1/");
        let second = logger.start_request("person", "https://swapi.dev/api/people/2/");

        assert_eq!(first.operation, "person");
        assert_eq!(first.url, "https://swapi.dev/api/people/1/");
        assert_ne!(first.correlation_id, second.correlation_id);
    }

    #[test]
    fn test_log_level_filtering() {
        let logger = ApiLogger::new(MonitoringConfig {
            log_level: LogLevel::Warn,
            ..MonitoringConfig::default()
        });

        assert!(logger.should_log(LogLevel::Error));
        assert!(logger.should_log(LogLevel::Warn));
        assert!(!logger.should_log(LogLevel::Info));
        assert!(!logger.should_log(LogLevel::Debug));
        assert!(!logger.should_log(LogLevel::Trace));
    }
}
