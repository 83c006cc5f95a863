//! Audit sinks for unexpected conversion failures.

use chrono::{DateTime, Utc};
use log::error;
use std::fmt::Debug;
use std::sync::Mutex;

/// One recorded conversion failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionAudit {
    pub error_class: String,
    pub message: String,
    pub operation: String,
    pub service: String,
    pub element_guid: String,
    pub timestamp: DateTime<Utc>,
}

/// Receiver for conversion failures.
pub trait AuditSink: Debug + Send + Sync {
    fn record_conversion_failure(&self, audit: &ConversionAudit);
}

/// Sink writing each failure to the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAuditSink;

impl AuditSink for LogAuditSink {
    fn record_conversion_failure(&self, audit: &ConversionAudit) {
        error!(
            "Service {} could not convert element {} during {}: {} - {}",
            audit.service, audit.element_guid, audit.operation, audit.error_class, audit.message
        );
    }
}

/// Sink keeping failures in memory, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<ConversionAudit>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded failures.
    pub fn entries(&self) -> Vec<ConversionAudit> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn record_conversion_failure(&self, audit: &ConversionAudit) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(audit.clone());
    }
}
