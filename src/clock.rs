use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};

use crate::error::{ReportError, Result};

pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Supplies the current timestamp already formatted for the report.
pub trait TimeSource {
    fn now_formatted(&self) -> String;
}

/// Local wall-clock time rendered as `DD/MM/YYYY HH:MM`.
pub struct LocalTimeProvider {
    source: fn() -> SystemTime,
}

impl LocalTimeProvider {
    pub fn new() -> Result<Self> {
        Self::with_source(SystemTime::now)
    }

    /// Builds a provider on top of `source`, which is read once up front.
    /// Fails if the source cannot produce a usable wall-clock instant.
    pub fn with_source(source: fn() -> SystemTime) -> Result<Self> {
        let since_epoch = source()
            .duration_since(UNIX_EPOCH)
            .map_err(ReportError::CannotLoadClock)?;

        tracing::debug!(secs = since_epoch.as_secs(), "system clock loaded");

        Ok(Self { source })
    }
}

impl TimeSource for LocalTimeProvider {
    fn now_formatted(&self) -> String {
        DateTime::<Local>::from((self.source)())
            .format(DATE_FORMAT)
            .to_string()
    }
}
