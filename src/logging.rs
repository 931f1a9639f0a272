use std::fmt;

/// Session-scoped logging interface.
///
/// `LabLog` is obtained from [`Lab::log`](crate::Lab::log) and is
/// lifetime-bound to the lab it came from. Every event carries the lab's
/// `session_id` so several classroom sessions can share one subscriber.
///
/// Record passwords are redacted when logged because
/// [`Secret`](crate::Secret) formats as `[REDACTED]`.
#[derive(Debug, Clone, Copy)]
pub struct LabLog<'a> {
    session_id: &'a str,
}

impl<'a> LabLog<'a> {
    /// Only `Lab` creates loggers.
    pub(crate) fn new(session_id: &'a str) -> Self {
        Self { session_id }
    }

    /// Returns the session ID attached to every event.
    pub fn session_id(&self) -> &str {
        self.session_id
    }

    /// Logs an info-level message with the session ID.
    ///
    /// ```no_run
    /// # use injection_lab::Lab;
    /// let lab = Lab::new("room-101");
    /// lab.log().info(format_args!("class started with {} records", lab.records().len()));
    /// ```
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(session_id = %self.session_id, "{}", args);
    }

    /// Logs a warning-level message with the session ID.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(session_id = %self.session_id, "{}", args);
    }

    /// Logs a debug-level message with the session ID.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(session_id = %self.session_id, "{}", args);
    }
}
