//! The severity-tagged progress event stream a driver consumes.
//!
//! This is a distinct channel from the `log` facade used elsewhere in the
//! crate: the facade is unordered, implementor-facing diagnostics, while
//! [`LogEvent`] is the ordered, documented, user-facing narration of a run.

use std::fmt;

/// Severity of a single [`LogEvent`], mirroring the reference UI's color tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Phase,
    Secret,
    Value,
    Time,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Phase => "phase",
            Severity::Secret => "secret",
            Severity::Value => "value",
            Severity::Time => "time",
        };
        f.write_str(s)
    }
}

/// One emitted progress message.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub message: String,
    pub severity: Severity,
}

impl LogEvent {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        LogEvent {
            message: message.into(),
            severity,
        }
    }
}

/// The sink a driver installs to receive progress events, invoked
/// synchronously and in emission order.
pub type Sink<'a> = dyn FnMut(LogEvent) + 'a;

pub(crate) fn emit(sink: &mut Sink<'_>, severity: Severity, message: impl Into<String>) {
    sink(LogEvent::new(message, severity));
}
