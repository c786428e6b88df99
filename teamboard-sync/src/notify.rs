/// User-visible notification seam
///
/// Every success and failure outcome the stores produce is reported through a
/// [`Notifier`]: a fire-and-forget call that takes a short title, a longer
/// message, and a severity flag. The call never blocks and returns nothing;
/// the stores do not care whether anyone is listening.
///
/// Two implementations ship with the crate: [`TracingNotifier`] emits
/// structured log events, and [`MemoryNotifier`] records notices so tests can
/// assert on exactly what the user would have seen.

use std::sync::Mutex;

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, e.g. a mutation succeeded
    Normal,

    /// Something went wrong and the user should notice
    Destructive,
}

/// One user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short title, e.g. "Success" or "Error"
    pub title: String,

    /// Longer human-readable message
    pub message: String,

    /// Presentation severity
    pub severity: Severity,
}

impl Notice {
    /// A normal-severity success notice
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            title: "Success".to_string(),
            message: message.into(),
            severity: Severity::Normal,
        }
    }

    /// A destructive-severity error notice
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            title: "Error".to_string(),
            message: message.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Sink for user-visible notices
pub trait Notifier: Send + Sync {
    /// Delivers one notice; must not block
    fn notify(&self, notice: Notice);
}

/// Notifier that forwards notices to the tracing subscriber
///
/// Destructive notices become `error!` events, everything else `info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Destructive => {
                tracing::error!(title = %notice.title, "{}", notice.message)
            }
            Severity::Normal => {
                tracing::info!(title = %notice.title, "{}", notice.message)
            }
        }
    }
}

/// Notifier that records every notice in memory
///
/// Used by the integration tests to assert on notification behavior.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    /// Creates an empty recording notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices delivered so far, in order
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Number of notices delivered so far
    pub fn len(&self) -> usize {
        self.notices.lock().unwrap().len()
    }

    /// True when nothing has been notified
    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_notice_shape() {
        let notice = Notice::success("Team created successfully!");
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.severity, Severity::Normal);
    }

    #[test]
    fn test_error_notice_shape() {
        let notice = Notice::error("connection reset");
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.severity, Severity::Destructive);
    }

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        assert!(notifier.is_empty());

        notifier.notify(Notice::success("one"));
        notifier.notify(Notice::error("two"));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "one");
        assert_eq!(notices[1].severity, Severity::Destructive);
    }
}
