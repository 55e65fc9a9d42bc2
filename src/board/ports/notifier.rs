//! Notification port towards the view layer.

/// Sink for the transient, user-visible toasts the board emits.
///
/// Implementations render however the host UI renders; the board only
/// distinguishes confirmations from failures (failures get the destructive
/// styling).
pub trait BoardNotifier: Send + Sync {
    /// Shows a confirmation toast.
    fn notify_success(&self, message: &str);

    /// Shows a failure toast.
    fn notify_error(&self, message: &str);
}
