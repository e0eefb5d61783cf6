//! User-facing notification seam.

/// Severity of a notice, mapped to toast styling by the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something went wrong; the user should retry or correct input.
    Error,
    /// Neutral information, e.g. the verification-pending notice.
    Info,
    /// A completed action worth celebrating.
    Success,
}

/// Fire-and-forget notification sink.
///
/// Implemented by the app shell (toast layer, terminal printer, test
/// recorder); no acknowledgment is expected or awaited.
pub trait Notifier {
    /// Show a notice. `title` and `body` pairs for validation failures are
    /// fixed by [`crate::ValidationFailure`].
    fn notify(&self, kind: NoticeKind, title: &str, body: &str);
}
