//! Common error types for network operations

/// A common error type for network operations.
///
/// This enum defines the errors surfaced by the readiness gate and the
/// HTTP client. It is designed to be simple and portable for `no_std`
/// environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The transport returned a non-zero status, carried verbatim. The
    /// client never retries; resilience policy belongs to the caller.
    Transport(i32),
    /// Network data did not become ready within the timeout budget.
    Timeout,
    /// An empty or unusable URL was provided.
    InvalidAddress,
    /// A file path without a final path segment was provided.
    InvalidPath,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(status) => defmt::write!(f, "Transport({})", status),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::InvalidPath => defmt::write!(f, "InvalidPath"),
        }
    }
}
