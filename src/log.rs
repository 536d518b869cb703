//! Logging sink shared by the URC classifier, the HTTP client, and the
//! diagnostics runner.
//!
//! The library never prints by itself. Components that report hold an
//! optional [`LogFn`] installed by the application, in the same way the
//! shell routes its output through an output function. Messages are handed
//! over as [`core::fmt::Arguments`] so the sink decides where (and whether)
//! to render them without the library allocating format buffers.

/// Severity of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Conditions that leave the modem unusable (missing SIM, transport
    /// failures).
    Error,
    /// Conditions the application may want to react to (PIN required, call
    /// not connected).
    Warn,
    /// Routine state reports (network state, battery voltage, responses).
    Info,
}

/// Function signature for log sinks.
///
/// The application installs one of these per component via the component's
/// `set_log_function`. The sink is invoked synchronously from whatever
/// context produced the message, including the URC notification context, so
/// it must not block.
///
/// # Examples
///
/// ```rust
/// use libmodem::log::{Level, LogFn};
///
/// let uart_log: LogFn = |level, message| {
///     # let _ = (level, message);
///     // write!(uart, "[{:?}] {}\r\n", level, message)
/// };
/// ```
pub type LogFn = fn(Level, core::fmt::Arguments);

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Level::Error => defmt::write!(f, "Error"),
            Level::Warn => defmt::write!(f, "Warn"),
            Level::Info => defmt::write!(f, "Info"),
        }
    }
}
