//! The event-classifying sink.
//!
//! [`Classifier`] is the default [`EventSink`]: it routes every
//! notification to a log line with a severity matching its meaning, and
//! tracks the one piece of state the application cares about at this layer
//! (whether the SMS subsystem has come up). It performs no blocking work
//! and takes no policy decisions: answering or rejecting calls, reacting
//! to voltage readings, and SMS retrieval all belong to the application.

use crate::log::{Level, LogFn};
use crate::urc::{CallState, EventSink, SimState, SysInitState, Urc};

/// Classifies radio notifications into log branches.
///
/// Runs in (or near) the notification-delivery context, so every branch is
/// a plain match plus at most one call into the installed log sink.
/// Without a sink the classifier is a no-op apart from the SMS-ready flag.
#[derive(Debug)]
pub struct Classifier {
    log_fn: Option<LogFn>,
    sms_ready: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with no log sink installed.
    pub const fn new() -> Self {
        Self {
            log_fn: None,
            sms_ready: false,
        }
    }

    /// Install the log sink notifications are reported through.
    pub fn set_log_function(&mut self, log_fn: LogFn) {
        self.log_fn = Some(log_fn);
    }

    /// Whether the radio layer has reported the SMS subsystem usable.
    pub fn sms_ready(&self) -> bool {
        self.sms_ready
    }

    /// Decode and classify a raw `(code, value)` pair.
    ///
    /// Pairs that do not decode (unknown codes as well as unhandled
    /// call-state values) are ignored without a log line.
    pub fn classify_raw(&mut self, code: u32, value: u32) {
        if let Some(urc) = Urc::from_raw(code, value) {
            self.classify(&urc);
        }
    }

    /// Route one notification to its log branch.
    pub fn classify(&mut self, urc: &Urc) {
        match urc {
            Urc::SysInit(SysInitState::SmsReady) => {
                // Ready for SMS
                self.sms_ready = true;
            }
            Urc::SysInit(SysInitState::Other(_)) => {}
            Urc::SimCard(state) => match state {
                SimState::NotInserted => {
                    self.log(Level::Error, format_args!("SIM card not inserted!"));
                }
                SimState::Ready => {
                    self.log(Level::Info, format_args!("SIM card ready"));
                }
                SimState::PinRequired => {
                    self.log(Level::Warn, format_args!("SIM PIN required!"));
                }
                SimState::PukRequired => {
                    self.log(Level::Warn, format_args!("SIM PUK required!"));
                }
                SimState::NotReady => {
                    self.log(Level::Error, format_args!("SIM card not recognized!"));
                }
                SimState::Other(value) => {
                    self.log(Level::Error, format_args!("SIM ERROR: {}", value));
                }
            },
            Urc::GsmNetwork(state) => {
                self.log(Level::Info, format_args!("GSM network state: {}", state));
            }
            Urc::GprsNetwork(_) => {}
            Urc::FunctionState(_) => {}
            Urc::IncomingCall(info) => {
                // Answer/hang-up policy is the application's call, not ours.
                self.log(
                    Level::Info,
                    format_args!("Incoming voice call from: {}", info.number),
                );
            }
            Urc::Call(state) => match state {
                CallState::Busy => {
                    self.log(Level::Warn, format_args!("The number you dialed is busy now"));
                }
                CallState::NoAnswer => {
                    self.log(
                        Level::Warn,
                        format_args!("The number you dialed has no answer"),
                    );
                }
                CallState::NoCarrier => {
                    self.log(
                        Level::Warn,
                        format_args!("The number you dialed cannot be reached"),
                    );
                }
                CallState::NoDialtone => {
                    self.log(Level::Warn, format_args!("No dial tone"));
                }
            },
            Urc::NewSms(index) => {
                // Retrieval of the message body happens elsewhere.
                self.log(Level::Info, format_args!("New SMS ({})", index));
            }
            Urc::Voltage(millivolts) => {
                // Always informational; thresholding is the caller's job.
                self.log(Level::Info, format_args!("VBatt voltage: {}", millivolts));
            }
            Urc::AlarmRing
            | Urc::FileDownload(_)
            | Urc::FotaStarted
            | Urc::FotaFinished
            | Urc::FotaFailed
            | Urc::StkResponse(_) => {}
        }
    }

    fn log(&self, level: Level, message: core::fmt::Arguments) {
        if let Some(log_fn) = self.log_fn {
            log_fn(level, message);
        }
    }
}

impl EventSink for Classifier {
    fn on_event(&mut self, urc: &Urc) {
        self.classify(urc);
    }
}
