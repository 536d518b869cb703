//! Unsolicited result code (URC) event model.
//!
//! The radio interface layer (RIL) pushes notifications whenever SIM,
//! network, call, or system state changes. This module models those
//! notifications as the closed [`Urc`] sum type, with nested sub-states for
//! SIM card and call progress, and defines the [`EventSink`] seam the RIL
//! collaborator drives for the lifetime of the process.
//!
//! Raw `(code, value)` pairs as delivered on the wire are decoded with
//! [`Urc::from_raw`]. Codes outside the enumeration decode to `None` and
//! are ignored by the classifier. The incoming-call notification carries a
//! record pointer rather than an integer, so RIL bindings construct
//! [`Urc::IncomingCall`] directly after copying the caller number out of
//! the record.

mod classifier;

pub use classifier::Classifier;

use heapless::String;

/// Maximum length of a caller number captured from a call record.
pub const MAX_NUMBER_LEN: usize = 20;

/// Raw wire values for URC codes and their sub-state parameters.
///
/// The concrete numbering is owned by the RIL firmware; bindings for a
/// specific module remap before handing values to [`Urc::from_raw`].
pub mod codes {
    /// System initialisation progress.
    pub const SYS_INIT_STATE: u32 = 0;
    /// SIM card state change; value decodes via [`super::SimState`].
    pub const SIM_CARD_STATE: u32 = 1;
    /// GSM network registration state.
    pub const GSM_NETWORK_STATE: u32 = 2;
    /// GPRS network registration state.
    pub const GPRS_NETWORK_STATE: u32 = 3;
    /// Phone function (CFUN) state.
    pub const FUNCTION_STATE: u32 = 4;
    /// Incoming voice call; the wire value is a call-record handle.
    pub const INCOMING_CALL: u32 = 5;
    /// Outgoing call progress; value decodes via [`super::CallState`].
    pub const CALL_STATE: u32 = 6;
    /// New SMS arrived; value is the message index.
    pub const NEW_SMS: u32 = 7;
    /// Battery voltage report, in millivolts.
    pub const VOLTAGE: u32 = 8;
    /// Alarm ring.
    pub const ALARM_RING: u32 = 9;
    /// File download status change.
    pub const FILE_DOWNLOAD_STATUS: u32 = 10;
    /// Firmware-over-the-air update started.
    pub const FOTA_STARTED: u32 = 11;
    /// Firmware-over-the-air update finished.
    pub const FOTA_FINISHED: u32 = 12;
    /// Firmware-over-the-air update failed.
    pub const FOTA_FAILED: u32 = 13;
    /// SIM toolkit proactive command response.
    pub const STK_RESPONSE: u32 = 14;

    /// System-init value signalling the SMS subsystem is usable.
    pub const SYS_STATE_SMS_READY: u32 = 2;

    /// SIM card not inserted.
    pub const SIM_STAT_NOT_INSERTED: u32 = 0;
    /// SIM card ready.
    pub const SIM_STAT_READY: u32 = 1;
    /// SIM PIN required.
    pub const SIM_STAT_PIN_REQUIRED: u32 = 2;
    /// SIM PUK required.
    pub const SIM_STAT_PUK_REQUIRED: u32 = 3;
    /// SIM card present but not usable.
    pub const SIM_STAT_NOT_READY: u32 = 4;

    /// Dialed number is busy.
    pub const CALL_STATE_BUSY: u32 = 0;
    /// Dialed number did not answer.
    pub const CALL_STATE_NO_ANSWER: u32 = 1;
    /// Dialed number cannot be reached.
    pub const CALL_STATE_NO_CARRIER: u32 = 2;
    /// No dial tone.
    pub const CALL_STATE_NO_DIALTONE: u32 = 3;
}

/// System initialisation progress reported during boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysInitState {
    /// The SMS subsystem is initialised and usable.
    SmsReady,
    /// Any other initialisation stage, carried verbatim.
    Other(u32),
}

impl SysInitState {
    /// Decode a raw system-init value.
    pub fn from_raw(value: u32) -> Self {
        match value {
            codes::SYS_STATE_SMS_READY => SysInitState::SmsReady,
            other => SysInitState::Other(other),
        }
    }
}

/// SIM card state as reported by the radio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// No SIM card detected.
    NotInserted,
    /// SIM card ready for use.
    Ready,
    /// SIM locked, PIN entry required.
    PinRequired,
    /// SIM blocked, PUK entry required.
    PukRequired,
    /// SIM present but not recognized.
    NotReady,
    /// Unrecognized state value, carried verbatim.
    Other(u32),
}

impl SimState {
    /// Decode a raw SIM state value. Unknown values map to
    /// [`SimState::Other`] so they stay visible to the classifier.
    pub fn from_raw(value: u32) -> Self {
        match value {
            codes::SIM_STAT_NOT_INSERTED => SimState::NotInserted,
            codes::SIM_STAT_READY => SimState::Ready,
            codes::SIM_STAT_PIN_REQUIRED => SimState::PinRequired,
            codes::SIM_STAT_PUK_REQUIRED => SimState::PukRequired,
            codes::SIM_STAT_NOT_READY => SimState::NotReady,
            other => SimState::Other(other),
        }
    }
}

/// Progress of an outgoing voice call that did not connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// The dialed number is busy.
    Busy,
    /// The dialed number did not answer.
    NoAnswer,
    /// The dialed number cannot be reached.
    NoCarrier,
    /// No dial tone on the line.
    NoDialtone,
}

impl CallState {
    /// Decode a raw call state value.
    ///
    /// Unknown values yield `None`: the radio layer may report vendor
    /// states this application does not react to, and those are dropped
    /// without a log line. This intentionally differs from
    /// [`SimState::from_raw`], which keeps unknown values visible.
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            codes::CALL_STATE_BUSY => Some(CallState::Busy),
            codes::CALL_STATE_NO_ANSWER => Some(CallState::NoAnswer),
            codes::CALL_STATE_NO_CARRIER => Some(CallState::NoCarrier),
            codes::CALL_STATE_NO_DIALTONE => Some(CallState::NoDialtone),
            _ => None,
        }
    }
}

/// Caller information copied out of a RIL call record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfo {
    /// The caller's number.
    pub number: String<MAX_NUMBER_LEN>,
}

impl CallInfo {
    /// Build a `CallInfo` from a caller number, truncating at
    /// [`MAX_NUMBER_LEN`] characters.
    pub fn new(number: &str) -> Self {
        let mut copy = String::new();
        for ch in number.chars() {
            if copy.push(ch).is_err() {
                break;
            }
        }
        Self { number: copy }
    }
}

/// A notification pushed by the radio interface layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Urc {
    /// System initialisation progress.
    SysInit(SysInitState),
    /// SIM card state change.
    SimCard(SimState),
    /// GSM network registration state, reported verbatim.
    GsmNetwork(u32),
    /// GPRS network registration state.
    GprsNetwork(u32),
    /// Phone function (CFUN) state.
    FunctionState(u32),
    /// Incoming voice call with caller information.
    IncomingCall(CallInfo),
    /// Outgoing call progress.
    Call(CallState),
    /// New SMS arrived at the given index.
    NewSms(u32),
    /// Battery voltage in millivolts.
    Voltage(u32),
    /// Alarm ring.
    AlarmRing,
    /// File download status change.
    FileDownload(u32),
    /// Firmware update started.
    FotaStarted,
    /// Firmware update finished.
    FotaFinished,
    /// Firmware update failed.
    FotaFailed,
    /// SIM toolkit proactive command response.
    StkResponse(u32),
}

impl Urc {
    /// Decode a raw `(code, value)` pair as delivered by the radio layer.
    ///
    /// Returns `None` for codes outside the enumeration, for call-state
    /// values the application does not handle, and for the incoming-call
    /// code (its wire value is a record handle, not an integer; bindings
    /// construct [`Urc::IncomingCall`] themselves).
    pub fn from_raw(code: u32, value: u32) -> Option<Self> {
        match code {
            codes::SYS_INIT_STATE => Some(Urc::SysInit(SysInitState::from_raw(value))),
            codes::SIM_CARD_STATE => Some(Urc::SimCard(SimState::from_raw(value))),
            codes::GSM_NETWORK_STATE => Some(Urc::GsmNetwork(value)),
            codes::GPRS_NETWORK_STATE => Some(Urc::GprsNetwork(value)),
            codes::FUNCTION_STATE => Some(Urc::FunctionState(value)),
            codes::INCOMING_CALL => None,
            codes::CALL_STATE => CallState::from_raw(value).map(Urc::Call),
            codes::NEW_SMS => Some(Urc::NewSms(value)),
            codes::VOLTAGE => Some(Urc::Voltage(value)),
            codes::ALARM_RING => Some(Urc::AlarmRing),
            codes::FILE_DOWNLOAD_STATUS => Some(Urc::FileDownload(value)),
            codes::FOTA_STARTED => Some(Urc::FotaStarted),
            codes::FOTA_FINISHED => Some(Urc::FotaFinished),
            codes::FOTA_FAILED => Some(Urc::FotaFailed),
            codes::STK_RESPONSE => Some(Urc::StkResponse(value)),
            _ => None,
        }
    }
}

/// The push seam for radio notifications.
///
/// The RIL collaborator holds exactly one sink for the process lifetime and
/// invokes it from its notification-delivery context whenever state
/// changes. Implementations must return promptly and must not block.
pub trait EventSink {
    /// Deliver one notification.
    fn on_event(&mut self, urc: &Urc);
}
