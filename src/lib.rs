//! # libmodem - Cellular Modem Application Runtime
//!
//! Runtime glue for applications running on cellular modem modules: it
//! classifies the asynchronous unsolicited result codes (URCs) pushed by the
//! radio layer, gates application startup on network data-readiness, and
//! drives a blocking HTTP client (GET/POST/PUT/PATCH/DELETE plus file
//! upload) over a fixed-capacity response buffer. This library is designed
//! for embedded systems and supports `no_std` environments.
//!
//! ## Features
//!
//! ### URC Event Classification
//! - Closed sum type covering SIM, network, call, SMS, voltage, FOTA and
//!   STK notifications
//! - Nested sub-states for SIM card and call progress
//! - Non-blocking classifier safe to run in a notification context
//!
//! ### Network Readiness Gating
//! - Bounded one-second polling of the data-readiness predicate
//! - Immediate return when the network is already usable
//!
//! ### HTTP Client Orchestration
//! - Request and upload descriptors mirroring the radio vendor's HTTP API
//! - Fixed-capacity response buffer, zeroed before every exchange
//! - Diagnostics pass exercising every method over plain and secure
//!   transports, and a shell-invocable file upload command
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libmodem = "0.1.0"
//! ```
//!
//! ### Classifying radio events
//!
//! The radio interface layer holds one [`urc::EventSink`] for the process
//! lifetime and pushes every notification through it:
//!
//! ```rust
//! use libmodem::log::Level;
//! use libmodem::urc::{Classifier, SimState, Urc};
//!
//! fn console_log(level: Level, message: core::fmt::Arguments) {
//!     # let _ = (level, message);
//!     // Forward to UART, RTT, or the host console
//! }
//!
//! let mut classifier = Classifier::new();
//! classifier.set_log_function(console_log);
//! classifier.classify(&Urc::SimCard(SimState::Ready));
//! ```
//!
//! ### Issuing an HTTP request
//!
//! ```rust,no_run
//! use libmodem::network::http::{Client, Method};
//! # use libmodem::network::http::{HttpTransport, Request, ResponseBuffer, Upload};
//! # struct ModemHttp;
//! # impl HttpTransport for ModemHttp {
//! #     fn submit(&mut self, _m: Method, _r: &Request<'_>, resp: &mut ResponseBuffer) -> i32 {
//! #         resp.append(b"OK");
//! #         0
//! #     }
//! #     fn upload(&mut self, _u: &Upload<'_>, _resp: &mut ResponseBuffer) -> i32 {
//! #         0
//! #     }
//! # }
//!
//! let mut client = Client::new(ModemHttp);
//! let body = client.execute(Method::Get, "http://httpbin.org/get", None)?;
//! # let _ = body;
//! # Ok::<(), libmodem::network::error::Error>(())
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Cellular modem application cores (OpenCPU-style firmware)
//! - Embedded microcontrollers driving an external modem
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Severity levels and the process-supplied log sink type.
pub mod log;

/// Unsolicited result code (URC) event model and classifier.
///
/// Models the notifications pushed by the radio interface layer as a closed
/// sum type and routes each one to its documented log branch.
pub mod urc;

/// Network abstraction layer: platform traits, readiness gating, and the
/// HTTP request/upload executor.
pub mod network;

/// System utilities for embedded devices.
///
/// Contains the command shell used to expose user-invocable commands such
/// as `upload`.
pub mod system;

/// Diagnostics: the bounded HTTP exercise pass and the file upload command.
pub mod diag;
