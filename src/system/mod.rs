//! System utilities for embedded devices.
//!
//! The one utility this application needs is a small command shell: the
//! device exposes user-invocable commands (such as `upload`) over its
//! console port, and the shell parses the line, checks the argument
//! bounds, and dispatches to the registered handler.

/// Command shell interface for embedded systems.
pub mod shell;
