//! The blocking request/upload executor.

use crate::log::{Level, LogFn};
use crate::network::error::Error;
use crate::network::http::{Body, HttpTransport, Method, Request, ResponseBuffer, Upload};

/// Header block attached to every request issued by [`Client::execute`].
pub const REQUEST_HEADERS: &str = "custom-header: some_value\r\n";

/// Blocking HTTP client over an [`HttpTransport`].
///
/// The client owns the response buffer its exchanges write into. Every
/// operation takes `&mut self`, so at most one request or upload can be in
/// flight per client, and the buffer cannot be shared by two concurrent
/// exchanges.
#[derive(Debug)]
pub struct Client<T: HttpTransport> {
    transport: T,
    buffer: ResponseBuffer,
    log_fn: Option<LogFn>,
}

impl<T: HttpTransport> Client<T> {
    /// Create a client over the given transport handle.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: ResponseBuffer::new(),
            log_fn: None,
        }
    }

    /// Install the log sink request outcomes are reported through.
    pub fn set_log_function(&mut self, log_fn: LogFn) {
        self.log_fn = Some(log_fn);
    }

    /// The underlying transport handle.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport handle.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Perform one HTTP exchange and return the response body.
    ///
    /// The request carries the fixed [`REQUEST_HEADERS`] line, no client
    /// certificates, and header capture disabled. The response buffer is
    /// zeroed before submission. A non-zero transport status comes back as
    /// [`Error::Transport`] without assuming a response body is present;
    /// no retry is attempted at this layer. Success and failure are both
    /// reported through the log sink with method, URL, and status.
    pub fn execute(
        &mut self,
        method: Method,
        url: &str,
        body: Option<Body<'_>>,
    ) -> Result<&[u8], Error> {
        if url.is_empty() {
            return Err(Error::InvalidAddress);
        }

        self.log(
            Level::Info,
            format_args!("Sending HTTP {} request on {}", method.as_str(), url),
        );

        let request = Request {
            url,
            headers: REQUEST_HEADERS,
            certs: None,
            recv_headers: false,
            body,
        };

        self.buffer.clear();
        let status = self.transport.submit(method, &request, &mut self.buffer);
        if status != 0 {
            self.log(
                Level::Error,
                format_args!("HTTP {} request failed: {}", method.as_str(), status),
            );
            return Err(Error::Transport(status));
        }

        self.report_response("HTTP");
        Ok(self.buffer.contents())
    }

    /// Perform one file-upload exchange and return the response body.
    ///
    /// Shares the buffer discipline and status mapping of
    /// [`execute`](Self::execute).
    pub fn upload(&mut self, upload: &Upload<'_>) -> Result<&[u8], Error> {
        if upload.url.is_empty() {
            return Err(Error::InvalidAddress);
        }

        self.log(
            Level::Info,
            format_args!(
                "Uploading {} to {}",
                upload.meta.filename, upload.url
            ),
        );

        self.buffer.clear();
        let status = self.transport.upload(upload, &mut self.buffer);
        if status != 0 {
            self.log(Level::Error, format_args!("Upload failed: {}", status));
            return Err(Error::Transport(status));
        }

        self.report_response("Upload");
        Ok(self.buffer.contents())
    }

    fn report_response(&self, what: &str) {
        match core::str::from_utf8(self.buffer.contents()) {
            Ok(text) => self.log(
                Level::Info,
                format_args!("{} response ({} bytes): {}", what, self.buffer.len(), text),
            ),
            Err(_) => self.log(
                Level::Info,
                format_args!("{} response ({} bytes)", what, self.buffer.len()),
            ),
        }
    }

    fn log(&self, level: Level, message: core::fmt::Arguments) {
        if let Some(log_fn) = self.log_fn {
            log_fn(level, message);
        }
    }
}
