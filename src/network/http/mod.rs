//! HTTP descriptors and the transport seam.
//!
//! The actual HTTP exchange (connection management, TLS, header framing)
//! is owned by the radio vendor's client and consumed here through
//! [`HttpTransport`]. This module defines the request and upload
//! descriptors handed to that transport and the fixed-capacity
//! [`ResponseBuffer`] every exchange writes into.

mod client;

pub use client::{Client, REQUEST_HEADERS};

use crate::network::error::Error;

/// Capacity of a [`ResponseBuffer`], in bytes.
pub const RESPONSE_CAPACITY: usize = 1024;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// The method name as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Content classification of a request or upload body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    /// `text/plain`
    Text,
    /// `application/x-www-form-urlencoded`
    UrlEncoded,
    /// `application/json`
    Json,
    /// `application/octet-stream`
    Binary,
}

impl MimeType {
    /// The content-type string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Text => "text/plain",
            MimeType::UrlEncoded => "application/x-www-form-urlencoded",
            MimeType::Json => "application/json",
            MimeType::Binary => "application/octet-stream",
        }
    }
}

/// A request body together with its MIME classification.
///
/// A body cannot be supplied without a MIME type, nor the other way
/// around; [`Request::body`] couples them in one option.
#[derive(Debug, Clone, Copy)]
pub struct Body<'a> {
    /// The raw body bytes.
    pub data: &'a [u8],
    /// The body's content classification.
    pub mime: MimeType,
}

/// Descriptor for one HTTP exchange.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    /// Target URL; the transport derives host, port, and TLS use from it.
    pub url: &'a str,
    /// Extra header lines, each terminated with `\r\n`.
    pub headers: &'a str,
    /// Optional client certificate bundle, PEM-encoded.
    pub certs: Option<&'a str>,
    /// Whether response headers are captured into the response buffer.
    pub recv_headers: bool,
    /// Optional body with its MIME type.
    pub body: Option<Body<'a>>,
}

/// Metadata describing the file of an upload.
#[derive(Debug, Clone)]
pub struct FileMeta<'a> {
    /// The name presented to the server: the final segment of
    /// [`filepath`](Self::filepath), never containing a path separator.
    pub filename: &'a str,
    /// Path of the file on the local filesystem.
    pub filepath: &'a str,
    /// Content classification of the file.
    pub mime_type: MimeType,
    /// Free-form content-type override; takes precedence over
    /// [`mime_type`](Self::mime_type) when set.
    pub mime: Option<&'a str>,
    /// Free-form information transmitted alongside the file.
    pub info: &'a str,
    /// Upload timestamp, seconds since the Unix epoch.
    pub timestamp: u64,
}

impl<'a> FileMeta<'a> {
    /// Build metadata for the file at `filepath`.
    ///
    /// The filename is everything after the final `/`. A path without a
    /// `/`, or ending in one, has no final segment and is rejected with
    /// [`Error::InvalidPath`]. The MIME type defaults to
    /// [`MimeType::Binary`] and `info` to empty; callers override the
    /// public fields as needed.
    pub fn for_path(filepath: &'a str, timestamp: u64) -> Result<Self, Error> {
        let (_, filename) = filepath.rsplit_once('/').ok_or(Error::InvalidPath)?;
        if filename.is_empty() {
            return Err(Error::InvalidPath);
        }
        Ok(Self {
            filename,
            filepath,
            mime_type: MimeType::Binary,
            mime: None,
            info: "",
            timestamp,
        })
    }
}

/// Descriptor for one file-upload exchange.
#[derive(Debug, Clone)]
pub struct Upload<'a> {
    /// Target URL of the upload endpoint.
    pub url: &'a str,
    /// Optional client certificate bundle, PEM-encoded.
    pub certs: Option<&'a str>,
    /// Optional extra header lines, each terminated with `\r\n`.
    pub headers: Option<&'a str>,
    /// Metadata of the uploaded file.
    pub meta: FileMeta<'a>,
    /// Transfer timeout in seconds; `0` selects the transport default.
    pub timeout_secs: u32,
}

/// Fixed-capacity store for response bodies.
///
/// One buffer serves every exchange issued through the [`Client`] that
/// owns it. It is zero-filled before each submission so a short response
/// can never expose bytes left over from a longer predecessor.
#[derive(Debug)]
pub struct ResponseBuffer {
    buf: [u8; RESPONSE_CAPACITY],
    len: usize,
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuffer {
    /// Create an empty, zeroed buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; RESPONSE_CAPACITY],
            len: 0,
        }
    }

    /// Zero the backing store and reset the length.
    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    /// Append response bytes, truncating at capacity. Returns how many
    /// bytes were actually stored.
    pub fn append(&mut self, data: &[u8]) -> usize {
        let room = RESPONSE_CAPACITY - self.len;
        let take = data.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&data[..take]);
        self.len += take;
        take
    }

    /// The received response bytes.
    pub fn contents(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of response bytes received.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no response bytes have been received.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity of the backing store.
    pub fn capacity(&self) -> usize {
        RESPONSE_CAPACITY
    }

    /// The entire backing store, including bytes beyond the current
    /// length.
    pub fn raw(&self) -> &[u8; RESPONSE_CAPACITY] {
        &self.buf
    }

    /// Mutable access to the entire backing store, for transport bindings
    /// that hand the buffer to a radio API filling it in place. Callers
    /// record the written length with [`set_len`](Self::set_len).
    pub fn raw_mut(&mut self) -> &mut [u8; RESPONSE_CAPACITY] {
        &mut self.buf
    }

    /// Record how many bytes a transport wrote through
    /// [`raw_mut`](Self::raw_mut), clamped to capacity.
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(RESPONSE_CAPACITY);
    }
}

/// The HTTP transport consumed by this crate, typically a thin binding
/// over the radio vendor's client.
///
/// Both operations block the calling task for the duration of the
/// exchange, write at most [`ResponseBuffer::capacity`] response bytes
/// into `response`, and return the vendor status: `0` for success, any
/// other value verbatim for failure. On failure the transport may leave
/// `response` untouched; callers must not assume a body is present.
pub trait HttpTransport {
    /// Perform one HTTP exchange described by `request`.
    fn submit(
        &mut self,
        method: Method,
        request: &Request<'_>,
        response: &mut ResponseBuffer,
    ) -> i32;

    /// Perform one file-upload exchange described by `upload`.
    fn upload(&mut self, upload: &Upload<'_>, response: &mut ResponseBuffer) -> i32;
}
