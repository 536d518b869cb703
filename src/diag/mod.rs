//! Diagnostics for the HTTP path.
//!
//! [`HttpExercise`] runs one bounded pass over the whole client surface:
//! it gates on network data-readiness, then issues every supported method
//! against a plaintext base URL and again against a secure one, pacing
//! itself between requests. The pass exists to exercise the transport end
//! to end on real hardware; it terminates after one cycle.
//!
//! The module also provides the user-invocable `upload` command: a shell
//! handler that pushes a local file to the diagnostics endpoint with
//! derived metadata.

use core::fmt::Write as _;

use serde::Serialize;

use crate::log::{Level, LogFn};
use crate::network::error::Error;
use crate::network::http::{Body, Client, FileMeta, HttpTransport, Method, MimeType, Upload};
use crate::network::readiness::wait_data_ready;
use crate::network::{Clock, DataService, Delay};
use crate::system::shell::{Shell, ShellResult};

/// Endpoint the `upload` command pushes files to.
pub const UPLOAD_URL: &str = "http://httpbin.org/post";

const UPLOAD_INFO: &str = "Some information about the file";

const URL_CAPACITY: usize = 128;
const PAYLOAD_CAPACITY: usize = 128;

/// The method sequence of one pass, with whether a body is attached.
const PROBES: [(Method, bool); 5] = [
    (Method::Get, false),
    (Method::Post, true),
    (Method::Patch, true),
    (Method::Put, true),
    (Method::Delete, true),
];

#[derive(Debug, Serialize)]
struct SamplePayload<'a> {
    string_key: &'a str,
    boolean_key: bool,
    int_key: i32,
}

// 62 bytes serialized; PAYLOAD_CAPACITY leaves ample headroom, so the
// serialization cannot fail.
fn sample_payload() -> heapless::Vec<u8, PAYLOAD_CAPACITY> {
    serde_json_core::to_vec(&SamplePayload {
        string_key: "string value",
        boolean_key: true,
        int_key: 1234,
    })
    .unwrap()
}

fn probe_path(method: Method) -> &'static str {
    match method {
        Method::Get => "/get",
        Method::Post => "/post",
        Method::Patch => "/patch",
        Method::Put => "/put",
        Method::Delete => "/delete",
    }
}

/// Tuning knobs for the exercise pass.
#[derive(Debug, Clone)]
pub struct ExerciseOptions {
    /// Budget for the readiness gate, in seconds.
    pub ready_timeout_secs: u32,
    /// Delay after each request, in milliseconds.
    pub pacing_ms: u32,
    /// Delay after the full pass, in milliseconds.
    pub cooldown_ms: u32,
    /// Base URL for the plaintext half of the pass.
    pub plain_base: &'static str,
    /// Base URL for the secure half of the pass.
    pub secure_base: &'static str,
}

impl Default for ExerciseOptions {
    fn default() -> Self {
        Self {
            ready_timeout_secs: 60,
            pacing_ms: 1_000,
            cooldown_ms: 10_000,
            plain_base: "http://httpbin.org",
            secure_base: "https://httpbin.org",
        }
    }
}

/// Progress of the exercise pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Blocked behind the readiness gate.
    WaitingForNetwork,
    /// Issuing the request sequence.
    Running,
    /// One full pass completed.
    Finished,
}

/// One-shot exerciser of the HTTP client.
///
/// Drives `WaitingForNetwork` → `Running` → `Finished`. A readiness
/// timeout aborts the run with [`Error::Timeout`] before `Running` is
/// entered; per-request transport failures are reported by the client and
/// do not abort the pass.
pub struct HttpExercise<T, N, D>
where
    T: HttpTransport,
    N: DataService,
    D: Delay,
{
    client: Client<T>,
    network: N,
    delay: D,
    options: ExerciseOptions,
    state: State,
    log_fn: Option<LogFn>,
}

impl<T, N, D> core::fmt::Debug for HttpExercise<T, N, D>
where
    T: HttpTransport,
    N: DataService,
    D: Delay,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HttpExercise")
            .field("state", &self.state)
            .field("options", &self.options)
            .finish()
    }
}

impl<T, N, D> HttpExercise<T, N, D>
where
    T: HttpTransport,
    N: DataService,
    D: Delay,
{
    /// Create an exerciser and enable packet data on the network service.
    pub fn new(client: Client<T>, network: N, delay: D, options: ExerciseOptions) -> Self {
        let mut network = network;
        network.enable_data(true);
        Self {
            client,
            network,
            delay,
            options,
            state: State::WaitingForNetwork,
            log_fn: None,
        }
    }

    /// Install the log sink pass progress is reported through.
    pub fn set_log_function(&mut self, log_fn: LogFn) {
        self.log_fn = Some(log_fn);
    }

    /// Current progress of the pass.
    pub fn state(&self) -> State {
        self.state
    }

    /// The HTTP client driven by the pass.
    pub fn client_mut(&mut self) -> &mut Client<T> {
        &mut self.client
    }

    /// Run one full pass.
    ///
    /// Blocks behind the readiness gate for up to
    /// [`ExerciseOptions::ready_timeout_secs`]; on timeout, logs
    /// `Network ready timeout!` and returns [`Error::Timeout`] without
    /// issuing any request. Otherwise issues GET, POST, PATCH, PUT and
    /// DELETE against the plain base, then the secure base, with
    /// [`ExerciseOptions::pacing_ms`] between requests and
    /// [`ExerciseOptions::cooldown_ms`] after the final one.
    pub fn run(&mut self) -> Result<(), Error> {
        if !wait_data_ready(
            &self.network,
            &mut self.delay,
            self.options.ready_timeout_secs,
        ) {
            self.log(Level::Error, format_args!("Network ready timeout!"));
            return Err(Error::Timeout);
        }
        self.state = State::Running;

        let payload = sample_payload();

        self.log(Level::Info, format_args!("Testing HTTP"));
        let plain_base = self.options.plain_base;
        self.run_pass(plain_base, &payload, true)?;

        self.log(Level::Info, format_args!("Testing HTTPS"));
        let secure_base = self.options.secure_base;
        self.run_pass(secure_base, &payload, false)?;

        self.delay.delay_ms(self.options.cooldown_ms);
        self.state = State::Finished;
        Ok(())
    }

    // The final request of the whole pass is followed by the cooldown
    // instead of a pacing delay, hence `pace_final`.
    fn run_pass(&mut self, base: &str, payload: &[u8], pace_final: bool) -> Result<(), Error> {
        for (index, &(method, with_body)) in PROBES.iter().enumerate() {
            let mut url: heapless::String<URL_CAPACITY> = heapless::String::new();
            write!(url, "{}{}", base, probe_path(method)).map_err(|_| Error::InvalidAddress)?;

            let body = with_body.then_some(Body {
                data: payload,
                mime: MimeType::Json,
            });

            // Failures are logged by the client; the pass continues.
            let _ = self.client.execute(method, &url, body);

            if pace_final || index + 1 < PROBES.len() {
                self.delay.delay_ms(self.options.pacing_ms);
            }
        }
        Ok(())
    }

    fn log(&self, level: Level, message: core::fmt::Arguments) {
        if let Some(log_fn) = self.log_fn {
            log_fn(level, message);
        }
    }
}

/// Upload the file at `filepath` to [`UPLOAD_URL`].
///
/// Builds the file metadata (filename derived from the final path
/// segment, binary MIME type, the fixed info string, the current time)
/// and submits it with no certificates and the transport's default
/// timeout. A path without a final segment fails with
/// [`Error::InvalidPath`] before the transport is touched.
pub fn upload_file<'c, T, C>(
    client: &'c mut Client<T>,
    clock: &C,
    filepath: &str,
) -> Result<&'c [u8], Error>
where
    T: HttpTransport,
    C: Clock + ?Sized,
{
    let mut meta = FileMeta::for_path(filepath, clock.now())?;
    meta.info = UPLOAD_INFO;

    let upload = Upload {
        url: UPLOAD_URL,
        certs: None,
        headers: None,
        meta,
        timeout_secs: 0,
    };

    client.upload(&upload)
}

/// Application context threaded through the shell for the diagnostics
/// commands.
pub struct DiagContext<T, C>
where
    T: HttpTransport,
    C: Clock,
{
    /// The HTTP client uploads are issued through.
    pub client: Client<T>,
    /// Source of upload timestamps.
    pub clock: C,
}

impl<T, C> core::fmt::Debug for DiagContext<T, C>
where
    T: HttpTransport,
    C: Clock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiagContext").finish()
    }
}

/// Shell handler for the `upload` command.
///
/// Takes 1–3 positional arguments, the first being the local file path;
/// the trailing arguments are accepted for forward compatibility and
/// ignored. Outcomes are reported through the client's log sink; only a
/// missing or degenerate path is a command error.
pub fn upload_command<T, C>(
    ctx: &mut DiagContext<T, C>,
    argc: usize,
    argv: &[&str],
) -> ShellResult
where
    T: HttpTransport,
    C: Clock,
{
    if argc < 2 {
        return ShellResult::InvalidParameter;
    }

    match upload_file(&mut ctx.client, &ctx.clock, argv[1]) {
        Ok(_) => ShellResult::Ok,
        Err(Error::InvalidPath) => ShellResult::InvalidParameter,
        // Transport failures were already reported through the log sink;
        // the command itself still completed.
        Err(_) => ShellResult::Ok,
    }
}

/// Register the `upload` command on a shell.
pub fn register_upload_command<T, C>(shell: &mut Shell<DiagContext<T, C>>) -> ShellResult
where
    T: HttpTransport,
    C: Clock,
{
    shell.register_command(
        "upload",
        "Upload a file to the diagnostics endpoint",
        1,
        3,
        upload_command::<T, C>,
    )
}
