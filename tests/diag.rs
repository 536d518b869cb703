use libmodem::diag::{ExerciseOptions, HttpExercise, State, UPLOAD_URL, upload_file};
use libmodem::log::Level;
use libmodem::network::error::Error;
use libmodem::network::http::{
    Client, HttpTransport, Method, MimeType, Request, ResponseBuffer, Upload,
};
use libmodem::network::readiness::POLL_INTERVAL_MS;
use libmodem::network::{Clock, DataService, Delay};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Mutex;

const SAMPLE_JSON: &[u8] = br#"{"string_key":"string value","boolean_key":true,"int_key":1234}"#;

#[derive(Debug)]
struct SubmitRecord {
    method: Method,
    url: String,
    body: Option<(Vec<u8>, MimeType)>,
}

#[derive(Debug)]
struct UploadRecord {
    url: String,
    filename: String,
    mime_type: MimeType,
    info: String,
    timestamp: u64,
    timeout_secs: u32,
}

#[derive(Default)]
struct MockTransport {
    status: i32,
    submits: Vec<SubmitRecord>,
    uploads: Vec<UploadRecord>,
}

impl HttpTransport for MockTransport {
    fn submit(
        &mut self,
        method: Method,
        request: &Request<'_>,
        response: &mut ResponseBuffer,
    ) -> i32 {
        self.submits.push(SubmitRecord {
            method,
            url: request.url.to_string(),
            body: request.body.map(|body| (body.data.to_vec(), body.mime)),
        });
        if self.status == 0 {
            response.append(b"OK");
        }
        self.status
    }

    fn upload(&mut self, upload: &Upload<'_>, response: &mut ResponseBuffer) -> i32 {
        self.uploads.push(UploadRecord {
            url: upload.url.to_string(),
            filename: upload.meta.filename.to_string(),
            mime_type: upload.meta.mime_type,
            info: upload.meta.info.to_string(),
            timestamp: upload.meta.timestamp,
            timeout_secs: upload.timeout_secs,
        });
        if self.status == 0 {
            response.append(b"OK");
        }
        self.status
    }
}

/// Data service observable from outside the exercise through shared cells.
#[derive(Clone)]
struct SharedNetwork {
    ready: Rc<Cell<bool>>,
    enabled: Rc<Cell<bool>>,
}

impl SharedNetwork {
    fn ready(ready: bool) -> Self {
        Self {
            ready: Rc::new(Cell::new(ready)),
            enabled: Rc::new(Cell::new(false)),
        }
    }
}

impl DataService for SharedNetwork {
    fn is_data_ready(&self) -> bool {
        self.ready.get()
    }

    fn enable_data(&mut self, enable: bool) {
        self.enabled.set(enable);
    }
}

#[derive(Clone, Default)]
struct SharedDelay {
    sleeps: Rc<Mutex<Vec<u32>>>,
}

impl Delay for SharedDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.sleeps.lock().unwrap().push(ms);
    }
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

fn exercise(
    status: i32,
    ready: bool,
    options: ExerciseOptions,
) -> (
    HttpExercise<MockTransport, SharedNetwork, SharedDelay>,
    SharedNetwork,
    SharedDelay,
) {
    let network = SharedNetwork::ready(ready);
    let delay = SharedDelay::default();
    let transport = MockTransport {
        status,
        ..MockTransport::default()
    };
    let run = HttpExercise::new(
        Client::new(transport),
        network.clone(),
        delay.clone(),
        options,
    );
    (run, network, delay)
}

#[test]
fn full_pass_issues_every_method_over_both_transports() {
    let (mut run, _network, _delay) = exercise(0, true, ExerciseOptions::default());

    assert_eq!(run.state(), State::WaitingForNetwork);
    run.run().unwrap();
    assert_eq!(run.state(), State::Finished);

    let submits = &run.client_mut().transport().submits;
    assert_eq!(submits.len(), 10);

    let expected = [
        (Method::Get, "http://httpbin.org/get"),
        (Method::Post, "http://httpbin.org/post"),
        (Method::Patch, "http://httpbin.org/patch"),
        (Method::Put, "http://httpbin.org/put"),
        (Method::Delete, "http://httpbin.org/delete"),
        (Method::Get, "https://httpbin.org/get"),
        (Method::Post, "https://httpbin.org/post"),
        (Method::Patch, "https://httpbin.org/patch"),
        (Method::Put, "https://httpbin.org/put"),
        (Method::Delete, "https://httpbin.org/delete"),
    ];
    for (record, (method, url)) in submits.iter().zip(expected) {
        assert_eq!(record.method, method);
        assert_eq!(record.url, url);
    }

    // GET travels bare; every mutating method carries the JSON sample.
    for record in submits {
        match record.method {
            Method::Get => assert!(record.body.is_none()),
            _ => assert_eq!(
                record.body,
                Some((SAMPLE_JSON.to_vec(), MimeType::Json)),
                "{:?}",
                record.method
            ),
        }
    }
}

#[test]
fn pass_paces_every_request_and_cools_down_at_the_end() {
    let options = ExerciseOptions {
        pacing_ms: 7,
        cooldown_ms: 99,
        ..ExerciseOptions::default()
    };
    let (mut run, _network, delay) = exercise(0, true, options);

    run.run().unwrap();

    // Nine pacing delays between the ten requests, then the cooldown.
    let mut expected = vec![7; 9];
    expected.push(99);
    assert_eq!(*delay.sleeps.lock().unwrap(), expected);
}

#[test]
fn readiness_timeout_aborts_before_any_request() {
    static LOG: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
    fn capture_log(level: Level, message: core::fmt::Arguments) {
        LOG.lock().unwrap().push((level, message.to_string()));
    }

    let options = ExerciseOptions {
        ready_timeout_secs: 3,
        ..ExerciseOptions::default()
    };
    let (mut run, _network, delay) = exercise(0, false, options);
    run.set_log_function(capture_log);

    assert_eq!(run.run(), Err(Error::Timeout));
    assert_eq!(run.state(), State::WaitingForNetwork);
    assert!(run.client_mut().transport().submits.is_empty());
    assert_eq!(*delay.sleeps.lock().unwrap(), vec![POLL_INTERVAL_MS; 3]);
    assert_eq!(
        *LOG.lock().unwrap(),
        vec![(Level::Error, "Network ready timeout!".to_string())]
    );
}

#[test]
fn construction_enables_packet_data() {
    let (_run, network, _delay) = exercise(0, true, ExerciseOptions::default());
    assert!(network.enabled.get());
}

#[test]
fn transport_failures_do_not_abort_the_pass() {
    let (mut run, _network, _delay) = exercise(7, true, ExerciseOptions::default());

    run.run().unwrap();

    assert_eq!(run.state(), State::Finished);
    assert_eq!(run.client_mut().transport().submits.len(), 10);
}

#[test]
fn upload_builds_the_documented_descriptor() {
    let mut client = Client::new(MockTransport::default());
    let clock = FixedClock(1_234_567);

    upload_file(&mut client, &clock, "/data/logs/report.bin").unwrap();

    let record = &client.transport().uploads[0];
    assert_eq!(record.url, UPLOAD_URL);
    assert_eq!(record.filename, "report.bin");
    assert_eq!(record.mime_type, MimeType::Binary);
    assert_eq!(record.info, "Some information about the file");
    assert_eq!(record.timestamp, 1_234_567);
    assert_eq!(record.timeout_secs, 0);
}

#[test]
fn upload_rejects_paths_without_a_segment_before_the_transport() {
    let mut client = Client::new(MockTransport::default());
    let clock = FixedClock(0);

    assert_eq!(
        upload_file(&mut client, &clock, "noSlash"),
        Err(Error::InvalidPath)
    );
    assert!(client.transport().uploads.is_empty());
}
