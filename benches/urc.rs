use criterion::Criterion;
use libmodem::log::Level;
use libmodem::urc::{CallInfo, Classifier, SimState, Urc};
use rand::Rng;
use std::hint::black_box;

fn discard_log(_level: Level, _message: core::fmt::Arguments) {}

pub fn bench_classify_raw(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    // Spread over known and unknown codes alike; the classifier sees both.
    let pairs: Vec<(u32, u32)> = (0..1024)
        .map(|_| (rng.gen_range(0..20), rng.gen_range(0..8)))
        .collect();

    let mut classifier = Classifier::new();
    classifier.set_log_function(discard_log);

    c.bench_function("classify_raw", |b| {
        let mut index = 0;
        b.iter(|| {
            let (code, value) = pairs[index % pairs.len()];
            index += 1;
            classifier.classify_raw(black_box(code), black_box(value));
        })
    });
}

pub fn bench_classify_typed(c: &mut Criterion) {
    let events = [
        Urc::SimCard(SimState::Ready),
        Urc::GsmNetwork(5),
        Urc::Voltage(3812),
        Urc::IncomingCall(CallInfo::new("+15551234567")),
        Urc::NewSms(3),
    ];

    let mut classifier = Classifier::new();
    classifier.set_log_function(discard_log);

    c.bench_function("classify_typed", |b| {
        let mut index = 0;
        b.iter(|| {
            let urc = &events[index % events.len()];
            index += 1;
            classifier.classify(black_box(urc));
        })
    });
}
