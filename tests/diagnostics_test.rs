use ddgrs::{ parse_results, CompiledSelectors };
use log::{ Level, LevelFilter, Log, Metadata, Record };
use std::sync::Mutex;

const ANTANI_PAGE: &str = include_str!("fixtures/antani.html");

static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn warnings() -> Vec<String> {
    CAPTURED.lock()
        .unwrap()
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

// Single test so the process-wide logger is not shared with other tests.
#[test]
fn test_layout_change_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);
    let selectors = CompiledSelectors::duckduckgo().unwrap();

    let results = parse_results(ANTANI_PAGE, &selectors, 0);
    assert_eq!(results.len(), 4);
    assert!(warnings().is_empty());

    let results = parse_results("<html><body><div id=\"links\"></div></body></html>", &selectors, 0);
    assert!(results.is_empty());
    let warned = warnings();
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("layout may have changed"));
}
