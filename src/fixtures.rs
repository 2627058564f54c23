//! Shared test fixtures. Compiled only for tests.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::registry::Registry;

/// A registry with one option of most types, echoing the shapes the original
/// demo program registers: a string, numbers, a duration, and a flag-only /
/// config-only boolean pair.
pub fn zoo_registry(path: &Path) -> Registry {
    let mut reg = Registry::with_path("zoo", path);
    reg.string("species", "gopher", "the species we are studying", true, true);
    reg.uint("port", 8080, "listen port", true, true);
    reg.duration("timeout", Duration::from_secs(90), "give up after", true, true);
    reg.bool("alive", true, "set false to kill", true, false);
    reg.bool("furry", true, "furry or not", false, true);
    reg
}

/// Writer over a shared buffer, so tests can hand the registry a sink and
/// still read what was written.
pub struct SharedSink(pub Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
