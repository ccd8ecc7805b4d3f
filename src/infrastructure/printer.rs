use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};
use crate::ports::Printer;

/// Writes each batch to stdout while holding the stdout lock.
pub struct StdoutPrinter;

impl StdoutPrinter {
    pub fn new() -> Self { Self }
}

impl Default for StdoutPrinter {
    fn default() -> Self { Self::new() }
}

impl Printer for StdoutPrinter {
    fn print(&self, batch: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", batch).and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write rendered session to stdout");
        }
    }
}

/// Emits each batch as one `info` event.
pub struct TracingPrinter;

impl TracingPrinter {
    pub fn new() -> Self { Self }
}

impl Default for TracingPrinter {
    fn default() -> Self { Self::new() }
}

impl Printer for TracingPrinter {
    fn print(&self, batch: &str) {
        info!(target: "tumbleweed::timeline", "\n{}", batch);
    }
}

/// Keeps every batch in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferPrinter {
    batches: Arc<Mutex<Vec<String>>>,
}

impl BufferPrinter {
    pub fn new() -> Self { Self::default() }

    pub fn batches(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().flat_map(|b| b.lines().map(str::to_string)).collect()
    }

    pub fn output(&self) -> String {
        self.guard().join("\n")
    }

    pub fn reset(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.batches.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Printer for BufferPrinter {
    fn print(&self, batch: &str) {
        self.guard().push(batch.to_string());
    }
}
