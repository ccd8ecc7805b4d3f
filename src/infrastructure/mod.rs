mod renderer;
mod printer;
mod recorded;

pub use renderer::{ConsoleRenderer, reference_span, format_ms, pad_leading, pad_trailing};
pub use printer::{StdoutPrinter, TracingPrinter, BufferPrinter};
pub use recorded::{RecordedSession, RecordedTransaction};
