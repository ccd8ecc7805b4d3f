/// Output sink for rendered sessions.
///
/// Each call carries one complete, newline-joined session. Implementations
/// must write it as a single unit so concurrent sessions never interleave.
pub trait Printer: Send + Sync {
    fn print(&self, batch: &str);
}

impl<F> Printer for F
where
    F: Fn(&str) + Send + Sync,
{
    fn print(&self, batch: &str) {
        self(batch)
    }
}
