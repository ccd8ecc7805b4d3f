use crate::ports::{Renderer, SessionSource};
use super::collect_session;

/// Glue for a network client's "metrics collected" callback.
///
/// Holds no mutable state, so one logger can serve completions arriving on
/// any number of threads.
pub struct SessionMetricsLogger<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> SessionMetricsLogger<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn did_finish_collecting<S: SessionSource + ?Sized>(&self, source: &S) {
        let metrics = collect_session(source);
        self.renderer.render(&metrics);
    }
}
