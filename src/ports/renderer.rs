use crate::domain::SessionMetrics;

pub trait Renderer: Send + Sync {
    fn render(&self, session: &SessionMetrics);
}
