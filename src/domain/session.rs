use super::{TimeSpan, TransactionMetrics};

/// Everything collected for one finished network task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetrics {
    pub task_id: String,
    pub transactions: Vec<TransactionMetrics>,
    pub redirect_count: usize,
    pub task_span: TimeSpan,
}

impl SessionMetrics {
    pub fn new(task_id: impl Into<String>, transactions: Vec<TransactionMetrics>, redirect_count: usize, task_span: TimeSpan) -> Self {
        Self { task_id: task_id.into(), transactions, redirect_count, task_span }
    }
}
