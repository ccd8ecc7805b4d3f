use tracing::warn;
use crate::domain::{SessionMetrics, TransactionInfo, TransactionMetrics};
use crate::ports::{Measurable, SessionSource};
use super::derive_phases;

pub fn collect_transaction<M: Measurable + ?Sized>(metrics: &M, redirect_index: usize) -> TransactionMetrics {
    let info = TransactionInfo {
        method: metrics.method().map(str::to_string),
        url: metrics.url().map(str::to_string),
        response: metrics.response(),
        protocol: metrics.protocol_name().map(str::to_string),
        proxy: metrics.is_proxy_connection(),
        reused_connection: metrics.is_reused_connection(),
        fetch_type: metrics.fetch_type(),
    };
    TransactionMetrics::new(info, derive_phases(metrics), redirect_index)
}

/// Builds the immutable metrics of a finished task.
///
/// Every redirect adds a hop, so `n` redirects come with exactly `n + 1`
/// transaction records. Any other count is logged and the records that did
/// arrive are used as they are.
pub fn collect_session<S: SessionSource + ?Sized>(source: &S) -> SessionMetrics {
    let task_id = source.task_id();
    let records = source.transactions();
    let redirects = source.redirect_count();
    let expected = redirects + 1;

    if records.len() < expected {
        warn!(
            task_id = %task_id,
            redirects,
            transactions = records.len(),
            "transaction metrics missing for some redirects"
        );
    } else if records.len() > expected {
        warn!(
            task_id = %task_id,
            redirects,
            transactions = records.len(),
            "more transaction metrics than redirect hops"
        );
    }

    let transactions = records
        .iter()
        .enumerate()
        .map(|(idx, record)| collect_transaction(record, idx))
        .collect();

    SessionMetrics::new(task_id, transactions, redirects, source.task_span())
}
