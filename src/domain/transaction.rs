use super::{FetchType, Phases, ResponseSummary};

/// Descriptive request/response fields, copied verbatim from the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInfo {
    pub method: Option<String>,
    pub url: Option<String>,
    pub response: Option<ResponseSummary>,
    pub protocol: Option<String>,
    pub proxy: bool,
    pub reused_connection: bool,
    pub fetch_type: FetchType,
}

/// One request/response exchange; every redirect hop gets its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMetrics {
    pub info: TransactionInfo,
    pub phases: Phases,
    /// Position of this hop in the collaborator's redirect chain, 0 for the
    /// original request. Bookkeeping only; the timeline does not print it.
    pub redirect_index: usize,
}

impl TransactionMetrics {
    pub fn new(info: TransactionInfo, phases: Phases, redirect_index: usize) -> Self {
        Self { info, phases, redirect_index }
    }
}
