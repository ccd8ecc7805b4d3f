use crate::domain::{FetchType, ResponseSummary, TimePoint, TimeSpan};

/// Raw per-transaction measurements supplied by a network stack adapter.
///
/// Every timestamp is optional. Reused connections carry no domain lookup or
/// connect timestamps, and cache hits carry none of the network phases.
pub trait Measurable {
    fn method(&self) -> Option<&str>;
    fn url(&self) -> Option<&str>;
    fn response(&self) -> Option<ResponseSummary>;

    fn protocol_name(&self) -> Option<&str>;
    fn is_proxy_connection(&self) -> bool;
    fn is_reused_connection(&self) -> bool;
    fn fetch_type(&self) -> FetchType;

    fn domain_lookup_start(&self) -> Option<TimePoint>;
    fn domain_lookup_end(&self) -> Option<TimePoint>;
    fn connect_start(&self) -> Option<TimePoint>;
    fn connect_end(&self) -> Option<TimePoint>;
    fn secure_connection_start(&self) -> Option<TimePoint>;
    fn secure_connection_end(&self) -> Option<TimePoint>;
    fn request_start(&self) -> Option<TimePoint>;
    fn request_end(&self) -> Option<TimePoint>;
    fn response_start(&self) -> Option<TimePoint>;
    fn response_end(&self) -> Option<TimePoint>;
}

/// A completed network task: its transactions in redirect order.
pub trait SessionSource {
    type Transaction: Measurable;

    /// Opaque identifier assigned by the network layer.
    fn task_id(&self) -> String;
    fn transactions(&self) -> &[Self::Transaction];
    fn redirect_count(&self) -> usize;
    fn task_span(&self) -> TimeSpan;
}
