//! Session metrics captured as JSON, replayable without a network stack.
//!
//! ```json
//! {
//!   "task_id": "1",
//!   "redirect_count": 0,
//!   "task_start": "2017-04-06T10:00:00.000Z",
//!   "task_end": "2017-04-06T10:00:00.120Z",
//!   "transactions": [{
//!     "method": "GET",
//!     "url": "https://example.com/",
//!     "status": 200,
//!     "mime_type": "text/html",
//!     "protocol": "h2",
//!     "fetch_type": "network-load",
//!     "request_start": "2017-04-06T10:00:00.010Z",
//!     "request_end": "2017-04-06T10:00:00.012Z",
//!     "response_start": "2017-04-06T10:00:00.080Z",
//!     "response_end": "2017-04-06T10:00:00.100Z"
//!   }]
//! }
//! ```

use std::io::Read;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::domain::{FetchType, ResponseSummary, TimePoint, TimeSpan, TumbleweedError};
use crate::ports::{Measurable, SessionSource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    pub task_id: String,
    #[serde(default)]
    pub redirect_count: usize,
    pub task_start: TimePoint,
    pub task_end: TimePoint,
    #[serde(default)]
    pub transactions: Vec<RecordedTransaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordedTransaction {
    pub method: Option<String>,
    pub url: Option<String>,
    pub status: Option<u16>,
    pub mime_type: Option<String>,
    pub protocol: Option<String>,
    pub proxy: bool,
    pub reused_connection: bool,
    pub fetch_type: FetchType,

    pub domain_lookup_start: Option<TimePoint>,
    pub domain_lookup_end: Option<TimePoint>,
    pub connect_start: Option<TimePoint>,
    pub connect_end: Option<TimePoint>,
    pub secure_connection_start: Option<TimePoint>,
    pub secure_connection_end: Option<TimePoint>,
    pub request_start: Option<TimePoint>,
    pub request_end: Option<TimePoint>,
    pub response_start: Option<TimePoint>,
    pub response_end: Option<TimePoint>,
}

impl RecordedSession {
    pub fn from_json(input: &str) -> Result<Self, TumbleweedError> {
        let session: RecordedSession = serde_json::from_str(input)?;
        session.validate()?;
        Ok(session)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TumbleweedError> {
        let session: RecordedSession = serde_json::from_reader(reader)?;
        session.validate()?;
        Ok(session)
    }

    pub fn to_json(&self) -> Result<String, TumbleweedError> {
        serde_json::to_string_pretty(self).map_err(|e| TumbleweedError::other(format!("failed to encode session: {}", e)))
    }

    fn validate(&self) -> Result<(), TumbleweedError> {
        if self.task_end < self.task_start {
            return Err(TumbleweedError::decode(format!("task {} ends before it starts", self.task_id)));
        }
        for (idx, tx) in self.transactions.iter().enumerate() {
            if let Some(ref url) = tx.url {
                Url::parse(url).map_err(|e| TumbleweedError::decode(format!("transaction {}: invalid URL '{}': {}", idx, url, e)))?;
            }
        }
        Ok(())
    }
}

impl SessionSource for RecordedSession {
    type Transaction = RecordedTransaction;

    fn task_id(&self) -> String { self.task_id.clone() }
    fn transactions(&self) -> &[RecordedTransaction] { &self.transactions }
    fn redirect_count(&self) -> usize { self.redirect_count }

    fn task_span(&self) -> TimeSpan {
        TimeSpan::new(self.task_start, self.task_end).unwrap_or_else(|| TimeSpan::at(self.task_start))
    }
}

impl Measurable for RecordedTransaction {
    fn method(&self) -> Option<&str> { self.method.as_deref() }
    fn url(&self) -> Option<&str> { self.url.as_deref() }

    fn response(&self) -> Option<ResponseSummary> {
        self.status.map(|status| ResponseSummary::new(status, self.mime_type.clone()))
    }

    fn protocol_name(&self) -> Option<&str> { self.protocol.as_deref() }
    fn is_proxy_connection(&self) -> bool { self.proxy }
    fn is_reused_connection(&self) -> bool { self.reused_connection }
    fn fetch_type(&self) -> FetchType { self.fetch_type }

    fn domain_lookup_start(&self) -> Option<TimePoint> { self.domain_lookup_start }
    fn domain_lookup_end(&self) -> Option<TimePoint> { self.domain_lookup_end }
    fn connect_start(&self) -> Option<TimePoint> { self.connect_start }
    fn connect_end(&self) -> Option<TimePoint> { self.connect_end }
    fn secure_connection_start(&self) -> Option<TimePoint> { self.secure_connection_start }
    fn secure_connection_end(&self) -> Option<TimePoint> { self.secure_connection_end }
    fn request_start(&self) -> Option<TimePoint> { self.request_start }
    fn request_end(&self) -> Option<TimePoint> { self.request_end }
    fn response_start(&self) -> Option<TimePoint> { self.response_start }
    fn response_end(&self) -> Option<TimePoint> { self.response_end }
}
