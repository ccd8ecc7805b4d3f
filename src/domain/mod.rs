mod span;
mod phase;
mod http;
mod transaction;
mod session;
mod layout;
mod error;

pub use span::{TimePoint, TimeSpan, seconds_between};
pub use phase::{Phase, PhaseKind, Phases};
pub use http::{FetchType, ResponseSummary};
pub use transaction::{TransactionInfo, TransactionMetrics};
pub use session::SessionMetrics;
pub use layout::Layout;
pub use error::{ErrorClass, TumbleweedError};
