mod derive_phases;
mod collect_session;
mod session_logger;
mod config;

pub use derive_phases::derive_phases;
pub use collect_session::{collect_session, collect_transaction};
pub use session_logger::SessionMetricsLogger;
pub use config::{Config, SinkKind};
