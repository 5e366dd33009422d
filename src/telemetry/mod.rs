mod counters;
mod errors;

pub(crate) use counters::Counter;
pub use counters::WifiCounters;
pub use errors::{ErrorCode, ErrorHistory, ErrorRecord};
