use heapless::Deque;

use crate::config::ERROR_HISTORY_DEPTH;
use crate::manager::{EventKind, WifiState};
use crate::types::WifiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Event not legal in the state it arrived in.
    InvalidEvent,
    ConnectFail,
    InternalFail,
    DriverFail,
    DhcpFail,
    InvalidConfig,
    TeardownFail,
    /// Failed result returned to the caller.
    Result(WifiError),
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEvent => "invalid_event",
            Self::ConnectFail => "connect_fail",
            Self::InternalFail => "internal_fail",
            Self::DriverFail => "driver_fail",
            Self::DhcpFail => "dhcp_fail",
            Self::InvalidConfig => "invalid_config",
            Self::TeardownFail => "teardown_fail",
            Self::Result(error) => error.as_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorRecord {
    pub code: ErrorCode,
    /// State the machine was in when the event arrived.
    pub state: WifiState,
    pub event: EventKind,
}

/// Bounded history of failures, oldest evicted first.
#[derive(Debug)]
pub struct ErrorHistory {
    entries: Deque<ErrorRecord, ERROR_HISTORY_DEPTH>,
    depth: usize,
}

impl ErrorHistory {
    pub fn new(depth: u8) -> Self {
        Self {
            entries: Deque::new(),
            depth: (depth as usize).clamp(1, ERROR_HISTORY_DEPTH),
        }
    }

    pub fn record(&mut self, record: ErrorRecord) {
        while self.entries.len() >= self.depth {
            let _ = self.entries.pop_front();
        }
        let _ = self.entries.push_back(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&ErrorRecord> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
