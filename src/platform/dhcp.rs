use core::fmt;

use crate::types::StationRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DhcpError {
    Timeout,
    Failed,
}

impl DhcpError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DhcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address acquisition for the station leg.
pub trait DhcpClient {
    /// Runs until a lease is bound or the attempt is abandoned.
    fn acquire(&mut self) -> Result<[u8; 4], DhcpError>;
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeInsert {
    Added,
    /// The node was already leased; the join is a repeat notification.
    Exists,
}

/// Address server running alongside the access point.
pub trait DhcpServer {
    fn start(&mut self) -> Result<(), DhcpError>;
    fn stop(&mut self);
    fn add_node(&mut self, node: &StationRecord) -> NodeInsert;
    fn remove_node(&mut self, node: &StationRecord);
}
