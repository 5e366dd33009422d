use core::fmt;

use crate::types::{ApConfig, LinkStats, MultiScanConfig, PowerMode, ScanFilter, SoftApConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverError {
    Failed,
    /// The radio already holds an association for the requested network.
    AlreadyConnected,
    Unsupported,
}

impl DriverError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Failed => "failed",
            Self::AlreadyConnected => "already_connected",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Radio operations requested by the manager.
///
/// Every call returns once the request is accepted. Outcomes that take air
/// time (association, link loss, scan completion, peers joining the access
/// point) come back later as `DriverEvent`s posted through the manager.
pub trait WifiDriver {
    fn init(&mut self) -> Result<(), DriverError>;
    fn deinit(&mut self) -> Result<(), DriverError>;
    fn start_station(&mut self) -> Result<(), DriverError>;
    fn set_autoconnect(&mut self, enabled: bool) -> Result<(), DriverError>;
    fn connect(&mut self, config: &ApConfig) -> Result<(), DriverError>;
    fn disconnect(&mut self) -> Result<(), DriverError>;
    fn start_softap(&mut self, config: &SoftApConfig) -> Result<(), DriverError>;
    fn stop_softap(&mut self) -> Result<(), DriverError>;
    fn scan(&mut self, filter: Option<&ScanFilter>) -> Result<(), DriverError>;
    fn scan_multiple(&mut self, config: &MultiScanConfig) -> Result<(), DriverError>;
    fn control_bridge(&mut self, enable: bool) -> Result<(), DriverError>;
    fn get_stats(&mut self) -> Result<LinkStats, DriverError>;
    fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), DriverError>;
}
