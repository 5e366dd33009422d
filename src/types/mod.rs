mod result;
mod wifi;

pub use result::{ConfigError, Reply, WifiError, WifiResult};
pub use wifi::{
    ApConfig, AuthType, BridgeConfig, CryptoType, DisconnectReason, LinkInfo, LinkStats,
    MultiScanConfig, PowerMode, ScanFilter, ScanRecord, ScanResults, SoftApConfig, Ssid,
    StationRecord,
};
pub(crate) use wifi::ssid_from_str;
