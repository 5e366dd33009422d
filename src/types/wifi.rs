use alloc::string::String;

use heapless::Vec;

use super::result::ConfigError;
use crate::config::{
    SCAN_FILTERS_MAX, SCAN_RESULTS_MAX, SOFTAP_CHANNEL_DEFAULT, SOFTAP_CHANNEL_MAX,
    SOFTAP_CHANNEL_MIN, WIFI_PASSPHRASE_MAX, WIFI_SSID_MAX,
};

pub type Ssid = heapless::String<WIFI_SSID_MAX>;

/// Copies `value` into a bounded SSID, dropping whole characters that do not fit.
pub(crate) fn ssid_from_str(value: &str) -> Ssid {
    let mut ssid = Ssid::new();
    for ch in value.chars() {
        if ssid.push(ch).is_err() {
            break;
        }
    }
    ssid
}

fn check_ssid(ssid: &str) -> Result<(), ConfigError> {
    if ssid.is_empty() {
        return Err(ConfigError::EmptySsid);
    }
    if ssid.len() > WIFI_SSID_MAX {
        return Err(ConfigError::SsidTooLong);
    }
    Ok(())
}

fn check_passphrase(passphrase: &str) -> Result<(), ConfigError> {
    if passphrase.len() > WIFI_PASSPHRASE_MAX {
        return Err(ConfigError::PassphraseTooLong);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthType {
    Open,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa3Psk,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CryptoType {
    None,
    Tkip,
    Aes,
    TkipAes,
    Unknown,
}

/// Station-side target: the access point to join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApConfig {
    pub ssid: String,
    pub passphrase: String,
    pub auth: AuthType,
    pub crypto: CryptoType,
}

impl ApConfig {
    pub fn new(ssid: &str, passphrase: &str) -> Self {
        let (auth, crypto) = if passphrase.is_empty() {
            (AuthType::Open, CryptoType::None)
        } else {
            (AuthType::Wpa2Psk, CryptoType::Aes)
        };
        Self {
            ssid: String::from(ssid),
            passphrase: String::from(passphrase),
            auth,
            crypto,
        }
    }

    pub fn with_security(mut self, auth: AuthType, crypto: CryptoType) -> Self {
        self.auth = auth;
        self.crypto = crypto;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ssid(&self.ssid)?;
        check_passphrase(&self.passphrase)
    }
}

/// Parameters for the device's own access point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoftApConfig {
    pub ssid: String,
    pub passphrase: String,
    pub channel: u8,
}

impl SoftApConfig {
    pub fn new(ssid: &str, passphrase: &str, channel: u8) -> Self {
        Self {
            ssid: String::from(ssid),
            passphrase: String::from(passphrase),
            channel,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ssid(&self.ssid)?;
        check_passphrase(&self.passphrase)?;
        if !(SOFTAP_CHANNEL_MIN..=SOFTAP_CHANNEL_MAX).contains(&self.channel) {
            return Err(ConfigError::InvalidChannel);
        }
        Ok(())
    }
}

impl Default for SoftApConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            passphrase: String::new(),
            channel: SOFTAP_CHANNEL_DEFAULT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeConfig {
    pub enable: bool,
    /// Access-point leg to start. Required when enabling from a station state.
    pub softap: Option<SoftApConfig>,
}

impl BridgeConfig {
    pub fn enable(softap: SoftApConfig) -> Self {
        Self {
            enable: true,
            softap: Some(softap),
        }
    }

    pub fn disable() -> Self {
        Self {
            enable: false,
            softap: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanFilter {
    pub ssid: Option<Ssid>,
    /// Zero is never stored; `None` scans every channel.
    pub channel: Option<u8>,
}

impl ScanFilter {
    pub fn ssid(ssid: &str) -> Result<Self, ConfigError> {
        check_ssid(ssid)?;
        Ok(Self {
            ssid: Some(ssid_from_str(ssid)),
            channel: None,
        })
    }

    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = if channel == 0 { None } else { Some(channel) };
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ssid) = self.ssid.as_deref() {
            check_ssid(ssid)?;
        }
        match self.channel {
            Some(channel) if !(SOFTAP_CHANNEL_MIN..=SOFTAP_CHANNEL_MAX).contains(&channel) => {
                Err(ConfigError::InvalidChannel)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiScanConfig {
    pub filters: Vec<ScanFilter, SCAN_FILTERS_MAX>,
    pub scan_all: bool,
}

impl MultiScanConfig {
    pub fn push(&mut self, filter: ScanFilter) -> Result<(), ConfigError> {
        self.filters
            .push(filter)
            .map_err(|_| ConfigError::TooManyFilters)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filters.iter().try_for_each(ScanFilter::validate)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRecord {
    pub ssid: Ssid,
    pub bssid: [u8; 6],
    pub rssi: i8,
    pub channel: u8,
    pub auth: AuthType,
}

pub type ScanResults = Vec<ScanRecord, SCAN_RESULTS_MAX>;

/// A peer associated with our access point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationRecord {
    pub mac: [u8; 6],
    pub ipv4: Option<[u8; 4]>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkInfo {
    pub ssid: Ssid,
    pub bssid: [u8; 6],
    pub channel: u8,
}

impl LinkInfo {
    pub fn new(ssid: &str) -> Self {
        Self {
            ssid: ssid_from_str(ssid),
            ..Self::default()
        }
    }
}

/// Driver-supplied reason for a link drop or a failed association.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisconnectReason(pub u16);

impl DisconnectReason {
    pub const UNSPECIFIED: Self = Self(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerMode {
    Enable,
    Disable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub start: u32,
    pub end: u32,
    pub tx_retransmit: u32,
    pub tx_drop: u32,
    pub rx_drop: u32,
    pub tx_success_cnt: u32,
    pub tx_success_bytes: u32,
    pub rx_cnt: u32,
    pub rx_bytes: u32,
    pub tx_try: u32,
    pub rssi_avg: i16,
    pub rssi_min: i16,
    pub rssi_max: i16,
    pub beacon_miss_cnt: u32,
}
