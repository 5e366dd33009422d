use core::fmt;

use super::wifi::LinkStats;

/// Failure returned synchronously for every request the manager handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WifiError {
    Fail,
    /// The request is not legal while an operation is outstanding.
    Busy,
    AlreadyConnected,
}

impl WifiError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Busy => "busy",
            Self::AlreadyConnected => "already_connected",
        }
    }
}

impl fmt::Display for WifiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type WifiResult<T> = Result<T, WifiError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    Done,
    Stats(LinkStats),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptySsid,
    SsidTooLong,
    PassphraseTooLong,
    InvalidChannel,
    TooManyFilters,
    MissingSoftApConfig,
}

impl ConfigError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptySsid => "empty_ssid",
            Self::SsidTooLong => "ssid_too_long",
            Self::PassphraseTooLong => "passphrase_too_long",
            Self::InvalidChannel => "invalid_channel",
            Self::TooManyFilters => "too_many_filters",
            Self::MissingSoftApConfig => "missing_softap_config",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
