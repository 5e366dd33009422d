#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WifiState {
    Uninitialized,
    StationDisconnected,
    StationConnecting,
    StationConnected,
    StationDisconnecting,
    SoftAp,
    Scanning,
    Bridge,
}

impl WifiState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::StationDisconnected => "StationDisconnected",
            Self::StationConnecting => "StationConnecting",
            Self::StationConnected => "StationConnected",
            Self::StationDisconnecting => "StationDisconnecting",
            Self::SoftAp => "SoftAp",
            Self::Scanning => "Scanning",
            Self::Bridge => "Bridge",
        }
    }
}

/// Why the machine sits in `StationDisconnecting`. Read once the link drop
/// is confirmed and cleared on every exit from that state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisconnectCause {
    #[default]
    None,
    Deinit,
    SwitchToSoftAp,
    InternalError,
}

impl DisconnectCause {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Deinit => "deinit",
            Self::SwitchToSoftAp => "switch_to_softap",
            Self::InternalError => "internal_error",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BridgeState {
    pub active: bool,
    pub station_connected: bool,
    /// The access point was the terminal mode before bridging started.
    pub softap_after_bridge: bool,
}

impl BridgeState {
    pub const fn inactive() -> Self {
        Self {
            active: false,
            station_connected: false,
            softap_after_bridge: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::inactive();
    }
}
