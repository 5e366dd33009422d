/// Longest SSID accepted by the radio, in bytes.
pub const WIFI_SSID_MAX: usize = 32;
/// Longest WPA passphrase accepted by the radio, in bytes.
pub const WIFI_PASSPHRASE_MAX: usize = 64;
pub const SOFTAP_CHANNEL_MIN: u8 = 1;
pub const SOFTAP_CHANNEL_MAX: u8 = 14;
pub const SOFTAP_CHANNEL_DEFAULT: u8 = 1;
pub const SCAN_RESULTS_MAX: usize = 32;
pub const SCAN_FILTERS_MAX: usize = 8;
pub const OBSERVERS_MAX: usize = 4;
pub const ERROR_HISTORY_DEPTH: usize = 16;
pub const WIFI_REQUEST_QUEUE_DEPTH: usize = 8;

/// Runtime switches for the optional parts of the connection manager.
///
/// Each flag gates collaborator calls only; the state table itself is the
/// same for every configuration except that `Bridge` can only be entered
/// when `bridge` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Driver-level autoconnect policy applied on init and on AP -> station.
    pub autoconnect: bool,
    /// Acquire an address with the DHCP client once the station link is up.
    pub dhcp_client: bool,
    /// Run the DHCP server alongside the access point. Also selects the
    /// driver event that announces a joined station: `AddressAssigned` when
    /// set, `Joined` otherwise.
    pub dhcp_server: bool,
    /// Persist the station profile after a connect request is accepted.
    pub save_profile: bool,
    /// Allow the station + access point bridge mode.
    pub bridge: bool,
    /// Keep a bounded history of failed results for diagnostics.
    pub error_report: bool,
    pub error_history_depth: u8,
}

impl ManagerConfig {
    pub const fn defaults() -> Self {
        Self {
            autoconnect: true,
            dhcp_client: true,
            dhcp_server: true,
            save_profile: false,
            bridge: false,
            error_report: true,
            error_history_depth: ERROR_HISTORY_DEPTH as u8,
        }
    }

    pub const fn sanitized(self) -> Self {
        let error_history_depth = if self.error_history_depth == 0 {
            1
        } else if self.error_history_depth as usize > ERROR_HISTORY_DEPTH {
            ERROR_HISTORY_DEPTH as u8
        } else {
            self.error_history_depth
        };
        Self {
            error_history_depth,
            ..self
        }
    }

    pub const fn with_bridge(self, bridge: bool) -> Self {
        Self { bridge, ..self }
    }

    pub const fn with_save_profile(self, save_profile: bool) -> Self {
        Self {
            save_profile,
            ..self
        }
    }

    pub const fn with_dhcp_server(self, dhcp_server: bool) -> Self {
        Self {
            dhcp_server,
            ..self
        }
    }

    pub const fn with_dhcp_client(self, dhcp_client: bool) -> Self {
        Self {
            dhcp_client,
            ..self
        }
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
