use super::completion::Completion;
use super::types::{BridgeState, DisconnectCause, WifiState};
use crate::types::{Reply, Ssid, SoftApConfig, WifiError, WifiResult};

/// Everything the manager remembers between messages.
#[derive(Debug)]
pub(crate) struct ManagerHandle {
    pub(crate) state: WifiState,
    /// Restore target while `Scanning`.
    pub(crate) previous: Option<WifiState>,
    pub(crate) cause: DisconnectCause,
    /// Completion of a multi-step command, settled at its terminal state.
    pub(crate) pending: Option<Completion>,
    /// Last access-point configuration requested, reused after a
    /// switch-to-softap disconnect.
    pub(crate) softap_config: SoftApConfig,
    pub(crate) bridge: BridgeState,
    pub(crate) ap_running: bool,
    pub(crate) lease_held: bool,
    /// A `ScanDone` is still owed by the driver.
    pub(crate) awaiting_scan: bool,
    pub(crate) station_ssid: Ssid,
    pub(crate) softap_ssid: Ssid,
    pub(crate) station_count: u8,
}

impl ManagerHandle {
    pub(crate) fn new() -> Self {
        Self {
            state: WifiState::Uninitialized,
            previous: None,
            cause: DisconnectCause::None,
            pending: None,
            softap_config: SoftApConfig::default(),
            bridge: BridgeState::inactive(),
            ap_running: false,
            lease_held: false,
            awaiting_scan: false,
            station_ssid: Ssid::new(),
            softap_ssid: Ssid::new(),
            station_count: 0,
        }
    }

    /// Records a transition. The disconnect cause never survives leaving
    /// `StationDisconnecting`, and bridge flags never survive entering a
    /// plain station or access-point state.
    pub(crate) fn enter(&mut self, next: WifiState) {
        if self.state == WifiState::StationDisconnecting && next != self.state {
            self.cause = DisconnectCause::None;
        }
        if matches!(
            next,
            WifiState::Uninitialized
                | WifiState::StationDisconnected
                | WifiState::StationConnected
                | WifiState::SoftAp
        ) {
            self.bridge.reset();
        }
        if next == WifiState::Uninitialized {
            self.previous = None;
            self.awaiting_scan = false;
            self.station_count = 0;
        }
        self.state = next;
    }

    /// Holds `completion` until the operation reaches its terminal state.
    /// A handle already parked by an earlier command is failed with
    /// `Fail` right here, when it is replaced, not at the terminal state.
    pub(crate) fn park(&mut self, completion: Option<Completion>) {
        let Some(completion) = completion else {
            return;
        };
        if let Some(superseded) = self.pending.replace(completion) {
            superseded.complete(Err(WifiError::Fail));
        }
    }

    pub(crate) fn settle_pending(&mut self, result: WifiResult<Reply>) {
        if let Some(completion) = self.pending.take() {
            completion.complete(result);
        }
    }
}
