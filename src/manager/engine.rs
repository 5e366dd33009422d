use statig::blocking::IntoStateMachineExt as _;

use super::events::{Command, DriverEvent, WifiMessage};
use super::machine::{DispatchContext, WifiHsm};
use super::types::{BridgeState, DisconnectCause, WifiState};
use crate::config::ManagerConfig;
use crate::platform::Collaborators;
use crate::telemetry::{ErrorCode, ErrorHistory, ErrorRecord, WifiCounters};
use crate::types::{Reply, Ssid, WifiResult};

/// Read-only view of what the manager is doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerInfo {
    pub state: WifiState,
    /// SSID of the last connect request the driver accepted.
    pub station_ssid: Ssid,
    pub softap_ssid: Ssid,
    pub station_count: u8,
}

/// Serializes every message through the state machine.
///
/// This is the only way in: commands and driver events alike go through
/// [`WifiManager::handle`], one at a time.
pub struct WifiManager {
    machine: statig::blocking::StateMachine<WifiHsm>,
    errors: ErrorHistory,
}

impl WifiManager {
    pub fn new(config: ManagerConfig, platform: Collaborators) -> Self {
        let config = config.sanitized();
        Self {
            machine: WifiHsm::new(config, platform).state_machine(),
            errors: ErrorHistory::new(config.error_history_depth),
        }
    }

    pub fn handle(&mut self, message: WifiMessage) -> WifiResult<Reply> {
        let (event, completion) = message.into_parts();
        let from = self.state();
        let mut context = DispatchContext::new(event.kind(), completion);
        log::debug!(
            "wifi_mgr: dispatch state={} event={}",
            from.as_str(),
            context.kind.as_str()
        );

        self.machine.handle_with_context(&event, &mut context);

        if self.config().error_report {
            self.record_errors(&context, from);
        }
        if let Some(completion) = context.completion.take() {
            completion.complete(context.result);
        }
        context.result
    }

    pub fn command(&mut self, command: Command) -> WifiResult<Reply> {
        self.handle(WifiMessage::command(command))
    }

    pub fn post(&mut self, event: DriverEvent) -> WifiResult<Reply> {
        self.handle(WifiMessage::driver(event))
    }

    fn record_errors(&mut self, context: &DispatchContext, from: WifiState) {
        for fault in &context.faults {
            self.errors.record(*fault);
        }
        if let Err(error) = context.result {
            if context.faults.is_empty() {
                self.errors.record(ErrorRecord {
                    code: ErrorCode::Result(error),
                    state: from,
                    event: context.kind,
                });
            }
        }
    }

    pub fn config(&self) -> ManagerConfig {
        self.machine.inner().config
    }

    pub fn state(&self) -> WifiState {
        self.machine.inner().handle.state
    }

    /// State that `Scanning` returns to.
    pub fn previous_state(&self) -> Option<WifiState> {
        self.machine.inner().handle.previous
    }

    pub fn substate(&self) -> DisconnectCause {
        self.machine.inner().handle.cause
    }

    pub fn bridge_state(&self) -> BridgeState {
        self.machine.inner().handle.bridge
    }

    pub fn has_pending_completion(&self) -> bool {
        self.machine.inner().handle.pending.is_some()
    }

    pub fn info(&self) -> ManagerInfo {
        let handle = &self.machine.inner().handle;
        ManagerInfo {
            state: handle.state,
            station_ssid: handle.station_ssid.clone(),
            softap_ssid: handle.softap_ssid.clone(),
            station_count: handle.station_count,
        }
    }

    pub fn counters(&self) -> WifiCounters {
        self.machine.inner().counters
    }

    pub fn errors(&self) -> &ErrorHistory {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}
