use super::super::events::{Command, DriverEvent, WifiEvent};
use super::super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::super::types::{DisconnectCause, WifiState};
use crate::types::{DisconnectReason, SoftApConfig, WifiError};

impl WifiHsm {
    pub(crate) fn on_station_disconnected(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Command(Command::Connect(config)) => self.issue_connect(context, config),
            WifiEvent::Command(Command::Deinit) => self.deinit_now(context),
            WifiEvent::Command(Command::SetSoftAp(config)) => self.enter_softap(context, config),
            WifiEvent::Command(Command::Scan(_) | Command::ScanMultiple(_)) => {
                self.issue_scan(context, event)
            }
            WifiEvent::Command(Command::SetBridge(config)) => {
                self.enable_bridge(context, config, false)
            }
            WifiEvent::Driver(DriverEvent::ScanDone(results)) => {
                self.deliver_scan(results);
                Dispatch::done()
            }
            _ => self.invalid(context, WifiError::Fail),
        }
    }

    fn enter_softap(&mut self, context: &mut DispatchContext, config: &SoftApConfig) -> Dispatch {
        if let Err(err) = config.validate() {
            return self.invalid_config(context, err);
        }
        self.handle.softap_config = config.clone();
        match self.run_softap(context, config) {
            Ok(()) => Dispatch::enter(WifiState::SoftAp),
            Err(error) => Dispatch::reject(error),
        }
    }

    pub(crate) fn on_station_connecting(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Driver(DriverEvent::StationConnected(link)) => {
                if self.link_up(context, link).is_ok() {
                    return Dispatch::enter(self.station_up_target());
                }
                // Address acquisition failed: drop the association first.
                match self.issue_disconnect(context) {
                    Ok(()) => {
                        self.handle.cause = DisconnectCause::InternalError;
                        Dispatch::forced(WifiState::StationDisconnecting, WifiError::Fail)
                    }
                    Err(error) => {
                        self.link_failed(DisconnectReason::UNSPECIFIED);
                        Dispatch::forced(self.station_down_target(), error)
                    }
                }
            }
            WifiEvent::Driver(DriverEvent::StationConnectFailed(reason)) => {
                self.link_failed(*reason);
                Dispatch::enter(self.station_down_target())
            }
            WifiEvent::Command(Command::Deinit) => {
                self.defer_until_disconnected(context, DisconnectCause::Deinit)
            }
            _ => self.invalid(context, WifiError::Busy),
        }
    }

    pub(crate) fn on_station_connected(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Command(Command::Disconnect) => {
                self.release_lease();
                match self.issue_disconnect(context) {
                    Ok(()) => self.defer_until_disconnected(context, DisconnectCause::None),
                    Err(error) => Dispatch::reject(error),
                }
            }
            WifiEvent::Command(Command::SetSoftAp(config)) => {
                if let Err(err) = config.validate() {
                    return self.invalid_config(context, err);
                }
                self.handle.softap_config = config.clone();
                self.release_lease();
                match self.issue_disconnect(context) {
                    Ok(()) => {
                        self.defer_until_disconnected(context, DisconnectCause::SwitchToSoftAp)
                    }
                    Err(error) => Dispatch::reject(error),
                }
            }
            WifiEvent::Command(Command::Deinit) => {
                self.release_lease();
                match self.issue_disconnect(context) {
                    Ok(()) => self.defer_until_disconnected(context, DisconnectCause::Deinit),
                    Err(error) => {
                        let _ = self.teardown(context);
                        self.handle.settle_pending(Err(error));
                        Dispatch::forced(WifiState::Uninitialized, error)
                    }
                }
            }
            WifiEvent::Command(Command::Scan(_) | Command::ScanMultiple(_)) => {
                self.issue_scan(context, event)
            }
            WifiEvent::Command(Command::Connect(_)) => {
                self.invalid(context, WifiError::AlreadyConnected)
            }
            WifiEvent::Command(Command::SetBridge(config)) => {
                self.enable_bridge(context, config, true)
            }
            WifiEvent::Driver(DriverEvent::StationDisconnected(reason)) => {
                self.link_lost(*reason);
                Dispatch::enter(WifiState::StationDisconnected)
            }
            _ => self.invalid(context, WifiError::Fail),
        }
    }

    /// Where a station leg that just came up lands.
    fn station_up_target(&mut self) -> WifiState {
        if self.handle.bridge.active {
            self.handle.bridge.station_connected = true;
            WifiState::Bridge
        } else {
            WifiState::StationConnected
        }
    }

    /// Where a station leg that just went down lands.
    pub(crate) fn station_down_target(&mut self) -> WifiState {
        if self.handle.bridge.active {
            self.handle.bridge.station_connected = false;
            WifiState::Bridge
        } else {
            WifiState::StationDisconnected
        }
    }
}
