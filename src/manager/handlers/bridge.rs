use super::super::events::{Command, DriverEvent, WifiEvent};
use super::super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::super::types::{BridgeState, DisconnectCause, WifiState};
use crate::types::{BridgeConfig, ConfigError, Reply, WifiError};

impl WifiHsm {
    pub(crate) fn on_bridge(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        let station_connected = self.handle.bridge.station_connected;
        match event {
            WifiEvent::Command(Command::Deinit) => self.leave_bridge_for_deinit(context),
            WifiEvent::Command(Command::Connect(config)) if !station_connected => {
                self.issue_connect(context, config)
            }
            WifiEvent::Command(Command::Disconnect) if station_connected => {
                self.release_lease();
                match self.issue_disconnect(context) {
                    Ok(()) => self.defer_until_disconnected(context, DisconnectCause::None),
                    Err(error) => Dispatch::reject(error),
                }
            }
            WifiEvent::Command(Command::Scan(_) | Command::ScanMultiple(_)) => {
                self.issue_scan(context, event)
            }
            WifiEvent::Command(Command::SetBridge(config)) if !config.enable => {
                self.disable_bridge(context)
            }
            WifiEvent::Driver(DriverEvent::StationDisconnected(reason)) if station_connected => {
                self.link_lost(*reason);
                self.handle.bridge.station_connected = false;
                Dispatch::done()
            }
            WifiEvent::Driver(DriverEvent::Joined(record) | DriverEvent::AddressAssigned(record)) => {
                self.station_joined(context, record)
            }
            WifiEvent::Driver(DriverEvent::Left(record)) => self.station_left(record),
            WifiEvent::Driver(DriverEvent::ScanDone(results)) => {
                self.deliver_scan(results);
                Dispatch::done()
            }
            _ => self.invalid(context, WifiError::Fail),
        }
    }

    fn bridge_permitted(&self, config: &BridgeConfig) -> bool {
        if self.config.bridge && config.enable {
            return true;
        }
        if !self.config.bridge {
            log::warn!("wifi_mgr: bridge mode not configured");
        }
        false
    }

    /// Enables the bridge from a station state: the access point leg is
    /// started from the supplied configuration.
    pub(crate) fn enable_bridge(
        &mut self,
        context: &mut DispatchContext,
        config: &BridgeConfig,
        station_connected: bool,
    ) -> Dispatch {
        if !self.bridge_permitted(config) {
            return self.invalid(context, WifiError::Fail);
        }
        let Some(softap) = config.softap.as_ref() else {
            return self.invalid_config(context, ConfigError::MissingSoftApConfig);
        };
        if let Err(err) = softap.validate() {
            return self.invalid_config(context, err);
        }
        if let Err(error) = self.control_bridge(context, true) {
            return Dispatch::reject(error);
        }
        if let Err(error) = self.run_softap(context, softap) {
            let _ = self.control_bridge(context, false);
            return Dispatch::reject(error);
        }
        self.handle.softap_config = softap.clone();
        self.handle.bridge = BridgeState {
            active: true,
            station_connected,
            softap_after_bridge: false,
        };
        Dispatch::enter(WifiState::Bridge)
    }

    /// Enables the bridge on top of a running access point.
    pub(crate) fn enable_bridge_from_softap(
        &mut self,
        context: &mut DispatchContext,
        config: &BridgeConfig,
    ) -> Dispatch {
        if !self.bridge_permitted(config) {
            return self.invalid(context, WifiError::Fail);
        }
        if let Err(error) = self.control_bridge(context, true) {
            return Dispatch::reject(error);
        }
        self.handle.bridge = BridgeState {
            active: true,
            station_connected: false,
            softap_after_bridge: true,
        };
        Dispatch::enter(WifiState::Bridge)
    }

    /// Drops back to exactly one plain mode, picked by which legs are up.
    fn disable_bridge(&mut self, context: &mut DispatchContext) -> Dispatch {
        let bridge = self.handle.bridge;
        if bridge.softap_after_bridge && bridge.station_connected {
            self.release_lease();
            return match self.issue_disconnect(context) {
                Ok(()) => self.defer_until_disconnected(context, DisconnectCause::SwitchToSoftAp),
                Err(error) => Dispatch::reject(error),
            };
        }
        if !bridge.softap_after_bridge {
            if let Err(error) = self.stop_softap(context) {
                return Dispatch::reject(error);
            }
        }
        let target = if bridge.softap_after_bridge {
            WifiState::SoftAp
        } else if bridge.station_connected {
            WifiState::StationConnected
        } else {
            WifiState::StationDisconnected
        };
        let result = self.control_bridge(context, false).map(|()| Reply::Done);
        Dispatch::with_result(target, result)
    }

    fn leave_bridge_for_deinit(&mut self, context: &mut DispatchContext) -> Dispatch {
        if !self.handle.bridge.station_connected {
            return self.deinit_now(context);
        }
        let ap_result = self.stop_softap(context);
        self.release_lease();
        match self.issue_disconnect(context) {
            Ok(()) => {
                let dispatch = self.defer_until_disconnected(context, DisconnectCause::Deinit);
                match ap_result {
                    Ok(()) => dispatch,
                    Err(error) => Dispatch::forced(WifiState::StationDisconnecting, error),
                }
            }
            Err(error) => {
                let _ = self.teardown(context);
                self.handle.settle_pending(Err(error));
                Dispatch::forced(WifiState::Uninitialized, error)
            }
        }
    }
}
