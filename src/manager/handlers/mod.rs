//! Per-state handler bodies and the collaborator sequences they share.
//!
//! Handlers never transition directly: they return a [`Dispatch`] and the
//! machine publishes the next state once every side effect has run.

mod bridge;
mod disconnecting;
mod scanning;
mod softap;
mod station;
mod uninitialized;

use super::events::{Command, EventKind, WifiEvent};
use super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::types::{DisconnectCause, WifiState};
use crate::platform::{DriverError, NodeInsert, Notification};
use crate::telemetry::{Counter, ErrorCode};
use crate::types::{
    ssid_from_str, ApConfig, ConfigError, DisconnectReason, LinkInfo, Reply, ScanResults,
    SoftApConfig, StationRecord, WifiError, WifiResult,
};

impl WifiHsm {
    pub(crate) fn invalid_config(
        &mut self,
        context: &mut DispatchContext,
        error: ConfigError,
    ) -> Dispatch {
        log::warn!(
            "wifi_mgr: invalid config event={} err={}",
            context.kind.as_str(),
            error
        );
        self.fault(context, ErrorCode::InvalidConfig);
        Dispatch::reject(WifiError::Fail)
    }

    fn driver_fault(
        &self,
        context: &mut DispatchContext,
        step: &str,
        err: DriverError,
    ) -> WifiError {
        log::error!("wifi_mgr: driver {} failed err={}", step, err);
        self.fault(context, ErrorCode::DriverFail);
        WifiError::Fail
    }

    pub(crate) fn notify(&self, notification: Notification<'_>) {
        log::debug!("wifi_mgr: notify {}", notification.kind().as_str());
        self.platform.callbacks.notify(&notification);
    }

    pub(crate) fn apply_autoconnect(&mut self) {
        let enabled = self.config.autoconnect;
        if let Err(err) = self.platform.driver.set_autoconnect(enabled) {
            log::warn!("wifi_mgr: set_autoconnect({}) failed err={}", enabled, err);
        }
    }

    /// Issues a station connect. The driver owns the attempt once it accepts
    /// it, so a later profile write failure still moves to `StationConnecting`.
    pub(crate) fn issue_connect(
        &mut self,
        context: &mut DispatchContext,
        config: &ApConfig,
    ) -> Dispatch {
        if let Err(err) = config.validate() {
            return self.invalid_config(context, err);
        }
        self.counters.bump(Counter::ConnectRequest);
        match self.platform.driver.connect(config) {
            Ok(()) => {}
            Err(DriverError::AlreadyConnected) => {
                log::warn!("wifi_mgr: connect refused, already associated");
                self.fault(context, ErrorCode::ConnectFail);
                return Dispatch::reject(WifiError::AlreadyConnected);
            }
            Err(err) => {
                log::error!("wifi_mgr: connect failed ssid={} err={}", config.ssid, err);
                self.counters.bump(Counter::ConnectFailure);
                self.fault(context, ErrorCode::ConnectFail);
                return Dispatch::reject(WifiError::Fail);
            }
        }
        self.handle.station_ssid = ssid_from_str(&config.ssid);
        log::info!("wifi_mgr: connecting ssid={}", self.handle.station_ssid);

        if self.config.save_profile {
            if let Err(err) = self.platform.profiles.write(config) {
                log::error!("wifi_mgr: profile write failed err={}", err.as_str());
                self.fault(context, ErrorCode::InternalFail);
                return Dispatch::forced(WifiState::StationConnecting, WifiError::Fail);
            }
        }
        Dispatch::enter(WifiState::StationConnecting)
    }

    pub(crate) fn issue_disconnect(&mut self, context: &mut DispatchContext) -> WifiResult<()> {
        self.platform
            .driver
            .disconnect()
            .map_err(|err| self.driver_fault(context, "disconnect", err))
    }

    /// Starts the access point leg and, when configured, its address server.
    pub(crate) fn run_softap(
        &mut self,
        context: &mut DispatchContext,
        config: &SoftApConfig,
    ) -> WifiResult<()> {
        if let Err(err) = self.platform.driver.start_softap(config) {
            return Err(self.driver_fault(context, "start_softap", err));
        }
        self.handle.ap_running = true;
        if self.config.dhcp_server {
            if let Err(err) = self.platform.dhcp_server.start() {
                log::error!("wifi_mgr: dhcp server start failed err={}", err);
                self.fault(context, ErrorCode::DhcpFail);
                if let Err(err) = self.platform.driver.stop_softap() {
                    let _ = self.driver_fault(context, "stop_softap", err);
                }
                self.handle.ap_running = false;
                return Err(WifiError::Fail);
            }
        }
        self.handle.station_count = 0;
        self.handle.softap_ssid = ssid_from_str(&config.ssid);
        self.counters.bump(Counter::SoftApStart);
        log::info!(
            "wifi_mgr: softap up ssid={} channel={}",
            self.handle.softap_ssid,
            config.channel
        );
        Ok(())
    }

    pub(crate) fn stop_softap(&mut self, context: &mut DispatchContext) -> WifiResult<()> {
        if !self.handle.ap_running {
            return Ok(());
        }
        if self.config.dhcp_server {
            self.platform.dhcp_server.stop();
        }
        if let Err(err) = self.platform.driver.stop_softap() {
            return Err(self.driver_fault(context, "stop_softap", err));
        }
        self.handle.ap_running = false;
        self.handle.station_count = 0;
        Ok(())
    }

    pub(crate) fn run_station(&mut self, context: &mut DispatchContext) -> WifiResult<()> {
        if let Err(err) = self.platform.driver.start_station() {
            return Err(self.driver_fault(context, "start_station", err));
        }
        self.apply_autoconnect();
        Ok(())
    }

    pub(crate) fn release_lease(&mut self) {
        if !self.handle.lease_held {
            return;
        }
        self.platform.dhcp_client.release();
        self.handle.lease_held = false;
    }

    /// Brings everything down: AP leg, lease, driver and observers. Runs to
    /// the end even when a step fails.
    pub(crate) fn teardown(&mut self, context: &mut DispatchContext) -> WifiResult<Reply> {
        let mut result = Ok(Reply::Done);
        if self.stop_softap(context).is_err() {
            self.handle.ap_running = false;
            result = Err(WifiError::Fail);
        }
        self.release_lease();
        if let Err(err) = self.platform.driver.deinit() {
            log::error!("wifi_mgr: driver deinit failed err={}", err);
            self.fault(context, ErrorCode::TeardownFail);
            result = Err(WifiError::Fail);
        }
        self.platform.callbacks.unregister_all();
        result
    }

    /// Tears down and enters `Uninitialized` regardless of the outcome.
    pub(crate) fn deinit_now(&mut self, context: &mut DispatchContext) -> Dispatch {
        let result = self.teardown(context);
        self.handle.settle_pending(result);
        Dispatch::with_result(WifiState::Uninitialized, result)
    }

    /// Waits in `StationDisconnecting` for the link drop before finishing.
    pub(crate) fn defer_until_disconnected(
        &mut self,
        context: &mut DispatchContext,
        cause: DisconnectCause,
    ) -> Dispatch {
        self.handle.cause = cause;
        self.handle.park(context.completion.take());
        Dispatch::enter(WifiState::StationDisconnecting)
    }

    /// Starts a scan and records where to return when it completes.
    pub(crate) fn issue_scan(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        let issued = match event {
            WifiEvent::Command(Command::Scan(filter)) => {
                if let Some(Err(err)) = filter.as_ref().map(|filter| filter.validate()) {
                    return self.invalid_config(context, err);
                }
                self.platform.driver.scan(filter.as_ref())
            }
            WifiEvent::Command(Command::ScanMultiple(config)) => {
                if let Err(err) = config.validate() {
                    return self.invalid_config(context, err);
                }
                self.platform.driver.scan_multiple(config)
            }
            _ => return self.invalid(context, WifiError::Fail),
        };
        if let Err(err) = issued {
            return Dispatch::reject(self.driver_fault(context, "scan", err));
        }
        self.counters.bump(Counter::ScanStarted);
        self.handle.previous = Some(self.handle.state);
        self.handle.awaiting_scan = true;
        Dispatch::enter(WifiState::Scanning)
    }

    pub(crate) fn deliver_scan(&mut self, results: &ScanResults) {
        log::info!("wifi_mgr: scan done results={}", results.len());
        self.counters.bump(Counter::ScanDone);
        self.notify(Notification::ScanDone(results));
    }

    /// Station link came up: acquire an address, then announce it.
    pub(crate) fn link_up(
        &mut self,
        context: &mut DispatchContext,
        link: &LinkInfo,
    ) -> WifiResult<()> {
        if self.config.dhcp_client {
            match self.platform.dhcp_client.acquire() {
                Ok(address) => {
                    self.handle.lease_held = true;
                    log::info!(
                        "wifi_mgr: lease {}.{}.{}.{}",
                        address[0],
                        address[1],
                        address[2],
                        address[3]
                    );
                }
                Err(err) => {
                    log::error!("wifi_mgr: dhcp acquire failed err={}", err);
                    self.fault(context, ErrorCode::DhcpFail);
                    return Err(WifiError::Fail);
                }
            }
        }
        log::info!("wifi_mgr: connected ssid={} channel={}", link.ssid, link.channel);
        self.counters.bump(Counter::ConnectSuccess);
        self.notify(Notification::Connected(link));
        Ok(())
    }

    pub(crate) fn link_failed(&mut self, reason: DisconnectReason) {
        log::warn!("wifi_mgr: connect failed reason={}", reason.0);
        self.counters.bump(Counter::ConnectFailure);
        self.notify(Notification::ConnectFailed(reason));
    }

    pub(crate) fn link_lost(&mut self, reason: DisconnectReason) {
        log::info!("wifi_mgr: disconnected reason={}", reason.0);
        self.release_lease();
        self.counters.bump(Counter::Disconnect);
        self.notify(Notification::Disconnected(reason));
    }

    /// Join bookkeeping for the access point leg. With the address server
    /// running, a join is announced by `AddressAssigned` and a node it already
    /// leased is a repeat that is dropped silently.
    pub(crate) fn station_joined(
        &mut self,
        context: &mut DispatchContext,
        record: &StationRecord,
    ) -> Dispatch {
        let expected = if self.config.dhcp_server {
            EventKind::AddressAssigned
        } else {
            EventKind::Joined
        };
        if context.kind != expected {
            return self.invalid(context, WifiError::Fail);
        }
        if self.config.dhcp_server
            && self.platform.dhcp_server.add_node(record) == NodeInsert::Exists
        {
            log::debug!("wifi_mgr: duplicate join ignored");
            return Dispatch::done();
        }
        self.handle.station_count = self.handle.station_count.saturating_add(1);
        self.counters.bump(Counter::Join);
        log::info!("wifi_mgr: station joined count={}", self.handle.station_count);
        self.notify(Notification::Joined(record));
        Dispatch::done()
    }

    pub(crate) fn station_left(&mut self, record: &StationRecord) -> Dispatch {
        if self.config.dhcp_server {
            self.platform.dhcp_server.remove_node(record);
        }
        self.handle.station_count = self.handle.station_count.saturating_sub(1);
        self.counters.bump(Counter::Leave);
        log::info!("wifi_mgr: station left count={}", self.handle.station_count);
        self.notify(Notification::Left(record));
        Dispatch::done()
    }

    pub(crate) fn control_bridge(
        &mut self,
        context: &mut DispatchContext,
        enable: bool,
    ) -> WifiResult<()> {
        self.platform
            .driver
            .control_bridge(enable)
            .map_err(|err| self.driver_fault(context, "control_bridge", err))
    }
}
