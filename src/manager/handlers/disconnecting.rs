use super::super::events::{Command, DriverEvent, WifiEvent};
use super::super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::super::types::{DisconnectCause, WifiState};
use crate::types::{DisconnectReason, Reply, WifiError};

impl WifiHsm {
    pub(crate) fn on_station_disconnecting(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Command(Command::Deinit) => {
                self.handle.cause = DisconnectCause::Deinit;
                self.handle.park(context.completion.take());
                Dispatch::done()
            }
            WifiEvent::Driver(DriverEvent::ScanDone(results)) => {
                if !self.handle.awaiting_scan {
                    log::debug!("wifi_mgr: drained scan results={}", results.len());
                    return Dispatch::done();
                }
                self.handle.awaiting_scan = false;
                self.conclude_disconnect(context, DisconnectReason::UNSPECIFIED)
            }
            WifiEvent::Driver(
                DriverEvent::StationDisconnected(reason) | DriverEvent::StationConnectFailed(reason),
            ) => self.conclude_disconnect(context, *reason),
            WifiEvent::Driver(DriverEvent::StationConnected(_)) => {
                self.conclude_disconnect(context, DisconnectReason::UNSPECIFIED)
            }
            _ => self.invalid(context, WifiError::Busy),
        }
    }

    /// The link is down: finish whatever the recorded cause asked for.
    fn conclude_disconnect(
        &mut self,
        context: &mut DispatchContext,
        reason: DisconnectReason,
    ) -> Dispatch {
        log::debug!(
            "wifi_mgr: disconnect settled cause={}",
            self.handle.cause.as_str()
        );
        match self.handle.cause {
            DisconnectCause::Deinit => self.deinit_now(context),
            DisconnectCause::SwitchToSoftAp => {
                let dispatch = self.finish_softap_switch(context);
                self.handle.settle_pending(dispatch.result);
                dispatch
            }
            DisconnectCause::InternalError => {
                self.link_failed(reason);
                self.handle.settle_pending(Ok(Reply::Done));
                Dispatch::enter(self.station_down_target())
            }
            DisconnectCause::None => {
                self.link_lost(reason);
                self.handle.settle_pending(Ok(Reply::Done));
                Dispatch::enter(self.station_down_target())
            }
        }
    }

    fn finish_softap_switch(&mut self, context: &mut DispatchContext) -> Dispatch {
        if self.handle.bridge.active {
            // The access point leg is already up; only the bridge goes away.
            self.handle.bridge.reset();
            let result = self.control_bridge(context, false).map(|()| Reply::Done);
            return Dispatch::with_result(WifiState::SoftAp, result);
        }
        let config = self.handle.softap_config.clone();
        match self.run_softap(context, &config) {
            Ok(()) => Dispatch::enter(WifiState::SoftAp),
            Err(error) => Dispatch::forced(WifiState::StationDisconnected, error),
        }
    }
}
