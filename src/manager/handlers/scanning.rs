use super::super::events::{Command, DriverEvent, WifiEvent};
use super::super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::super::types::{DisconnectCause, WifiState};
use crate::types::WifiError;

impl WifiHsm {
    pub(crate) fn on_scanning(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Driver(DriverEvent::ScanDone(results)) => {
                self.deliver_scan(results);
                self.handle.awaiting_scan = false;
                let restore = self
                    .handle
                    .previous
                    .take()
                    .unwrap_or(WifiState::StationDisconnected);
                Dispatch::enter(restore)
            }
            WifiEvent::Command(Command::Deinit) => {
                self.defer_until_disconnected(context, DisconnectCause::Deinit)
            }
            WifiEvent::Driver(DriverEvent::StationDisconnected(reason)) => {
                match self.handle.previous {
                    Some(WifiState::StationConnected) => {
                        self.link_lost(*reason);
                        self.handle.previous = Some(WifiState::StationDisconnected);
                        Dispatch::done()
                    }
                    Some(WifiState::Bridge) if self.handle.bridge.station_connected => {
                        self.link_lost(*reason);
                        self.handle.bridge.station_connected = false;
                        Dispatch::done()
                    }
                    _ => self.invalid(context, WifiError::Fail),
                }
            }
            WifiEvent::Driver(DriverEvent::Joined(record) | DriverEvent::AddressAssigned(record))
                if self.scanning_over_softap() =>
            {
                self.station_joined(context, record)
            }
            WifiEvent::Driver(DriverEvent::Left(record)) if self.scanning_over_softap() => {
                self.station_left(record)
            }
            _ => self.invalid(context, WifiError::Fail),
        }
    }

    fn scanning_over_softap(&self) -> bool {
        matches!(
            self.handle.previous,
            Some(WifiState::SoftAp | WifiState::Bridge)
        )
    }
}
