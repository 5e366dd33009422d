use super::super::events::{Command, DriverEvent, WifiEvent};
use super::super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::super::types::WifiState;
use crate::types::WifiError;

impl WifiHsm {
    pub(crate) fn on_soft_ap(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Command(Command::SetStation) => self.leave_softap(context),
            WifiEvent::Command(Command::Scan(_) | Command::ScanMultiple(_)) => {
                self.issue_scan(context, event)
            }
            WifiEvent::Command(Command::Deinit) => self.deinit_now(context),
            WifiEvent::Command(Command::SetBridge(config)) => {
                self.enable_bridge_from_softap(context, config)
            }
            WifiEvent::Driver(DriverEvent::Joined(record) | DriverEvent::AddressAssigned(record)) => {
                self.station_joined(context, record)
            }
            WifiEvent::Driver(DriverEvent::Left(record)) => self.station_left(record),
            _ => self.invalid(context, WifiError::Fail),
        }
    }

    fn leave_softap(&mut self, context: &mut DispatchContext) -> Dispatch {
        if let Err(error) = self.stop_softap(context) {
            return Dispatch::reject(error);
        }
        match self.run_station(context) {
            Ok(()) => Dispatch::enter(WifiState::StationDisconnected),
            // The access point is already gone; there is nothing to go back to.
            Err(error) => Dispatch::forced(WifiState::StationDisconnected, error),
        }
    }
}
