use super::super::events::{Command, WifiEvent};
use super::super::machine::{Dispatch, DispatchContext, WifiHsm};
use super::super::types::WifiState;
use crate::platform::SharedObserver;
use crate::telemetry::ErrorCode;
use crate::types::WifiError;

impl WifiHsm {
    pub(crate) fn on_uninitialized(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Dispatch {
        match event {
            WifiEvent::Command(Command::Init(observer)) => {
                self.bring_up(context, observer.clone())
            }
            _ => self.invalid(context, WifiError::Fail),
        }
    }

    fn bring_up(
        &mut self,
        context: &mut DispatchContext,
        observer: Option<SharedObserver>,
    ) -> Dispatch {
        if let Err(err) = self.platform.driver.init() {
            log::error!("wifi_mgr: driver init failed err={}", err);
            self.fault(context, ErrorCode::DriverFail);
            return Dispatch::reject(WifiError::Fail);
        }
        if self.config.save_profile {
            if let Err(err) = self.platform.profiles.init() {
                log::warn!("wifi_mgr: profile store init failed err={}", err.as_str());
            }
        }
        if let Some(observer) = observer {
            if self.platform.callbacks.register(observer).is_err() {
                log::warn!("wifi_mgr: observer registry full");
            }
        }
        self.apply_autoconnect();
        Dispatch::enter(WifiState::StationDisconnected)
    }
}
