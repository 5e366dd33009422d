use embassy_futures::select::{select, Either};

use super::channels::{DriverEventChannel, WifiRequestChannel};
use crate::manager::WifiManager;

/// Owns the manager for the lifetime of the firmware and feeds it one
/// message at a time. Driver events win when both queues are ready so a
/// pending operation can settle before the next command is judged.
pub async fn run_wifi_manager_task(
    manager: &mut WifiManager,
    requests: &WifiRequestChannel,
    driver_events: &DriverEventChannel,
) -> ! {
    log::info!("wifi_mgr: task started state={}", manager.state().as_str());
    loop {
        let result = match select(driver_events.receive(), requests.receive()).await {
            Either::First(event) => manager.post(event),
            Either::Second(message) => manager.handle(message),
        };
        if let Err(error) = result {
            log::debug!("wifi_mgr: message result={}", error);
        }
    }
}
