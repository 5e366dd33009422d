use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::config::WIFI_REQUEST_QUEUE_DEPTH;
use crate::manager::{DriverEvent, WifiMessage};

/// Commands from the application, each optionally carrying a completion.
pub type WifiRequestChannel =
    Channel<CriticalSectionRawMutex, WifiMessage, WIFI_REQUEST_QUEUE_DEPTH>;

/// Notifications from the radio driver and the address server.
pub type DriverEventChannel =
    Channel<CriticalSectionRawMutex, DriverEvent, WIFI_REQUEST_QUEUE_DEPTH>;
