use super::channels::{DriverEventChannel, WifiRequestChannel};
use crate::manager::{Command, Completion, CompletionSignal, DriverEvent, WifiMessage};
use crate::platform::SharedObserver;
use crate::types::{
    ApConfig, BridgeConfig, LinkStats, MultiScanConfig, PowerMode, Reply, ScanFilter,
    SoftApConfig, WifiError, WifiResult,
};

/// Blocking-style front end to the manager task.
///
/// Each call enqueues one command with a completion handle and waits until
/// the manager settles it, which may be several driver events later. One
/// client serves one caller at a time: its completion signal is reused.
#[derive(Clone, Copy)]
pub struct WifiClient {
    requests: &'static WifiRequestChannel,
    driver_events: &'static DriverEventChannel,
    done: &'static CompletionSignal,
}

impl WifiClient {
    pub const fn new(
        requests: &'static WifiRequestChannel,
        driver_events: &'static DriverEventChannel,
        done: &'static CompletionSignal,
    ) -> Self {
        Self {
            requests,
            driver_events,
            done,
        }
    }

    async fn request(&self, command: Command) -> WifiResult<Reply> {
        self.done.reset();
        self.requests
            .send(WifiMessage::with_completion(command, Completion::new(self.done)))
            .await;
        self.done.wait().await
    }

    async fn request_done(&self, command: Command) -> WifiResult<()> {
        self.request(command).await.map(|_| ())
    }

    pub async fn init(&self, observer: Option<SharedObserver>) -> WifiResult<()> {
        self.request_done(Command::Init(observer)).await
    }

    pub async fn deinit(&self) -> WifiResult<()> {
        self.request_done(Command::Deinit).await
    }

    pub async fn connect(&self, config: ApConfig) -> WifiResult<()> {
        self.request_done(Command::Connect(config)).await
    }

    pub async fn disconnect(&self) -> WifiResult<()> {
        self.request_done(Command::Disconnect).await
    }

    pub async fn set_station(&self) -> WifiResult<()> {
        self.request_done(Command::SetStation).await
    }

    pub async fn set_softap(&self, config: SoftApConfig) -> WifiResult<()> {
        self.request_done(Command::SetSoftAp(config)).await
    }

    pub async fn scan(&self, filter: Option<ScanFilter>) -> WifiResult<()> {
        self.request_done(Command::Scan(filter)).await
    }

    pub async fn scan_multiple(&self, config: MultiScanConfig) -> WifiResult<()> {
        self.request_done(Command::ScanMultiple(config)).await
    }

    pub async fn set_bridge(&self, config: BridgeConfig) -> WifiResult<()> {
        self.request_done(Command::SetBridge(config)).await
    }

    pub async fn get_stats(&self) -> WifiResult<LinkStats> {
        match self.request(Command::GetStats).await? {
            Reply::Stats(stats) => Ok(stats),
            Reply::Done => Err(WifiError::Fail),
        }
    }

    pub async fn set_power_mode(&self, mode: PowerMode) -> WifiResult<()> {
        self.request_done(Command::SetPowerMode(mode)).await
    }

    /// Hands a driver notification to the manager task. Never waits for it
    /// to be processed.
    pub async fn post_driver_event(&self, event: DriverEvent) {
        self.driver_events.send(event).await;
    }

    /// Non-async variant for driver callbacks; `false` when the queue is full.
    pub fn try_post_driver_event(&self, event: DriverEvent) -> bool {
        match self.driver_events.try_send(event) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("wifi_mgr: driver event queue full");
                false
            }
        }
    }
}
