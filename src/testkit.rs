//! Recording fakes for every collaborator, sharing one call journal.

use std::string::String;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::config::ManagerConfig;
use crate::manager::{Command, DriverEvent, WifiManager, WifiState};
use crate::platform::{
    Collaborators, DhcpClient, DhcpError, DhcpServer, DriverError, NodeInsert, Notification,
    NotificationKind, ProfileError, ProfileStore, SharedObserver, WifiDriver, WifiObserver,
};
use crate::types::{
    ssid_from_str, ApConfig, AuthType, LinkInfo, LinkStats, MultiScanConfig, PowerMode, Reply,
    ScanFilter, ScanRecord, ScanResults, SoftApConfig, StationRecord, WifiResult,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    DriverInit,
    DriverDeinit,
    StartStation,
    SetAutoconnect(bool),
    Connect(String),
    Disconnect,
    StartSoftAp(String),
    StopSoftAp,
    Scan,
    ScanMultiple(usize),
    ControlBridge(bool),
    GetStats,
    SetPowerMode(PowerMode),
    DhcpAcquire,
    DhcpRelease,
    DhcpServerStart,
    DhcpServerStop,
    AddNode([u8; 6]),
    RemoveNode([u8; 6]),
    ProfileInit,
    ProfileWrite(String),
    Notify(NotificationKind),
}

pub(crate) type Journal = Arc<Mutex<Vec<Call>>>;

/// Switches that make the next matching collaborator call fail.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Faults {
    pub(crate) driver_init: bool,
    pub(crate) driver_deinit: bool,
    pub(crate) connect: Option<DriverError>,
    pub(crate) disconnect: bool,
    pub(crate) start_softap: bool,
    pub(crate) stop_softap: bool,
    pub(crate) scan: bool,
    pub(crate) control_bridge: bool,
    pub(crate) get_stats: bool,
    pub(crate) dhcp_acquire: bool,
    pub(crate) dhcp_server_start: bool,
    pub(crate) profile_write: bool,
}

type SharedFaults = Arc<Mutex<Faults>>;

fn log_call(journal: &Journal, call: Call) {
    journal.lock().expect("journal").push(call);
}

fn faults(faults: &SharedFaults) -> Faults {
    *faults.lock().expect("faults")
}

fn fail_if(flag: bool) -> Result<(), DriverError> {
    if flag {
        Err(DriverError::Failed)
    } else {
        Ok(())
    }
}

struct FakeDriver {
    journal: Journal,
    faults: SharedFaults,
}

impl WifiDriver for FakeDriver {
    fn init(&mut self) -> Result<(), DriverError> {
        log_call(&self.journal, Call::DriverInit);
        fail_if(faults(&self.faults).driver_init)
    }

    fn deinit(&mut self) -> Result<(), DriverError> {
        log_call(&self.journal, Call::DriverDeinit);
        fail_if(faults(&self.faults).driver_deinit)
    }

    fn start_station(&mut self) -> Result<(), DriverError> {
        log_call(&self.journal, Call::StartStation);
        Ok(())
    }

    fn set_autoconnect(&mut self, enabled: bool) -> Result<(), DriverError> {
        log_call(&self.journal, Call::SetAutoconnect(enabled));
        Ok(())
    }

    fn connect(&mut self, config: &ApConfig) -> Result<(), DriverError> {
        log_call(&self.journal, Call::Connect(config.ssid.clone()));
        match faults(&self.faults).connect {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn disconnect(&mut self) -> Result<(), DriverError> {
        log_call(&self.journal, Call::Disconnect);
        fail_if(faults(&self.faults).disconnect)
    }

    fn start_softap(&mut self, config: &SoftApConfig) -> Result<(), DriverError> {
        log_call(&self.journal, Call::StartSoftAp(config.ssid.clone()));
        fail_if(faults(&self.faults).start_softap)
    }

    fn stop_softap(&mut self) -> Result<(), DriverError> {
        log_call(&self.journal, Call::StopSoftAp);
        fail_if(faults(&self.faults).stop_softap)
    }

    fn scan(&mut self, _filter: Option<&ScanFilter>) -> Result<(), DriverError> {
        log_call(&self.journal, Call::Scan);
        fail_if(faults(&self.faults).scan)
    }

    fn scan_multiple(&mut self, config: &MultiScanConfig) -> Result<(), DriverError> {
        log_call(&self.journal, Call::ScanMultiple(config.filters.len()));
        fail_if(faults(&self.faults).scan)
    }

    fn control_bridge(&mut self, enable: bool) -> Result<(), DriverError> {
        log_call(&self.journal, Call::ControlBridge(enable));
        fail_if(faults(&self.faults).control_bridge)
    }

    fn get_stats(&mut self) -> Result<LinkStats, DriverError> {
        log_call(&self.journal, Call::GetStats);
        fail_if(faults(&self.faults).get_stats)?;
        Ok(LinkStats {
            rx_cnt: 42,
            rssi_avg: -55,
            ..LinkStats::default()
        })
    }

    fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), DriverError> {
        log_call(&self.journal, Call::SetPowerMode(mode));
        Ok(())
    }
}

struct FakeDhcpClient {
    journal: Journal,
    faults: SharedFaults,
}

impl DhcpClient for FakeDhcpClient {
    fn acquire(&mut self) -> Result<[u8; 4], DhcpError> {
        log_call(&self.journal, Call::DhcpAcquire);
        if faults(&self.faults).dhcp_acquire {
            return Err(DhcpError::Timeout);
        }
        Ok([192, 168, 1, 20])
    }

    fn release(&mut self) {
        log_call(&self.journal, Call::DhcpRelease);
    }
}

struct FakeDhcpServer {
    journal: Journal,
    faults: SharedFaults,
    leased: Vec<[u8; 6]>,
}

impl DhcpServer for FakeDhcpServer {
    fn start(&mut self) -> Result<(), DhcpError> {
        log_call(&self.journal, Call::DhcpServerStart);
        if faults(&self.faults).dhcp_server_start {
            return Err(DhcpError::Failed);
        }
        Ok(())
    }

    fn stop(&mut self) {
        log_call(&self.journal, Call::DhcpServerStop);
        self.leased.clear();
    }

    fn add_node(&mut self, node: &StationRecord) -> NodeInsert {
        log_call(&self.journal, Call::AddNode(node.mac));
        if self.leased.contains(&node.mac) {
            return NodeInsert::Exists;
        }
        self.leased.push(node.mac);
        NodeInsert::Added
    }

    fn remove_node(&mut self, node: &StationRecord) {
        log_call(&self.journal, Call::RemoveNode(node.mac));
        self.leased.retain(|mac| *mac != node.mac);
    }
}

struct FakeProfiles {
    journal: Journal,
    faults: SharedFaults,
}

impl ProfileStore for FakeProfiles {
    fn init(&mut self) -> Result<(), ProfileError> {
        log_call(&self.journal, Call::ProfileInit);
        Ok(())
    }

    fn write(&mut self, config: &ApConfig) -> Result<(), ProfileError> {
        log_call(&self.journal, Call::ProfileWrite(config.ssid.clone()));
        if faults(&self.faults).profile_write {
            return Err(ProfileError::Io);
        }
        Ok(())
    }
}

pub(crate) struct RecordingObserver {
    journal: Journal,
}

impl WifiObserver for RecordingObserver {
    fn on_notification(&self, notification: &Notification<'_>) {
        log_call(&self.journal, Call::Notify(notification.kind()));
    }
}

pub(crate) struct Rig {
    pub(crate) manager: WifiManager,
    pub(crate) observer: SharedObserver,
    journal: Journal,
    faults: SharedFaults,
}

pub(crate) fn collaborators(journal: &Journal, shared: &SharedFaults) -> Collaborators {
    Collaborators::new(
        Box::new(FakeDriver {
            journal: journal.clone(),
            faults: shared.clone(),
        }),
        Box::new(FakeDhcpClient {
            journal: journal.clone(),
            faults: shared.clone(),
        }),
        Box::new(FakeDhcpServer {
            journal: journal.clone(),
            faults: shared.clone(),
            leased: Vec::new(),
        }),
    )
    .with_profiles(Box::new(FakeProfiles {
        journal: journal.clone(),
        faults: shared.clone(),
    }))
}

pub(crate) fn rig(config: ManagerConfig) -> Rig {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let shared: SharedFaults = Arc::new(Mutex::new(Faults::default()));
    let observer: SharedObserver = Arc::new(RecordingObserver {
        journal: journal.clone(),
    });
    Rig {
        manager: WifiManager::new(config, collaborators(&journal, &shared)),
        observer,
        journal,
        faults: shared,
    }
}

impl Rig {
    pub(crate) fn state(&self) -> WifiState {
        self.manager.state()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.journal.lock().expect("journal").clone()
    }

    /// Drains the journal so a scenario can assert on one step at a time.
    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.journal.lock().expect("journal"))
    }

    pub(crate) fn notifications(&self) -> Vec<NotificationKind> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Notify(kind) => Some(kind),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn inject(&self, apply: impl FnOnce(&mut Faults)) {
        apply(&mut self.faults.lock().expect("faults"));
    }

    pub(crate) fn command(&mut self, command: Command) -> WifiResult<Reply> {
        self.manager.command(command)
    }

    pub(crate) fn post(&mut self, event: DriverEvent) -> WifiResult<Reply> {
        self.manager.post(event)
    }

    pub(crate) fn init(&mut self) {
        let observer = self.observer.clone();
        assert!(self.command(Command::Init(Some(observer))).is_ok());
        assert_eq!(self.state(), WifiState::StationDisconnected);
    }

    pub(crate) fn connect(&mut self) {
        self.init();
        assert!(self.command(Command::Connect(home_ap())).is_ok());
        assert!(self
            .post(DriverEvent::StationConnected(link("home")))
            .is_ok());
        assert_eq!(self.state(), WifiState::StationConnected);
    }

    pub(crate) fn softap(&mut self) {
        self.init();
        assert!(self.command(Command::SetSoftAp(lobby_ap())).is_ok());
        assert_eq!(self.state(), WifiState::SoftAp);
    }
}

pub(crate) fn home_ap() -> ApConfig {
    ApConfig::new("home", "correct-horse")
}

pub(crate) fn lobby_ap() -> SoftApConfig {
    SoftApConfig::new("lobby", "guest-pass", 6)
}

pub(crate) fn link(ssid: &str) -> LinkInfo {
    LinkInfo {
        channel: 6,
        ..LinkInfo::new(ssid)
    }
}

pub(crate) fn station(last: u8) -> StationRecord {
    StationRecord {
        mac: [0x02, 0, 0, 0, 0, last],
        ipv4: Some([192, 168, 4, last]),
    }
}

pub(crate) fn scan_results(count: usize) -> ScanResults {
    let mut results = ScanResults::new();
    for index in 0..count {
        let record = ScanRecord {
            ssid: ssid_from_str(&format!("net-{}", index)),
            bssid: [0, 0, 0, 0, 0, index as u8],
            rssi: -40 - index as i8,
            channel: 1,
            auth: AuthType::Wpa2Psk,
        };
        results.push(record).expect("scan capacity");
    }
    results
}
