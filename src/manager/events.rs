use super::completion::Completion;
use crate::platform::SharedObserver;
use crate::types::{
    ApConfig, BridgeConfig, DisconnectReason, LinkInfo, MultiScanConfig, PowerMode, ScanFilter,
    ScanResults, SoftApConfig, StationRecord,
};

/// Request issued by the application.
#[derive(Clone)]
pub enum Command {
    Init(Option<SharedObserver>),
    Deinit,
    Connect(ApConfig),
    Disconnect,
    SetStation,
    SetSoftAp(SoftApConfig),
    Scan(Option<ScanFilter>),
    ScanMultiple(MultiScanConfig),
    SetBridge(BridgeConfig),
    GetStats,
    SetPowerMode(PowerMode),
}

/// Notification posted by the radio driver. Never carries a completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    StationConnected(LinkInfo),
    StationConnectFailed(DisconnectReason),
    StationDisconnected(DisconnectReason),
    ScanDone(ScanResults),
    Joined(StationRecord),
    /// Join announcement from the address server once the peer holds a lease.
    AddressAssigned(StationRecord),
    Left(StationRecord),
}

#[derive(Clone)]
pub enum WifiEvent {
    Command(Command),
    Driver(DriverEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Init,
    Deinit,
    Connect,
    Disconnect,
    SetStation,
    SetSoftAp,
    Scan,
    ScanMultiple,
    SetBridge,
    GetStats,
    SetPowerMode,
    StationConnected,
    StationConnectFailed,
    StationDisconnected,
    ScanDone,
    Joined,
    AddressAssigned,
    Left,
}

impl EventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Deinit => "deinit",
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::SetStation => "set_station",
            Self::SetSoftAp => "set_softap",
            Self::Scan => "scan",
            Self::ScanMultiple => "scan_multiple",
            Self::SetBridge => "set_bridge",
            Self::GetStats => "get_stats",
            Self::SetPowerMode => "set_power_mode",
            Self::StationConnected => "sta_connected",
            Self::StationConnectFailed => "sta_connect_failed",
            Self::StationDisconnected => "sta_disconnected",
            Self::ScanDone => "scan_done",
            Self::Joined => "joined",
            Self::AddressAssigned => "address_assigned",
            Self::Left => "left",
        }
    }
}

impl Command {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Init(_) => EventKind::Init,
            Self::Deinit => EventKind::Deinit,
            Self::Connect(_) => EventKind::Connect,
            Self::Disconnect => EventKind::Disconnect,
            Self::SetStation => EventKind::SetStation,
            Self::SetSoftAp(_) => EventKind::SetSoftAp,
            Self::Scan(_) => EventKind::Scan,
            Self::ScanMultiple(_) => EventKind::ScanMultiple,
            Self::SetBridge(_) => EventKind::SetBridge,
            Self::GetStats => EventKind::GetStats,
            Self::SetPowerMode(_) => EventKind::SetPowerMode,
        }
    }
}

impl DriverEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::StationConnected(_) => EventKind::StationConnected,
            Self::StationConnectFailed(_) => EventKind::StationConnectFailed,
            Self::StationDisconnected(_) => EventKind::StationDisconnected,
            Self::ScanDone(_) => EventKind::ScanDone,
            Self::Joined(_) => EventKind::Joined,
            Self::AddressAssigned(_) => EventKind::AddressAssigned,
            Self::Left(_) => EventKind::Left,
        }
    }
}

impl WifiEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Command(command) => command.kind(),
            Self::Driver(event) => event.kind(),
        }
    }
}

/// Unit of work consumed by the manager: an event plus the optional handle
/// the sender waits on.
pub enum WifiMessage {
    Command {
        command: Command,
        completion: Option<Completion>,
    },
    Driver(DriverEvent),
}

impl WifiMessage {
    pub fn command(command: Command) -> Self {
        Self::Command {
            command,
            completion: None,
        }
    }

    pub fn with_completion(command: Command, completion: Completion) -> Self {
        Self::Command {
            command,
            completion: Some(completion),
        }
    }

    pub fn driver(event: DriverEvent) -> Self {
        Self::Driver(event)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Command { command, .. } => command.kind(),
            Self::Driver(event) => event.kind(),
        }
    }

    pub(crate) fn into_parts(self) -> (WifiEvent, Option<Completion>) {
        match self {
            Self::Command {
                command,
                completion,
            } => (WifiEvent::Command(command), completion),
            Self::Driver(event) => (WifiEvent::Driver(event), None),
        }
    }
}
