#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod manager;
pub mod platform;
pub mod runtime;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod testkit;

pub use config::ManagerConfig;
pub use manager::{
    BridgeState, Command, Completion, CompletionSignal, DisconnectCause, DriverEvent, EventKind,
    ManagerInfo, WifiManager, WifiMessage, WifiState,
};
pub use runtime::{run_wifi_manager_task, DriverEventChannel, WifiClient, WifiRequestChannel};
pub use types::{Reply, WifiError, WifiResult};
