mod channels;
mod client;
mod task;

#[cfg(test)]
mod tests;

pub use channels::{DriverEventChannel, WifiRequestChannel};
pub use client::WifiClient;
pub use task::run_wifi_manager_task;
