use alloc::sync::Arc;

use heapless::Vec;

use crate::config::OBSERVERS_MAX;
use crate::types::{DisconnectReason, LinkInfo, ScanResults, StationRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Connected,
    ConnectFailed,
    Disconnected,
    Joined,
    Left,
    ScanDone,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::ConnectFailed => "connect_failed",
            Self::Disconnected => "disconnected",
            Self::Joined => "joined",
            Self::Left => "left",
            Self::ScanDone => "scan_done",
        }
    }
}

/// Externally observable outcome, borrowed from the message that caused it.
#[derive(Clone, Copy, Debug)]
pub enum Notification<'a> {
    Connected(&'a LinkInfo),
    ConnectFailed(DisconnectReason),
    Disconnected(DisconnectReason),
    Joined(&'a StationRecord),
    Left(&'a StationRecord),
    ScanDone(&'a ScanResults),
}

impl Notification<'_> {
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Connected(_) => NotificationKind::Connected,
            Self::ConnectFailed(_) => NotificationKind::ConnectFailed,
            Self::Disconnected(_) => NotificationKind::Disconnected,
            Self::Joined(_) => NotificationKind::Joined,
            Self::Left(_) => NotificationKind::Left,
            Self::ScanDone(_) => NotificationKind::ScanDone,
        }
    }
}

/// Application hook. Called synchronously from the manager's dispatch, so
/// implementations must not block and must not feed messages back in-line.
pub trait WifiObserver: Send + Sync {
    fn on_notification(&self, notification: &Notification<'_>);
}

pub type SharedObserver = Arc<dyn WifiObserver>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
    Full,
}

pub trait CallbackRegistry {
    fn register(&mut self, observer: SharedObserver) -> Result<(), RegistryError>;
    fn unregister_all(&mut self);
    fn notify(&self, notification: &Notification<'_>);
}

/// Fixed-capacity fan-out to every registered observer, in registration order.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<SharedObserver, OBSERVERS_MAX>,
}

impl ObserverRegistry {
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl CallbackRegistry for ObserverRegistry {
    fn register(&mut self, observer: SharedObserver) -> Result<(), RegistryError> {
        self.observers
            .push(observer)
            .map_err(|_| RegistryError::Full)
    }

    fn unregister_all(&mut self) {
        self.observers.clear();
    }

    fn notify(&self, notification: &Notification<'_>) {
        for observer in &self.observers {
            observer.on_notification(notification);
        }
    }
}
