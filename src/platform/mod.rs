//! Seams between the connection manager and the rest of the system.
//!
//! The manager owns one boxed implementation of each collaborator and only
//! calls them from inside a dispatch.

mod callbacks;
mod dhcp;
mod driver;
mod profile;

use alloc::boxed::Box;

pub use callbacks::{
    CallbackRegistry, Notification, NotificationKind, ObserverRegistry, RegistryError,
    SharedObserver, WifiObserver,
};
pub use dhcp::{DhcpClient, DhcpError, DhcpServer, NodeInsert};
pub use driver::{DriverError, WifiDriver};
pub use profile::{NullProfileStore, ProfileError, ProfileStore};

pub struct Collaborators {
    pub driver: Box<dyn WifiDriver>,
    pub dhcp_client: Box<dyn DhcpClient>,
    pub dhcp_server: Box<dyn DhcpServer>,
    pub callbacks: Box<dyn CallbackRegistry>,
    pub profiles: Box<dyn ProfileStore>,
}

impl Collaborators {
    /// Bundles the mandatory collaborators with the default observer registry
    /// and no profile persistence.
    pub fn new(
        driver: Box<dyn WifiDriver>,
        dhcp_client: Box<dyn DhcpClient>,
        dhcp_server: Box<dyn DhcpServer>,
    ) -> Self {
        Self {
            driver,
            dhcp_client,
            dhcp_server,
            callbacks: Box::new(ObserverRegistry::new()),
            profiles: Box::new(NullProfileStore),
        }
    }

    pub fn with_callbacks(mut self, callbacks: Box<dyn CallbackRegistry>) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn with_profiles(mut self, profiles: Box<dyn ProfileStore>) -> Self {
        self.profiles = profiles;
        self
    }
}
