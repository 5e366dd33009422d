mod completion;
mod engine;
mod events;
mod handle;
mod handlers;
mod machine;
mod types;


pub use completion::{Completion, CompletionSignal};
pub use engine::{ManagerInfo, WifiManager};
pub use events::{Command, DriverEvent, EventKind, WifiEvent, WifiMessage};
pub use types::{BridgeState, DisconnectCause, WifiState};
