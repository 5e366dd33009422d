use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::types::{Reply, WifiResult};

pub type CompletionSignal = Signal<CriticalSectionRawMutex, WifiResult<Reply>>;

/// One-shot handle a caller attaches to a command to learn its final outcome.
///
/// Consumed by [`Completion::complete`], so a handle is fulfilled at most once.
/// Dropping it unfulfilled leaves the caller waiting; the manager never does.
pub struct Completion {
    signal: &'static CompletionSignal,
}

impl core::fmt::Debug for Completion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Completion")
    }
}

impl Completion {
    pub const fn new(signal: &'static CompletionSignal) -> Self {
        Self { signal }
    }

    pub fn complete(self, result: WifiResult<Reply>) {
        self.signal.signal(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WifiError;

    #[test]
    fn completion_publishes_result_once() {
        static DONE: CompletionSignal = Signal::new();
        DONE.reset();
        Completion::new(&DONE).complete(Err(WifiError::Busy));
        assert!(matches!(DONE.try_take(), Some(Err(WifiError::Busy))));
        assert!(DONE.try_take().is_none());
    }
}
