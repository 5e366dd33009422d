/// Monotonic per-manager counters. All fields saturate at `u32::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WifiCounters {
    pub connect_requests: u32,
    pub connect_successes: u32,
    pub connect_failures: u32,
    pub disconnects: u32,
    pub softap_starts: u32,
    pub scans_started: u32,
    pub scans_done: u32,
    pub joins: u32,
    pub leaves: u32,
    pub rejected: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Counter {
    ConnectRequest,
    ConnectSuccess,
    ConnectFailure,
    Disconnect,
    SoftApStart,
    ScanStarted,
    ScanDone,
    Join,
    Leave,
    Rejected,
}

impl WifiCounters {
    pub(crate) fn bump(&mut self, counter: Counter) {
        let slot = match counter {
            Counter::ConnectRequest => &mut self.connect_requests,
            Counter::ConnectSuccess => &mut self.connect_successes,
            Counter::ConnectFailure => &mut self.connect_failures,
            Counter::Disconnect => &mut self.disconnects,
            Counter::SoftApStart => &mut self.softap_starts,
            Counter::ScanStarted => &mut self.scans_started,
            Counter::ScanDone => &mut self.scans_done,
            Counter::Join => &mut self.joins,
            Counter::Leave => &mut self.leaves,
            Counter::Rejected => &mut self.rejected,
        };
        *slot = slot.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_saturates() {
        let mut counters = WifiCounters {
            joins: u32::MAX,
            ..WifiCounters::default()
        };
        counters.bump(Counter::Join);
        counters.bump(Counter::Leave);
        assert_eq!(counters.joins, u32::MAX);
        assert_eq!(counters.leaves, 1);
    }
}
