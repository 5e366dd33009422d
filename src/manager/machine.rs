use heapless::Vec;
use statig::prelude::*;

use super::completion::Completion;
use super::events::{Command, EventKind, WifiEvent};
use super::handle::ManagerHandle;
use super::types::WifiState;
use crate::config::ManagerConfig;
use crate::platform::Collaborators;
use crate::telemetry::{Counter, ErrorCode, ErrorRecord, WifiCounters};
use crate::types::{PowerMode, Reply, WifiError, WifiResult};

const FAULTS_PER_DISPATCH: usize = 4;

/// Shared storage of the state machine: the persistent handle plus the
/// collaborators the handlers drive.
pub(crate) struct WifiHsm {
    pub(crate) handle: ManagerHandle,
    pub(crate) config: ManagerConfig,
    pub(crate) platform: Collaborators,
    pub(crate) counters: WifiCounters,
}

/// Per-message scratch passed through `handle_with_context`.
pub(crate) struct DispatchContext {
    pub(crate) kind: EventKind,
    /// Inbound completion. A handler takes it to park it; whatever is left
    /// is settled by the router with `result`.
    pub(crate) completion: Option<Completion>,
    pub(crate) result: WifiResult<Reply>,
    pub(crate) faults: Vec<ErrorRecord, FAULTS_PER_DISPATCH>,
}

impl DispatchContext {
    pub(crate) fn new(kind: EventKind, completion: Option<Completion>) -> Self {
        Self {
            kind,
            completion,
            result: Ok(Reply::Done),
            faults: Vec::new(),
        }
    }
}

/// Outcome of one handler: the result for the caller and the state to enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Dispatch {
    pub(crate) result: WifiResult<Reply>,
    pub(crate) next: Option<WifiState>,
}

impl Dispatch {
    pub(crate) const fn done() -> Self {
        Self {
            result: Ok(Reply::Done),
            next: None,
        }
    }

    pub(crate) const fn reply(reply: Reply) -> Self {
        Self {
            result: Ok(reply),
            next: None,
        }
    }

    pub(crate) const fn reject(error: WifiError) -> Self {
        Self {
            result: Err(error),
            next: None,
        }
    }

    pub(crate) const fn enter(next: WifiState) -> Self {
        Self {
            result: Ok(Reply::Done),
            next: Some(next),
        }
    }

    /// Transition that happens even though the request failed.
    pub(crate) const fn forced(next: WifiState, error: WifiError) -> Self {
        Self {
            result: Err(error),
            next: Some(next),
        }
    }

    pub(crate) const fn with_result(next: WifiState, result: WifiResult<Reply>) -> Self {
        Self {
            result,
            next: Some(next),
        }
    }
}

type Handler = fn(&mut WifiHsm, &mut DispatchContext, &WifiEvent) -> Dispatch;

impl WifiHsm {
    pub(crate) fn new(config: ManagerConfig, platform: Collaborators) -> Self {
        Self {
            handle: ManagerHandle::new(),
            config: config.sanitized(),
            platform,
            counters: WifiCounters::default(),
        }
    }

    fn route(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
        handler: Handler,
    ) -> Outcome<State> {
        let dispatch = match event {
            WifiEvent::Command(Command::GetStats) => self.read_stats(context),
            WifiEvent::Command(Command::SetPowerMode(mode)) => {
                self.apply_power_mode(context, *mode)
            }
            _ => handler(self, context, event),
        };
        self.settle(context, dispatch)
    }

    fn settle(&mut self, context: &mut DispatchContext, dispatch: Dispatch) -> Outcome<State> {
        context.result = dispatch.result;
        let Some(next) = dispatch.next else {
            return Handled;
        };
        let from = self.handle.state;
        self.handle.enter(next);
        if from == next {
            return Handled;
        }
        log::info!(
            "wifi_mgr: state {} -> {} trigger={}",
            from.as_str(),
            next.as_str(),
            context.kind.as_str()
        );
        Transition(hsm_state(next))
    }

    fn read_stats(&mut self, context: &mut DispatchContext) -> Dispatch {
        match self.platform.driver.get_stats() {
            Ok(stats) => Dispatch::reply(Reply::Stats(stats)),
            Err(err) => {
                log::error!("wifi_mgr: get_stats failed err={}", err);
                self.fault(context, ErrorCode::DriverFail);
                Dispatch::reject(WifiError::Fail)
            }
        }
    }

    fn apply_power_mode(&mut self, context: &mut DispatchContext, mode: PowerMode) -> Dispatch {
        match self.platform.driver.set_power_mode(mode) {
            Ok(()) => Dispatch::done(),
            Err(err) => {
                log::error!("wifi_mgr: set_power_mode failed mode={:?} err={}", mode, err);
                self.fault(context, ErrorCode::DriverFail);
                Dispatch::reject(WifiError::Fail)
            }
        }
    }

    /// Notes a diagnostic against the state the event arrived in.
    pub(crate) fn fault(&self, context: &mut DispatchContext, code: ErrorCode) {
        let record = ErrorRecord {
            code,
            state: self.handle.state,
            event: context.kind,
        };
        let _ = context.faults.push(record);
    }

    /// Rejects an event that is not legal in the current state.
    pub(crate) fn invalid(&mut self, context: &mut DispatchContext, error: WifiError) -> Dispatch {
        log::warn!(
            "wifi_mgr: reject event={} state={} result={}",
            context.kind.as_str(),
            self.handle.state.as_str(),
            error
        );
        self.counters.bump(Counter::Rejected);
        self.fault(context, ErrorCode::InvalidEvent);
        Dispatch::reject(error)
    }
}

fn hsm_state(state: WifiState) -> State {
    match state {
        WifiState::Uninitialized => State::uninitialized(),
        WifiState::StationDisconnected => State::station_disconnected(),
        WifiState::StationConnecting => State::station_connecting(),
        WifiState::StationConnected => State::station_connected(),
        WifiState::StationDisconnecting => State::station_disconnecting(),
        WifiState::SoftAp => State::soft_ap(),
        WifiState::Scanning => State::scanning(),
        WifiState::Bridge => State::bridge(),
    }
}

#[state_machine(initial = "State::uninitialized()")]
impl WifiHsm {
    #[state]
    fn uninitialized(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Outcome<State> {
        self.route(context, event, Self::on_uninitialized)
    }

    #[state]
    fn station_disconnected(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Outcome<State> {
        self.route(context, event, Self::on_station_disconnected)
    }

    #[state]
    fn station_connecting(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Outcome<State> {
        self.route(context, event, Self::on_station_connecting)
    }

    #[state]
    fn station_connected(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Outcome<State> {
        self.route(context, event, Self::on_station_connected)
    }

    #[state]
    fn station_disconnecting(
        &mut self,
        context: &mut DispatchContext,
        event: &WifiEvent,
    ) -> Outcome<State> {
        self.route(context, event, Self::on_station_disconnecting)
    }

    #[state]
    fn soft_ap(&mut self, context: &mut DispatchContext, event: &WifiEvent) -> Outcome<State> {
        self.route(context, event, Self::on_soft_ap)
    }

    #[state]
    fn scanning(&mut self, context: &mut DispatchContext, event: &WifiEvent) -> Outcome<State> {
        self.route(context, event, Self::on_scanning)
    }

    #[state]
    fn bridge(&mut self, context: &mut DispatchContext, event: &WifiEvent) -> Outcome<State> {
        self.route(context, event, Self::on_bridge)
    }
}
