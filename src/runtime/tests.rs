use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_futures::select::{select, Either};
use embassy_futures::yield_now;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use super::{run_wifi_manager_task, DriverEventChannel, WifiClient, WifiRequestChannel};
use crate::config::ManagerConfig;
use crate::manager::{CompletionSignal, DriverEvent, WifiState};
use crate::testkit::{home_ap, link, lobby_ap, rig, Call};
use crate::types::{DisconnectReason, PowerMode, WifiError};

#[test]
fn client_round_trip_through_task() {
    static REQUESTS: WifiRequestChannel = Channel::new();
    static EVENTS: DriverEventChannel = Channel::new();
    static DONE: CompletionSignal = Signal::new();

    let mut rig = rig(ManagerConfig::defaults());
    let observer = rig.observer.clone();
    let client = WifiClient::new(&REQUESTS, &EVENTS, &DONE);

    let outcome = block_on(select(
        run_wifi_manager_task(&mut rig.manager, &REQUESTS, &EVENTS),
        async {
            client.init(Some(observer)).await?;
            client.connect(home_ap()).await?;
            client
                .post_driver_event(DriverEvent::StationConnected(link("home")))
                .await;
            let stats = client.get_stats().await?;
            Ok::<_, WifiError>(stats)
        },
    ));
    let stats = match outcome {
        Either::First(_) => unreachable!("manager task never returns"),
        Either::Second(stats) => stats,
    };

    assert!(matches!(stats, Ok(stats) if stats.rx_cnt == 42));
    assert_eq!(rig.state(), WifiState::StationConnected);
    assert!(rig.calls().contains(&Call::GetStats));
}

#[test]
fn disconnect_waits_for_driver_confirmation() {
    static REQUESTS: WifiRequestChannel = Channel::new();
    static EVENTS: DriverEventChannel = Channel::new();
    static DONE: CompletionSignal = Signal::new();

    let mut rig = rig(ManagerConfig::defaults());
    rig.connect();
    let client = WifiClient::new(&REQUESTS, &EVENTS, &DONE);

    let outcome = block_on(select(
        run_wifi_manager_task(&mut rig.manager, &REQUESTS, &EVENTS),
        join(client.disconnect(), async {
            // Let the disconnect request reach the manager first.
            yield_now().await;
            client
                .post_driver_event(DriverEvent::StationDisconnected(DisconnectReason(8)))
                .await;
        }),
    ));
    let (result, ()) = match outcome {
        Either::First(_) => unreachable!("manager task never returns"),
        Either::Second(done) => done,
    };

    assert!(result.is_ok());
    assert_eq!(rig.state(), WifiState::StationDisconnected);
}

#[test]
fn rejected_command_reaches_caller() {
    static REQUESTS: WifiRequestChannel = Channel::new();
    static EVENTS: DriverEventChannel = Channel::new();
    static DONE: CompletionSignal = Signal::new();

    let mut rig = rig(ManagerConfig::defaults());
    let client = WifiClient::new(&REQUESTS, &EVENTS, &DONE);

    let outcome = block_on(select(
        run_wifi_manager_task(&mut rig.manager, &REQUESTS, &EVENTS),
        async {
            let early = client.set_softap(lobby_ap()).await;
            let power = client.set_power_mode(PowerMode::Enable).await;
            (early, power)
        },
    ));
    let (early, power) = match outcome {
        Either::First(_) => unreachable!("manager task never returns"),
        Either::Second(results) => results,
    };

    assert!(matches!(early, Err(WifiError::Fail)));
    assert!(power.is_ok());
    assert_eq!(rig.state(), WifiState::Uninitialized);
}

#[test]
fn try_post_reports_full_queue() {
    static REQUESTS: WifiRequestChannel = Channel::new();
    static EVENTS: DriverEventChannel = Channel::new();
    static DONE: CompletionSignal = Signal::new();

    let client = WifiClient::new(&REQUESTS, &EVENTS, &DONE);
    let event = DriverEvent::StationDisconnected(DisconnectReason::UNSPECIFIED);
    for _ in 0..crate::config::WIFI_REQUEST_QUEUE_DEPTH {
        assert!(client.try_post_driver_event(event.clone()));
    }
    assert!(!client.try_post_driver_event(event));
}
