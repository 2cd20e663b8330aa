//! Integration tests for the gate registered as a listener on the
//! [`EventManager`].

use crate::mock_gpio::MockGpio;

use encoder_gate::activity::{ActivityState, ActivityStateChanged};
use encoder_gate::app::gate::EncoderPowerGate;
use encoder_gate::config::GateConfig;
use encoder_gate::error::{Error, Result};
use encoder_gate::events::{Event, EventKind, EventManager, Listener};
use encoder_gate::gpio::PullConfig;

/// Listener that subscribes to everything and records what it saw.
struct Recorder {
    seen: Vec<EventKind>,
}

impl Listener for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[
            EventKind::ActivityStateChanged,
            EventKind::PositionStateChanged,
            EventKind::BatteryStateChanged,
        ]
    }

    fn on_event(&mut self, event: &Event) -> Result<()> {
        self.seen.push(event.kind());
        Ok(())
    }
}

fn activity(state: ActivityState) -> Event {
    ActivityStateChanged::new(state).into()
}

const SLEEP_ONLY: GateConfig = GateConfig {
    idle_triggers_gate: false,
    sleep_triggers_gate: true,
};

#[test]
fn gate_only_receives_activity_events() {
    let (gpio0, gpio1) = (MockGpio::new("gpio0"), MockGpio::new("gpio1"));
    let mut gate = EncoderPowerGate::for_board(SLEEP_ONLY, &gpio0, &gpio1).unwrap();
    let mut recorder = Recorder { seen: Vec::new() };

    {
        let mut events: EventManager<'_, 4> = EventManager::new();
        events.register(&mut gate).unwrap();
        events.register(&mut recorder).unwrap();

        events.raise(&Event::PositionStateChanged { position: 1, pressed: true }).unwrap();
        events.raise(&Event::BatteryStateChanged { percent: 12 }).unwrap();
        assert!(gpio0.calls().is_empty() && gpio1.calls().is_empty());

        events.raise(&activity(ActivityState::Asleep)).unwrap();
    }

    assert_eq!(gpio1.pull(0), Some(PullConfig::PullUpDisabled));
    assert_eq!(gpio0.pull(22), Some(PullConfig::PullUpDisabled));
    assert_eq!(recorder.seen.len(), 3);
}

#[test]
fn inert_gate_is_never_invoked() {
    let (gpio0, gpio1) = (MockGpio::new("gpio0"), MockGpio::new("gpio1"));
    let inert = GateConfig {
        idle_triggers_gate: false,
        sleep_triggers_gate: false,
    };
    let mut gate = EncoderPowerGate::for_board(inert, &gpio0, &gpio1).unwrap();

    let mut events: EventManager<'_, 2> = EventManager::new();
    events.register(&mut gate).unwrap();

    // A direct call would refuse Asleep; through the manager nothing happens.
    assert_eq!(events.raise(&activity(ActivityState::Asleep)), Ok(()));
    assert_eq!(events.raise(&activity(ActivityState::Active)), Ok(()));
    assert!(gpio0.calls().is_empty() && gpio1.calls().is_empty());
}

#[test]
fn gate_error_stops_later_listeners() {
    let (gpio0, gpio1) = (MockGpio::new("gpio0"), MockGpio::new("gpio1"));
    let mut gate = EncoderPowerGate::for_board(SLEEP_ONLY, &gpio0, &gpio1).unwrap();
    let mut recorder = Recorder { seen: Vec::new() };

    {
        let mut events: EventManager<'_, 4> = EventManager::new();
        events.register(&mut gate).unwrap();
        events.register(&mut recorder).unwrap();

        let bogus = Event::ActivityStateChanged(ActivityStateChanged { state: 42 });
        assert_eq!(events.raise(&bogus), Err(Error::InvalidArgument { state: 42 }));
    }

    assert!(recorder.seen.is_empty());
}

#[test]
fn earlier_listener_sees_event_first() {
    let (gpio0, gpio1) = (MockGpio::new("gpio0"), MockGpio::new("gpio1"));
    gpio1.fail_configure(0);
    let mut gate = EncoderPowerGate::for_board(SLEEP_ONLY, &gpio0, &gpio1).unwrap();
    let mut recorder = Recorder { seen: Vec::new() };

    {
        let mut events: EventManager<'_, 4> = EventManager::new();
        events.register(&mut recorder).unwrap();
        events.register(&mut gate).unwrap();

        let result = events.raise(&activity(ActivityState::Active));
        assert!(matches!(result, Err(Error::Unsupported(_))));
    }

    assert_eq!(recorder.seen, vec![EventKind::ActivityStateChanged]);
}
