//! Fuzz target: `EncoderPowerGate::handle_status`
//!
//! Byte 0 picks the gating policy, every following byte pair is one step:
//! the first byte drives the two encoder levels, the second is delivered as
//! a raw activity state.  Checks that the gate never panics, only ever
//! returns the documented status codes, that Active always re-arms, and
//! that an inert policy refuses everything.
//!
//! cargo fuzz run fuzz_activity_events

#![no_main]

use encoder_gate::activity::ActivityStateChanged;
use encoder_gate::adapters::sim::SimController;
use encoder_gate::app::gate::EncoderPowerGate;
use encoder_gate::config::GateConfig;
use encoder_gate::events::Event;
use encoder_gate::gpio::PullConfig;
use encoder_gate::pins::{ENCODER_A, ENCODER_B, ENCODER_PINS, Port};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&policy, steps)) = data.split_first() else {
        return;
    };
    let config = GateConfig {
        idle_triggers_gate: policy & 0b01 != 0,
        sleep_triggers_gate: policy & 0b10 != 0,
    };

    let gpio0 = SimController::new("gpio0");
    let gpio1 = SimController::new("gpio1");
    let port = |p| match p {
        Port::Gpio0 => &gpio0,
        Port::Gpio1 => &gpio1,
    };
    let Ok(mut gate) = EncoderPowerGate::for_board(config, &gpio0, &gpio1) else {
        return;
    };

    for step in steps.chunks_exact(2) {
        let (levels, raw) = (step[0], step[1]);
        let _ = port(ENCODER_A.port).set_level(ENCODER_A.pin, levels & 0b01 != 0);
        let _ = port(ENCODER_B.port).set_level(ENCODER_B.pin, levels & 0b10 != 0);

        let event = Event::ActivityStateChanged(ActivityStateChanged { state: raw });
        let status = gate.handle_status(&event);
        assert!(matches!(status, 0 | -134 | -22), "unexpected status {status}");

        if config.is_inert() {
            assert_eq!(status, -22, "inert gate refuses every state");
        } else if raw == 0 {
            assert_eq!(status, 0, "sim controllers never fail");
            for a in ENCODER_PINS {
                assert_eq!(port(a.port).pull(a.pin), Some(PullConfig::PullUpEnabled));
            }
        }
    }
});
