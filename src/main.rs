//! Encoder gate host simulator.
//!
//! Wires the gate exactly as the firmware does (board pin map, event
//! manager, listener registration) but against two simulated GPIO ports,
//! then replays a short activity script and logs what happened to every
//! encoder pull-up.
//!
//! ```text
//! cargo run --bin encoder-gate-sim -- [board.json]
//! ```
//!
//! `board.json` overrides the gating policy, e.g.
//! `{ "idle_triggers_gate": true, "sleep_triggers_gate": true }`.

use anyhow::{Context, Result};
use log::{info, warn};

use encoder_gate::activity::{ActivityState, ActivityStateChanged};
use encoder_gate::adapters::sim::SimController;
use encoder_gate::app::gate::EncoderPowerGate;
use encoder_gate::app::ports::GpioController;
use encoder_gate::config::GateConfig;
use encoder_gate::events::{Event, EventManager};
use encoder_gate::gpio::PullConfig;
use encoder_gate::pins::{ENCODER_A, ENCODER_PINS, Port};
use encoder_gate::version::firmware_version;

// ── Simulated board ───────────────────────────────────────────

struct Board {
    gpio0: SimController,
    gpio1: SimController,
}

impl Board {
    fn new() -> Self {
        Self {
            gpio0: SimController::new("gpio0"),
            gpio1: SimController::new("gpio1"),
        }
    }

    fn port(&self, port: Port) -> &SimController {
        match port {
            Port::Gpio0 => &self.gpio0,
            Port::Gpio1 => &self.gpio1,
        }
    }

    /// What the encoder driver does at boot: arm every input.
    fn arm_encoders(&self) -> Result<()> {
        for a in ENCODER_PINS {
            self.port(a.port)
                .configure(a.pin, PullConfig::PullUpEnabled.flags())
                .with_context(|| format!("arming {:?} pin {}", a.port, a.pin))?;
        }
        Ok(())
    }

    fn log_pulls(&self) {
        for a in ENCODER_PINS {
            let port = self.port(a.port);
            info!("    {}:{:<2} {:?}", port.label(), a.pin, port.pull(a.pin));
        }
    }
}

// ── Script ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Step {
    /// Activity tracker publishes a new state.
    Activity(ActivityState),
    /// Encoder A contact closes (`true`) or opens.
    Contact(bool),
    /// A key switch is pressed.
    Key(u32),
}

const SCRIPT: &[Step] = &[
    Step::Activity(ActivityState::Active),
    Step::Contact(true),
    Step::Activity(ActivityState::Asleep),
    Step::Activity(ActivityState::Active),
    Step::Contact(false),
    Step::Activity(ActivityState::Idle),
    Step::Activity(ActivityState::Asleep),
    Step::Key(12),
    Step::Activity(ActivityState::Active),
];

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    info!("encoder-gate-sim {}", firmware_version());

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            GateConfig::from_json(&json).with_context(|| format!("parsing {path}"))?
        }
        None => GateConfig::default(),
    };
    info!("Gate config: {:?}", config);

    let board = Board::new();
    board.arm_encoders()?;

    let mut gate = EncoderPowerGate::for_board(config, &board.gpio0, &board.gpio1)?;
    if gate.is_inert() {
        warn!("Both gating options are off; encoders stay powered");
    }

    let mut events: EventManager<'_, 4> = EventManager::new();
    events.register(&mut gate)?;

    for step in SCRIPT {
        let event = match *step {
            Step::Contact(closed) => {
                info!("encoder A contact {}", if closed { "closed" } else { "open" });
                board
                    .port(ENCODER_A.port)
                    .set_level(ENCODER_A.pin, closed)
                    .context("driving encoder A")?;
                continue;
            }
            Step::Activity(state) => Event::from(ActivityStateChanged::new(state)),
            Step::Key(position) => Event::PositionStateChanged { position, pressed: true },
        };

        info!("raise {:?}", event);
        if let Err(e) = events.raise(&event) {
            warn!("  not applied: {} (status {})", e, e.status_code());
        }
        board.log_pulls();
    }

    Ok(())
}
