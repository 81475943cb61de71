use rand::Rng;

use crate::history::HistoryPoint;
use crate::session::SessionState;
use crate::util::round2;

/// Wall-clock cadence of the simulation tick.
pub const TICK_RATE_MS: u64 = 2000;

/// Simulated hours added per tick.
const RUNTIME_HOURS_PER_TICK: f64 = 0.1;
/// Progress ramp per tick, capped at 100.
const PROGRESS_PER_TICK: f64 = 2.0;

const ENERGY_MIN_KWH: f64 = 0.5;
const ENERGY_MAX_KWH: f64 = 2.5;
const CARBON_MIN_KG: f64 = 0.2;
const CARBON_MAX_KG: f64 = 1.2;

/// Whether ticks are currently scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Mode {
    Idle,
    Running,
}

/// Owns the session record and its externally triggered transitions.
///
/// All operations are total: none can fail, and `tick` outside `Running`
/// is a no-op, so a stray tick after `stop`/`reset` cannot advance state.
#[derive(Debug)]
pub struct Engine {
    pub state: SessionState,
    mode: Mode,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: SessionState::default(),
            mode: Mode::Idle,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    /// Idle -> Running; no-op when already running.
    pub fn start(&mut self) {
        self.mode = Mode::Running;
    }

    /// Running -> Idle; no-op when already idle.
    pub fn stop(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Restore the default record and force Idle.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.mode = Mode::Idle;
    }

    /// One state advance. Only effective while Running; never changes mode,
    /// even when progress reaches 100.
    pub fn tick(&mut self) {
        if self.mode != Mode::Running {
            return;
        }

        let mut rng = rand::thread_rng();
        let state = &mut self.state;

        state.runtime_hours += RUNTIME_HOURS_PER_TICK;
        state.energy_rate_kwh = rng.gen_range(ENERGY_MIN_KWH..=ENERGY_MAX_KWH);
        state.carbon_rate_kg = rng.gen_range(CARBON_MIN_KG..=CARBON_MAX_KG);
        state.progress_percent = (state.progress_percent + PROGRESS_PER_TICK).min(100.0);

        state.history.push(HistoryPoint::new(
            time_label(state.runtime_hours),
            round2(state.energy_rate_kwh),
            round2(state.carbon_rate_kg),
        ));
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// "HH:MM" from simulated hours: whole minutes, zero-padded, hours not
/// wrapped at 24.
pub fn time_label(hours: f64) -> String {
    let total_minutes = (hours * 60.0).floor() as u64;
    let hrs = total_minutes / 60;
    let mins = total_minutes % 60;
    format!("{:02}:{:02}", hrs, mins)
}
