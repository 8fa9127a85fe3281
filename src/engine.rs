//! A two-state engine whose temperature follows its state.

use log::debug;

#[cfg(test)]
thread_local! {
    /// Number of engines dropped on the current thread.
    pub(crate) static ENGINES_DROPPED: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

const TEMPERATURE_ON: f64 = 75.0;
const TEMPERATURE_OFF: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    On,
    Off,
}

/// Engine state machine. Temperature is 75 when on and 15 when off.
#[derive(Debug)]
pub struct Engine {
    state: EngineState,
    temperature: f64,
}

impl Engine {
    /// A cold engine that is switched off.
    pub fn new() -> Self {
        Self {
            state: EngineState::Off,
            temperature: TEMPERATURE_OFF,
        }
    }

    /// Switch on. Does nothing when already running.
    pub fn turn_on(&mut self) {
        if self.state == EngineState::On {
            return;
        }
        self.state = EngineState::On;
        self.temperature = TEMPERATURE_ON;
        debug!("engine on, temperature {}", self.temperature);
    }

    /// Switch off. Does nothing when already stopped.
    pub fn turn_off(&mut self) {
        if self.state == EngineState::Off {
            return;
        }
        self.state = EngineState::Off;
        self.temperature = TEMPERATURE_OFF;
        debug!("engine off, temperature {}", self.temperature);
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn state(&self) -> EngineState {
        self.state
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        debug!("engine destroyed in state {:?}", self.state);
        #[cfg(test)]
        ENGINES_DROPPED.with(|count| count.set(count.get() + 1));
    }
}
