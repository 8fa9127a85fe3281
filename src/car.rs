//! Composition: a car that owns its engine.
//!
//! The engine is created with the car and destroyed with it. No reference to
//! it ever leaves this module, so the only way to change its state is through
//! the car's own behavior.

use crate::engine::{Engine, EngineState};
use log::debug;

#[derive(Debug)]
pub struct Car {
    engine: Box<Engine>,
}

impl Car {
    /// Build a car together with a switched-off engine.
    pub fn new() -> Self {
        Self {
            engine: Box::new(Engine::new()),
        }
    }

    pub fn start(&mut self) {
        self.engine.turn_on();
    }

    pub fn stop(&mut self) {
        self.engine.turn_off();
    }

    /// Reads the temperature through the engine's public interface.
    pub fn engine_temperature(&self) -> f64 {
        self.engine.temperature()
    }

    pub fn is_running(&self) -> bool {
        self.engine.state() == EngineState::On
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Car {
    // The boxed engine is dropped right after this body, before the car
    // itself is released.
    fn drop(&mut self) {
        debug!("destroying car and its engine");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ENGINES_DROPPED;

    fn engines_dropped() -> usize {
        ENGINES_DROPPED.with(|count| count.get())
    }

    #[test]
    fn test_engine_is_destroyed_with_car() {
        let before = engines_dropped();
        let mut car = Car::new();
        car.start();
        car.stop();
        assert_eq!(engines_dropped(), before);

        drop(car);
        assert_eq!(engines_dropped(), before + 1);
    }

    #[test]
    fn test_new_car_is_stopped() {
        let car = Car::new();
        assert!(!car.is_running());
        assert_eq!(car.engine_temperature(), 15.0);
    }

    #[test]
    fn test_start_and_stop_delegate_to_engine() {
        let mut car = Car::new();
        car.start();
        assert!(car.is_running());
        assert_eq!(car.engine_temperature(), 75.0);

        car.start();
        assert_eq!(car.engine_temperature(), 75.0);

        car.stop();
        assert!(!car.is_running());
        assert_eq!(car.engine_temperature(), 15.0);
    }
}
