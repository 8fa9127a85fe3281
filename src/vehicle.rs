//! Encapsulation: attributes bundled with the only operations allowed to
//! change them.

use crate::clamp_str;
use crate::error::{DemoError, Result};
use std::io::{self, Write};

const NAME_LIMIT: usize = 31;
const ACCELERATION_STEP: f64 = 0.05;
const BRAKE_STEP: f64 = 0.07;
const CRUISE_SPEED: f64 = 80.0;

/// Largest amount [`Vehicle::refuel`] accepts.
pub const MAX_FUEL: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    name: String,
    speed: f64,
    fuel: f64,
}

impl Vehicle {
    /// Names longer than 31 bytes are cut at the last char boundary that fits.
    pub fn new(name: &str) -> Self {
        Self {
            name: clamp_str(name, NAME_LIMIT),
            speed: 0.0,
            fuel: 0.0,
        }
    }

    pub fn accelerate(&mut self) {
        self.speed += ACCELERATION_STEP;
        self.burn(1.0);
    }

    pub fn brake(&mut self) {
        self.speed = (self.speed - BRAKE_STEP).max(0.0);
        self.burn(2.0);
    }

    /// Replaces the fuel level; it does not add to it.
    ///
    /// Non-finite amounts and amounts above [`MAX_FUEL`] are rejected and
    /// leave the level unchanged.
    pub fn refuel(&mut self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount > MAX_FUEL {
            return Err(DemoError::InvalidFuel {
                amount: amount.to_string(),
                max: MAX_FUEL,
            });
        }
        self.fuel = amount;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    fn burn(&mut self, amount: f64) {
        self.fuel = (self.fuel - amount).max(0.0);
    }
}

/// Refuel, drive until the tank is empty, then coast to a stop.
///
/// Every step is reported to `out`. Returns the number of accelerate/brake
/// steps performed. A rejected fuel amount fails with
/// [`io::ErrorKind::InvalidInput`] before anything is written.
pub fn drive(vehicle: &mut Vehicle, fuel: f64, out: &mut dyn Write) -> io::Result<usize> {
    let mut steps = 0;
    vehicle
        .refuel(fuel)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    writeln!(
        out,
        "{} is refueled, the correct fuel level is {:.6}",
        vehicle.name(),
        vehicle.fuel()
    )?;

    while vehicle.fuel() > 0.0 {
        writeln!(out, "{} fuel level: {:.6}", vehicle.name(), vehicle.fuel())?;
        if vehicle.speed() < CRUISE_SPEED {
            vehicle.accelerate();
            writeln!(
                out,
                "{} has been accelerated to the speed: {:.6}",
                vehicle.name(),
                vehicle.speed()
            )?;
        } else {
            vehicle.brake();
            writeln!(
                out,
                "{} has been slowed down to the speed: {:.6}",
                vehicle.name(),
                vehicle.speed()
            )?;
        }
        steps += 1;
    }

    writeln!(out, "{} ran out of the fuel! Slowing down ...", vehicle.name())?;
    while vehicle.speed() > 0.0 {
        vehicle.brake();
        writeln!(
            out,
            "{} has been slowed down to the speed: {:.6}",
            vehicle.name(),
            vehicle.speed()
        )?;
        steps += 1;
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_is_empty_and_still() {
        let v = Vehicle::new("Renault");
        assert_eq!(v.name(), "Renault");
        assert_eq!(v.speed(), 0.0);
        assert_eq!(v.fuel(), 0.0);
    }

    #[test]
    fn test_name_is_truncated() {
        let long = "x".repeat(40);
        assert_eq!(Vehicle::new(&long).name().len(), 31);
    }

    #[test]
    fn test_refuel_sets_level() {
        let mut v = Vehicle::new("a");
        v.refuel(50.0).unwrap();
        v.refuel(20.0).unwrap();
        assert_eq!(v.fuel(), 20.0);
    }

    #[test]
    fn test_brake_clamps_at_zero() {
        let mut v = Vehicle::new("a");
        v.refuel(1.0).unwrap();
        v.brake();
        assert_eq!(v.speed(), 0.0);
        assert_eq!(v.fuel(), 0.0);
    }

    #[test]
    fn test_accelerate_burns_fuel() {
        let mut v = Vehicle::new("a");
        v.refuel(10.0).unwrap();
        v.accelerate();
        assert!((v.speed() - 0.05).abs() < 1e-9);
        assert_eq!(v.fuel(), 9.0);
    }

    #[test]
    fn test_drive_ends_stopped_and_empty() {
        let mut v = Vehicle::new("Renault");
        let mut out = Vec::new();
        let steps = drive(&mut v, 100.0, &mut out).unwrap();

        assert_eq!(v.speed(), 0.0);
        assert_eq!(v.fuel(), 0.0);
        assert!(steps > 100);

        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("Renault is refueled, the correct fuel level is 100.000000\n"));
        assert!(s.contains("Renault ran out of the fuel! Slowing down ...\n"));
        assert!(s.ends_with("Renault has been slowed down to the speed: 0.000000\n"));
    }

    #[test]
    fn test_refuel_rejects_unbounded_amounts() {
        let mut v = Vehicle::new("a");
        v.refuel(5.0).unwrap();
        for amount in [f64::INFINITY, f64::NAN, MAX_FUEL * 2.0, 1e16] {
            assert!(matches!(
                v.refuel(amount),
                Err(DemoError::InvalidFuel { .. })
            ));
        }
        assert_eq!(v.fuel(), 5.0);
        assert!(v.refuel(MAX_FUEL).is_ok());
    }

    #[test]
    fn test_drive_with_infinite_fuel_is_rejected() {
        let mut v = Vehicle::new("a");
        let mut out = Vec::new();
        let err = drive(&mut v, f64::INFINITY, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
        assert_eq!(v.fuel(), 0.0);
    }

    #[test]
    fn test_drive_with_full_tank_terminates() {
        let mut v = Vehicle::new("a");
        drive(&mut v, MAX_FUEL, &mut io::sink()).unwrap();
        assert_eq!(v.speed(), 0.0);
        assert_eq!(v.fuel(), 0.0);
    }

    #[test]
    fn test_drive_without_fuel_does_nothing() {
        let mut v = Vehicle::new("a");
        let mut out = Vec::new();
        assert_eq!(drive(&mut v, 0.0, &mut out).unwrap(), 0);
    }
}
