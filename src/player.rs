//! Aggregation: a player borrows a gun that somebody else owns.
//!
//! The player keeps at most a shared reference. Picking up, shooting and
//! dropping never change who owns the gun, so the gun outlives any player
//! that happened to hold it.

use crate::error::{DemoError, Result};
use log::{info, warn};
use std::cell::Cell;

/// Anything a [`Player`] can fire.
pub trait Trigger {
    fn trigger(&self);
}

#[derive(Debug)]
pub struct Gun {
    name: String,
    shots_fired: Cell<u32>,
}

impl Gun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shots_fired: Cell::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired.get()
    }
}

impl Trigger for Gun {
    fn trigger(&self) {
        self.shots_fired.set(self.shots_fired.get().saturating_add(1));
        info!("{} fired (shot #{})", self.name, self.shots_fired.get());
    }
}

pub struct Player<'g> {
    name: String,
    gun: Option<&'g dyn Trigger>,
}

impl<'g> Player<'g> {
    /// A player starts empty-handed.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            gun: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_gun(&self) -> bool {
        self.gun.is_some()
    }

    pub fn pickup_gun(&mut self, gun: &'g dyn Trigger) {
        self.gun = Some(gun);
    }

    /// Fire the held gun, or report that there is nothing to fire.
    pub fn shoot(&self) -> Result<()> {
        match self.gun {
            Some(gun) => {
                gun.trigger();
                Ok(())
            }
            None => {
                warn!("{} wants to shoot but has no gun", self.name);
                Err(DemoError::MissingDependency {
                    owner: self.name.clone(),
                    dependency: "gun",
                })
            }
        }
    }

    /// Let go of the gun. The gun itself is left untouched.
    pub fn drop_gun(&mut self) {
        self.gun = None;
    }
}
