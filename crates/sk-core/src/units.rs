//! Built-in spawnable object kinds.
//!
//! These are placeholder units: their behavior is a stand-in for real
//! game logic, and `render` just prints the kind name. They exist so
//! the registry, loader, and game loop have something to drive out of
//! the box; real games register their own kinds alongside or instead.

use crate::object::GameObject;
use crate::registry::SpawnRegistry;

/// A fixed-wing aircraft.
#[derive(Debug, Default)]
pub struct Plane {
    altitude: u32,
}

impl GameObject for Plane {
    fn kind(&self) -> &str {
        "plane"
    }

    fn move_in_game(&mut self) {
        self.altitude += 1;
    }

    fn render(&mut self) {
        println!("plane");
    }
}

/// A watercraft.
#[derive(Debug, Default)]
pub struct Boat {
    heading: f32,
}

impl GameObject for Boat {
    fn kind(&self) -> &str {
        "boat"
    }

    fn move_in_game(&mut self) {
        self.heading = (self.heading + 15.0) % 360.0;
    }

    fn render(&mut self) {
        println!("boat");
    }
}

/// A very small ground unit.
#[derive(Debug, Default)]
pub struct Ant {
    steps: u32,
}

impl GameObject for Ant {
    fn kind(&self) -> &str {
        "ant"
    }

    fn update(&mut self) {
        self.steps += 1;
    }

    fn render(&mut self) {
        println!("ant");
    }
}

/// Register all built-in kinds under their canonical names.
///
/// This is the registry bootstrap: call it once during startup, before
/// loading any manifest.
pub fn register_builtins(registry: &mut SpawnRegistry) {
    registry.register("plane", || Box::new(Plane::default()));
    registry.register("boat", || Box::new(Boat::default()));
    registry.register("ant", || Box::new(Ant::default()));
}
