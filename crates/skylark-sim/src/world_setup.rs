//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use skylark_core::components::*;
use skylark_core::config::StartConditions;

/// Spawn the player's aircraft from the given start conditions.
pub fn spawn_aircraft(world: &mut World, start: &StartConditions) -> hecs::Entity {
    world.spawn((
        Aircraft,
        start.flight_state(),
        LandingGear {
            down: start.landing_gear_down,
        },
    ))
}

/// Find the player's aircraft, if one has been spawned.
pub fn find_aircraft(world: &World) -> Option<hecs::Entity> {
    world
        .query::<&Aircraft>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}
