//! Fixed-order simulation tick
//!
//! One call advances the whole world by `dt`: pointer edge first, then
//! integrate -> resolve walls -> resolve pairs, every body, every tick.

use super::collision::{resolve_pairs, resolve_walls};
use super::interact::PointerEvent;
use super::world::World;

/// Host input for a single tick.
///
/// At most one pointer edge per tick per gesture; the host forwards `Down`
/// and `Up` on the frames they occur and `None` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub pointer: Option<PointerEvent>,
}

/// Advance `world` by one timestep.
///
/// Order is fixed and load-bearing: interaction first (so a release this
/// frame affects this frame's motion), then integration for every body, then
/// wall resolution for every body, then the pairwise sweep. Bodies whose
/// state has gone non-finite are skipped and logged; they never abort the
/// tick for the rest.
pub fn tick(world: &mut World, input: &TickInput, dt: f64) {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("ignoring tick with invalid dt {dt}");
        return;
    }

    if let Some(event) = input.pointer {
        // Split borrow: the controller only touches the body slice.
        let World {
            ref mut controller,
            ref mut bodies,
            ..
        } = *world;
        controller.apply(bodies, event);
    }

    for (i, body) in world.bodies.iter_mut().enumerate() {
        if !body.is_finite() {
            log::warn!("skipping non-finite body {i}");
            continue;
        }
        body.integrate(dt);
        resolve_walls(body, &world.bounds);
    }

    resolve_pairs(&mut world.bodies);

    world.time_ticks += 1;
}
