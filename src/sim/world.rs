//! World state: arena bounds, body storage, deterministic spawning

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodySnapshot};
use super::interact::InteractionController;
use crate::config::SimConfig;
use crate::consts::{COLOR_CHANNEL_MIN, SPAWN_MARGIN};
use crate::error::{Error, Result};

/// The fixed axis-aligned arena rectangle, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidParam(
                "bounds must be finite and positive".into(),
            ));
        }
        Ok(Self { width, height })
    }

    /// True if a disc at `pos` with `radius` sits fully inside the arena.
    pub fn contains_disc(&self, pos: DVec2, radius: f64) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Complete simulation state: body storage, arena bounds, drag state.
///
/// One `World` owns everything a tick mutates; there are no ambient globals.
/// The body set is created once here and is fixed until the world is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub bounds: Bounds,
    /// All discs. Slot index is body identity.
    pub bodies: Vec<Body>,
    /// Drag gesture state machine.
    pub controller: InteractionController,
    /// Ticks advanced since construction.
    pub time_ticks: u64,
    /// Spawn seed, kept for reproducibility reporting.
    pub seed: u64,
}

impl World {
    /// Validate `config` and spawn its bodies with a seeded RNG.
    ///
    /// Radii are sampled first, then positions uniformly inside the arena
    /// with enough clearance that no body starts clipping a wall. Bodies may
    /// spawn overlapping each other; the pair resolver works that out over
    /// the first few ticks. The same seed always yields the same world.
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let bounds = Bounds::new(config.arena_width, config.arena_height)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let (r_min, r_max) = config.radius_range;
        let (v_min, v_max) = config.velocity_init_range;

        let mut bodies = Vec::with_capacity(config.num_bodies);
        for _ in 0..config.num_bodies {
            let radius = rng.random_range(r_min..=r_max);
            let margin = radius + SPAWN_MARGIN;
            let pos = DVec2::new(
                rng.random_range(margin..=bounds.width - margin),
                rng.random_range(margin..=bounds.height - margin),
            );
            let vel = DVec2::new(
                rng.random_range(v_min..=v_max),
                rng.random_range(v_min..=v_max),
            );
            let color = [
                rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
            ];
            bodies.push(Body::new(pos, vel, radius, config.restitution, color)?);
        }

        log::debug!(
            "world {}x{}: spawned {} bodies (seed {seed})",
            bounds.width,
            bounds.height,
            bodies.len()
        );

        Ok(Self {
            bounds,
            bodies,
            controller: InteractionController::new(config.drag_scale),
            time_ticks: 0,
            seed,
        })
    }

    /// Assemble a world from explicit bodies (scripted scenarios and tests).
    pub fn from_bodies(bounds: Bounds, bodies: Vec<Body>, drag_scale: f64) -> Result<Self> {
        if !drag_scale.is_finite() || drag_scale <= 0.0 {
            return Err(Error::InvalidParam(
                "drag_scale must be finite and > 0".into(),
            ));
        }
        Ok(Self {
            bounds,
            bodies,
            controller: InteractionController::new(drag_scale),
            time_ticks: 0,
            seed: 0,
        })
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Read-only render view of every body.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }
}
