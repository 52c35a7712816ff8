//! Simulation parameters
//!
//! Everything tunable about a run lives in [`SimConfig`]; the host builds one
//! (or deserializes it), and [`crate::sim::World::new`] validates it before
//! spawning bodies.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Parameters for constructing a [`crate::sim::World`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of discs to spawn (fixed for the world's lifetime).
    pub num_bodies: usize,
    /// Arena width in world units.
    pub arena_width: f64,
    /// Arena height in world units.
    pub arena_height: f64,
    /// Inclusive (min, max) range for spawned disc radii.
    pub radius_range: (f64, f64),
    /// Coefficient of restitution shared by all discs, in (0, 1].
    pub restitution: f64,
    /// Inclusive (min, max) range each spawned velocity component is drawn from.
    pub velocity_init_range: (f64, f64),
    /// Divisor applied to the drag-release displacement when injecting velocity.
    pub drag_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_bodies: DEFAULT_NUM_BODIES,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            radius_range: (DEFAULT_RADIUS_MIN, DEFAULT_RADIUS_MAX),
            restitution: DEFAULT_RESTITUTION,
            velocity_init_range: (-DEFAULT_INIT_SPEED, DEFAULT_INIT_SPEED),
            drag_scale: DEFAULT_DRAG_SCALE,
        }
    }
}

impl SimConfig {
    /// Check every parameter before any body is constructed.
    pub fn validate(&self) -> Result<()> {
        if self.num_bodies == 0 {
            return Err(Error::InvalidConfig("num_bodies must be >= 1".into()));
        }
        if !self.arena_width.is_finite() || self.arena_width <= 0.0 {
            return Err(Error::InvalidConfig(
                "arena_width must be finite and > 0".into(),
            ));
        }
        if !self.arena_height.is_finite() || self.arena_height <= 0.0 {
            return Err(Error::InvalidConfig(
                "arena_height must be finite and > 0".into(),
            ));
        }
        let (r_min, r_max) = self.radius_range;
        if !r_min.is_finite() || !r_max.is_finite() || r_min <= 0.0 || r_min > r_max {
            return Err(Error::InvalidConfig(
                "radius_range must satisfy 0 < min <= max".into(),
            ));
        }
        // Largest spawnable disc must fit inside the arena with its margin.
        let needed = 2.0 * (r_max + SPAWN_MARGIN);
        if self.arena_width <= needed || self.arena_height <= needed {
            return Err(Error::InvalidConfig(format!(
                "arena {}x{} too small for max radius {} plus spawn margin {}",
                self.arena_width, self.arena_height, r_max, SPAWN_MARGIN
            )));
        }
        if !self.restitution.is_finite() || self.restitution <= 0.0 || self.restitution > 1.0 {
            return Err(Error::InvalidConfig(
                "restitution must be in (0, 1]".into(),
            ));
        }
        let (v_min, v_max) = self.velocity_init_range;
        if !v_min.is_finite() || !v_max.is_finite() || v_min > v_max {
            return Err(Error::InvalidConfig(
                "velocity_init_range must satisfy min <= max".into(),
            ));
        }
        if !self.drag_scale.is_finite() || self.drag_scale <= 0.0 {
            return Err(Error::InvalidConfig(
                "drag_scale must be finite and > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_bodies() {
        let cfg = SimConfig {
            num_bodies: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_restitution() {
        for r in [0.0, -0.5, 1.5, f64::NAN] {
            let cfg = SimConfig {
                restitution: r,
                ..Default::default()
            };
            assert!(cfg.validate().is_err(), "restitution {r} should be rejected");
        }
    }

    #[test]
    fn rejects_inverted_radius_range() {
        let cfg = SimConfig {
            radius_range: (30.0, 10.0),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_arena_smaller_than_largest_disc() {
        let cfg = SimConfig {
            arena_width: 50.0,
            arena_height: 50.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
