//! Disc bodies and their render snapshot

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::DISC_DENSITY;
use crate::error::{Error, Result};

/// A circular rigid body.
///
/// Bodies are point masses with a radius: no spin, no torque. Mass is derived
/// from the radius at construction (`radius² · DISC_DENSITY`) and never changes.
/// Identity is the body's slot in [`super::World::bodies`]; the set is fixed
/// for the world's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Disc radius (> 0).
    pub radius: f64,
    /// Derived mass (> 0), constant after construction.
    pub mass: f64,
    /// Fraction of normal speed retained on a wall bounce, in (0, 1].
    pub restitution: f64,
    /// RGB assigned at creation, never changed.
    pub color: [u8; 3],
    /// Set only by the interaction controller during a drag gesture.
    pub selected: bool,
}

impl Body {
    /// Create a body after validating invariants.
    ///
    /// Errors with [`Error::InvalidParam`] if `radius` is non-positive,
    /// `restitution` lies outside (0, 1], or any coordinate is non-finite.
    pub fn new(
        pos: DVec2,
        vel: DVec2,
        radius: f64,
        restitution: f64,
        color: [u8; 3],
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !restitution.is_finite() || restitution <= 0.0 || restitution > 1.0 {
            return Err(Error::InvalidParam("restitution must be in (0, 1]".into()));
        }
        if !pos.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !vel.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            mass: radius * radius * DISC_DENSITY,
            restitution,
            color,
            selected: false,
        })
    }

    /// Advance position by one explicit Euler step: `pos += vel * dt`.
    ///
    /// First-order on purpose; wall and pair resolution dominate the visual
    /// behavior at the timesteps this crate targets.
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Hit test: is `point` inside (or on the edge of) this disc?
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    /// Kinetic energy `½ m |v|²` (diagnostics and tests).
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// True while position and velocity are both finite. Bodies that fail
    /// this are skipped by the tick rather than poisoning the rest.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            pos: self.pos,
            radius: self.radius,
            color: self.color,
            selected: self.selected,
        }
    }
}

/// Per-body render state handed to the host each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub pos: DVec2,
    pub radius: f64,
    pub color: [u8; 3],
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_derives_mass_from_radius() {
        let b = Body::new(DVec2::new(1.0, 2.0), DVec2::ZERO, 10.0, 0.9, [255, 0, 0]).unwrap();
        assert_eq!(b.mass, 100.0);
        assert!(!b.selected);
    }

    #[test]
    fn rejects_nonpositive_radius() {
        for r in [0.0, -1.0, f64::NAN] {
            let err = Body::new(DVec2::ZERO, DVec2::ZERO, r, 0.9, [0, 0, 0]).unwrap_err();
            assert!(err.to_string().contains("radius"), "radius {r}");
        }
    }

    #[test]
    fn rejects_restitution_outside_unit_interval() {
        for e in [0.0, -0.1, 1.1] {
            assert!(Body::new(DVec2::ZERO, DVec2::ZERO, 5.0, e, [0, 0, 0]).is_err());
        }
        // Perfectly elastic is allowed.
        assert!(Body::new(DVec2::ZERO, DVec2::ZERO, 5.0, 1.0, [0, 0, 0]).is_ok());
    }

    #[test]
    fn rejects_nonfinite_coordinates() {
        assert!(Body::new(DVec2::new(f64::INFINITY, 0.0), DVec2::ZERO, 5.0, 0.9, [0; 3]).is_err());
        assert!(Body::new(DVec2::ZERO, DVec2::new(0.0, f64::NAN), 5.0, 0.9, [0; 3]).is_err());
    }

    #[test]
    fn integrate_is_euler() {
        let mut b = Body::new(DVec2::new(10.0, 20.0), DVec2::new(3.0, -4.0), 5.0, 0.9, [0; 3])
            .unwrap();
        b.integrate(2.0);
        assert_eq!(b.pos, DVec2::new(16.0, 12.0));
        // Velocity untouched by integration.
        assert_eq!(b.vel, DVec2::new(3.0, -4.0));
    }

    #[test]
    fn contains_includes_edge() {
        let b = Body::new(DVec2::ZERO, DVec2::ZERO, 5.0, 0.9, [0; 3]).unwrap();
        assert!(b.contains(DVec2::new(5.0, 0.0)));
        assert!(b.contains(DVec2::new(3.0, 3.0)));
        assert!(!b.contains(DVec2::new(5.1, 0.0)));
    }

    #[test]
    fn kinetic_energy_computed() {
        // radius 2 -> mass 4; v = (3, 4) -> |v|² = 25; KE = 50
        let b = Body::new(DVec2::ZERO, DVec2::new(3.0, 4.0), 2.0, 0.9, [0; 3]).unwrap();
        assert!((b.kinetic_energy() - 50.0).abs() < 1e-12);
    }
}
