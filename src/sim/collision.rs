//! Wall and disc-disc collision resolution
//!
//! Two resolvers, both run once per body / per unordered pair each tick:
//!
//! - [`resolve_walls`] clamps a disc back inside the arena and reflects the
//!   normal velocity component, scaled by restitution.
//! - [`resolve_pair`] separates two overlapping discs and exchanges momentum
//!   with the 1-D elastic formula applied per axis. This is intentionally not
//!   a normal/tangential projection: the per-axis form is the specified
//!   behavior, and the tests below are written against it.
//!
//! The pair sweep is O(n²) with no broad phase, which is fine for the body
//! counts this crate targets. A spatial grid is the extension point if that
//! ever changes; it must not alter the per-pair semantics here.

use glam::DVec2;

use super::body::Body;
use super::world::Bounds;

/// Resolve one disc against all four arena walls.
///
/// Each axis is handled independently, so a disc driven into a corner
/// reflects off both walls in the same tick. The tangential component is
/// never touched (frictionless walls). Pure state mutation, no allocation.
pub fn resolve_walls(body: &mut Body, bounds: &Bounds) {
    if body.pos.x - body.radius < 0.0 {
        body.pos.x = body.radius;
        body.vel.x = -body.vel.x * body.restitution;
    } else if body.pos.x + body.radius > bounds.width {
        body.pos.x = bounds.width - body.radius;
        body.vel.x = -body.vel.x * body.restitution;
    }

    if body.pos.y - body.radius < 0.0 {
        body.pos.y = body.radius;
        body.vel.y = -body.vel.y * body.restitution;
    } else if body.pos.y + body.radius > bounds.height {
        body.pos.y = bounds.height - body.radius;
        body.vel.y = -body.vel.y * body.restitution;
    }
}

/// Resolve the unordered pair `(i, j)`, `i < j`. No effect unless the discs
/// touch or overlap.
///
/// Positional correction displaces body `i` only, by the full overlap along
/// the direction away from body `j`. The asymmetry is deliberate and kept:
/// splitting the correction would change trajectories the tests pin down.
/// Coincident centers fall back to the +x axis so no NaN can propagate.
///
/// Velocities are exchanged with the 1-D elastic collision formula per axis,
/// reading both pre-collision velocities before writing either, which
/// conserves per-axis momentum exactly.
pub fn resolve_pair(bodies: &mut [Body], i: usize, j: usize) {
    debug_assert!(i < j, "pairs are visited in ascending index order");
    let (head, tail) = bodies.split_at_mut(j);
    let a = &mut head[i];
    let b = &mut tail[0];

    let delta = b.pos - a.pos;
    let d = delta.length();
    let sum_r = a.radius + b.radius;
    if d > sum_r {
        return;
    }

    let overlap = sum_r - d;
    let dir = if d > 0.0 { delta / d } else { DVec2::X };
    a.pos -= overlap * dir;

    let (va, vb) = (a.vel, b.vel);
    let (ma, mb) = (a.mass, b.mass);
    let total = ma + mb;
    a.vel = (va * (ma - mb) + 2.0 * mb * vb) / total;
    b.vel = (vb * (mb - ma) + 2.0 * ma * va) / total;
}

/// Sweep every unordered pair once, in ascending index order.
///
/// A body moved by an earlier pair is seen at its updated position by later
/// pairs, so clusters chain-resolve within one tick. Resolution order affects
/// exact trajectories; the ascending order makes it reproducible.
/// Non-finite bodies are skipped (the tick logs them).
pub fn resolve_pairs(bodies: &mut [Body]) {
    let n = bodies.len();
    for i in 0..n {
        if !bodies[i].is_finite() {
            continue;
        }
        for j in (i + 1)..n {
            if !bodies[j].is_finite() {
                continue;
            }
            resolve_pair(bodies, i, j);
        }
    }
}
