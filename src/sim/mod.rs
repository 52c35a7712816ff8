//! The simulation core
//!
//! All physics lives here. This module is pure and deterministic:
//! - Fixed iteration order (ascending body index, ascending index pairs)
//! - Seeded RNG only (spawn time, never during ticks)
//! - No rendering or platform dependencies
//!
//! Tick order is fixed: integrate -> resolve walls -> resolve pairs.

pub mod body;
pub mod collision;
pub mod interact;
pub mod tick;
pub mod world;

pub use body::{Body, BodySnapshot};
pub use collision::{resolve_pair, resolve_pairs, resolve_walls};
pub use interact::{DragState, InteractionController, PointerEvent};
pub use tick::{TickInput, tick};
pub use world::{Bounds, World};
