//! Ballpit - an embeddable 2D bouncing-disc physics core
//!
//! Core modules:
//! - `sim`: the simulation itself (bodies, collision resolvers, drag
//!   interaction, fixed-order tick)
//! - `config`: data-driven simulation parameters
//! - `error`: crate-wide error type
//!
//! The crate does no rendering, windowing, or I/O. A host render loop owns a
//! [`sim::World`], calls [`sim::tick`] once per frame with a `dt` and at most
//! one pointer edge, and draws from [`sim::World::snapshot`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use sim::{Body, BodySnapshot, Bounds, PointerEvent, TickInput, World, tick};

/// Simulation constants
pub mod consts {
    /// Suggested fixed timestep for hosts driving the sim at 120 Hz.
    pub const SIM_DT: f64 = 1.0 / 120.0;

    /// Area density used to derive mass from radius (`mass = radius² · density`).
    pub const DISC_DENSITY: f64 = 1.0;

    /// Extra wall clearance applied when spawning bodies, on top of the
    /// body's own radius.
    pub const SPAWN_MARGIN: f64 = 20.0;

    /// Arena defaults
    pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

    /// Body defaults
    pub const DEFAULT_NUM_BODIES: usize = 10;
    pub const DEFAULT_RADIUS_MIN: f64 = 10.0;
    pub const DEFAULT_RADIUS_MAX: f64 = 30.0;
    pub const DEFAULT_RESTITUTION: f64 = 0.9;
    pub const DEFAULT_INIT_SPEED: f64 = 2.0;

    /// Divisor applied to the release displacement when a drag gesture
    /// injects velocity (`vel = (release − center) / DRAG_SCALE`).
    pub const DEFAULT_DRAG_SCALE: f64 = 5.0;

    /// Random color channels are sampled in `COLOR_CHANNEL_MIN..=255` so
    /// bodies stay visible on a dark background.
    pub const COLOR_CHANNEL_MIN: u8 = 50;
}
