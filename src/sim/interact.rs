//! Drag-and-release interaction
//!
//! Maps host pointer edges onto body selection and velocity injection. This
//! controller is the only code allowed to flip `Body::selected` or overwrite
//! a velocity outside the resolvers, which is what keeps the "at most one
//! selected body" invariant easy to audit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;

/// A pointer edge forwarded by the host, at most one per tick per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Button pressed at an arena position.
    Down(DVec2),
    /// Button released at an arena position.
    Up(DVec2),
}

/// Controller state: `Idle -> Selecting -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag is in progress on `bodies[index]`.
    Selecting { index: usize },
}

/// Drag gesture state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionController {
    state: DragState,
    /// Divisor applied to the release displacement when injecting velocity.
    drag_scale: f64,
}

impl InteractionController {
    pub fn new(drag_scale: f64) -> Self {
        Self {
            state: DragState::Idle,
            drag_scale,
        }
    }

    /// Current state (render hosts use this to draw the aim line).
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Index of the body being dragged, if any.
    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            DragState::Selecting { index } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Dispatch one pointer edge.
    pub fn apply(&mut self, bodies: &mut [Body], event: PointerEvent) {
        match event {
            PointerEvent::Down(at) => self.pointer_down(bodies, at),
            PointerEvent::Up(at) => self.pointer_up(bodies, at),
        }
    }

    /// Press at `at`: select the first body (iteration order) whose disc
    /// contains the point. No z-order beyond that; overlapping discs go to
    /// the lower index. A press during an active drag is ignored so two
    /// bodies can never be selected at once.
    pub fn pointer_down(&mut self, bodies: &mut [Body], at: DVec2) {
        if self.state != DragState::Idle {
            return;
        }
        if let Some(index) = bodies.iter().position(|b| b.contains(at)) {
            bodies[index].selected = true;
            self.state = DragState::Selecting { index };
            log::trace!("drag start: body {index} at {at}");
        }
    }

    /// Release at `at`: overwrite the dragged body's velocity with
    /// `(at - pos) / drag_scale`, using the body's position *now* — the body
    /// kept integrating and colliding during the drag, on purpose. Then clear
    /// selection. A release with nothing selected is a no-op.
    pub fn pointer_up(&mut self, bodies: &mut [Body], at: DVec2) {
        let DragState::Selecting { index } = self.state else {
            return;
        };
        if let Some(body) = bodies.get_mut(index) {
            body.vel = (at - body.pos) / self.drag_scale;
            body.selected = false;
            log::trace!("drag release: body {index}, vel {}", body.vel);
        }
        self.state = DragState::Idle;
    }
}
