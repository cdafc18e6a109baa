//! Drag session state machine
//!
//! Owns the lifecycle of a single pointer-driven drag gesture: `Idle` until
//! a pointer-down on a card moves past the activation distance, `Dragging`
//! until release. The session snapshots the dragged task by id only; live
//! data is read fresh from the store at drop time. Nothing here mutates a
//! task - a completed gesture just yields a [`DropEvent`] for the dispatcher.

use crate::types::TaskId;

/// Movement required before a pointer-down becomes a drag, in the host's
/// coordinate units. Keeps plain clicks from lifting a card.
pub const ACTIVATION_DISTANCE: f32 = 8.0;

/// A pointer position in the host's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The drag session state, exposed to the view layer for highlighting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
    },
}

/// A completed gesture: the dragged task and the raw id of whatever the
/// pointer was released over (a column id or another card's task id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub task_id: TaskId,
    pub target: String,
}

/// Pointer-gesture state machine for the board
#[derive(Debug, Default)]
pub struct DragManager {
    state: DragState,
    /// Pointer-down below the activation threshold: candidate drag origin
    pressed: Option<(TaskId, Point)>,
    /// Current candidate drop target while dragging
    hover: Option<String>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for highlighting the lifted card
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The task being dragged, if a session is active
    pub fn active_task(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging { task_id } => Some(task_id),
            DragState::Idle => None,
        }
    }

    /// The current candidate drop target, for highlighting only
    pub fn hover_target(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    /// Pointer pressed on a card. Does not start a session by itself.
    pub fn pointer_down(&mut self, task_id: TaskId, at: Point) {
        if self.state == DragState::Idle {
            self.pressed = Some((task_id, at));
        }
    }

    /// Pointer moved. Returns true on the move that activates the session.
    pub fn pointer_move(&mut self, to: Point) -> bool {
        let Some((task_id, origin)) = &self.pressed else {
            return false;
        };
        if origin.distance(to) < ACTIVATION_DISTANCE {
            return false;
        }
        let task_id = task_id.clone();
        tracing::debug!(task_id = %task_id, "drag started");
        self.pressed = None;
        self.state = DragState::Dragging { task_id };
        true
    }

    /// Pointer is over a candidate drop target (or none). Ignored unless a
    /// session is active; never mutates anything.
    pub fn drag_over(&mut self, target: Option<&str>) {
        if matches!(self.state, DragState::Dragging { .. }) {
            self.hover = target.map(String::from);
        }
    }

    /// Pointer released. Consumes the session and returns a [`DropEvent`]
    /// when the release happened over a target; `None` means the gesture
    /// was a plain click or an abandoned drag (card returns to origin).
    pub fn release(&mut self) -> Option<DropEvent> {
        self.pressed = None;
        let hover = self.hover.take();
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging { task_id } => {
                tracing::debug!(task_id = %task_id, target = ?hover, "drag ended");
                hover.map(|target| DropEvent { task_id, target })
            }
        }
    }
}
