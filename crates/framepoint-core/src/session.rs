use tracing::{debug, warn};

use crate::bounds::{clamp_position, PanBounds};
use crate::metrics::ImageMetrics;
use crate::options::FramingOptions;
use crate::position::FramePosition;

/// A pointer location in the same units as the viewport side (usually pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Gesture input distilled from pointer/touch events.
///
/// `contact` distinguishes simultaneous touch points; the session tracks
/// exactly one active contact and ignores the rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Start { contact: u64, pos: PointerPos },
    Move { contact: u64, pos: PointerPos },
    End { contact: u64 },
    Cancel,
}

/// Drag-phase state.
///
/// The origin advances to the latest pointer position on every applied move,
/// so a drag that ran into the pan bounds resumes without jumping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { contact: u64, origin: PointerPos },
}

/// Observer for the lifetime of a drag.
///
/// `drag_started` fires exactly once on Idle→Dragging and `drag_ended`
/// exactly once on every exit path — gesture end, cancel, reset, confirm,
/// and session teardown. Frontends hook scoped resources (event listener
/// registration, cursor capture) here instead of tracking drag flags
/// themselves.
pub trait DragObserver {
    fn drag_started(&mut self) {}
    fn drag_ended(&mut self) {}
}

/// One open framing session: the image's metrics, the in-flight position,
/// and the drag state machine that mutates it.
///
/// All transitions are synchronous on the caller's thread. Confirmation
/// hands the position out for persistence; cancellation restores the last
/// confirmed value.
pub struct FramingSession {
    metrics: ImageMetrics,
    options: FramingOptions,
    position: FramePosition,
    confirmed: FramePosition,
    drag: DragState,
    viewport_side: f64,
    observer: Option<Box<dyn DragObserver>>,
}

impl FramingSession {
    /// Open a session. A previously saved position is healed into the current
    /// bounds rather than rejected — stale metrics and corrupted records
    /// self-repair without interrupting the user.
    pub fn new(
        metrics: ImageMetrics,
        saved: Option<FramePosition>,
        options: FramingOptions,
    ) -> Self {
        let position = match saved {
            Some(saved) => {
                let healed = clamp_position(saved, &metrics, &options);
                if healed != saved {
                    warn!(?saved, ?healed, "saved frame position out of bounds, re-clamped");
                }
                healed
            }
            None => FramePosition::default(),
        };
        Self {
            metrics,
            options,
            position,
            confirmed: position,
            drag: DragState::Idle,
            viewport_side: 1.0,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn DragObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Side length of the on-screen viewport, in pointer units. Drag deltas
    /// are normalized against this. Degenerate measurements are ignored the
    /// same way malformed gestures are.
    pub fn set_viewport_side(&mut self, side: f64) {
        if side.is_finite() && side > 0.0 {
            self.viewport_side = side;
        }
    }

    pub fn position(&self) -> FramePosition {
        self.position
    }

    pub fn metrics(&self) -> &ImageMetrics {
        &self.metrics
    }

    pub fn options(&self) -> FramingOptions {
        self.options
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Current pan bounds at the in-flight scale.
    pub fn bounds(&self) -> PanBounds {
        PanBounds::for_metrics(&self.metrics, self.position.scale)
    }

    /// Feed one gesture event through the state machine. Events for contacts
    /// other than the active one are dropped silently.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match (self.drag, event) {
            (DragState::Idle, GestureEvent::Start { contact, pos }) => {
                self.begin_drag(contact, pos);
            }
            (DragState::Dragging { contact, origin }, GestureEvent::Move { contact: c, pos })
                if c == contact =>
            {
                self.drag_to(contact, origin, pos);
            }
            (DragState::Dragging { contact, .. }, GestureEvent::End { contact: c })
                if c == contact =>
            {
                self.end_drag();
            }
            (_, GestureEvent::Cancel) => self.end_drag(),
            // Second contacts, moves for unknown contacts, stray ends.
            _ => {}
        }
    }

    /// Step the zoom in by one increment, re-clamping the focal point.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.position.scale + self.options.zoom_step);
    }

    /// Step the zoom out by one increment, re-clamping the focal point.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.position.scale - self.options.zoom_step);
    }

    /// Set the zoom directly. The focal point is re-clamped into the bounds
    /// of the new scale immediately — clamped, never re-centered — using the
    /// latest in-flight position, so zooming during an active drag cannot
    /// snap the view. Legal in any drag state.
    pub fn set_scale(&mut self, scale: f64) {
        let scale = self.options.clamp_scale(scale);
        self.position.scale = scale;
        self.position = PanBounds::for_metrics(&self.metrics, scale).clamp(self.position);
        debug!(scale, x = self.position.x, y = self.position.y, "scale changed");
    }

    /// Swap in new limits, bringing the current position along: the scale is
    /// clamped into the new zoom range and the focal point re-clamped.
    pub fn set_options(&mut self, options: FramingOptions) {
        self.options = options;
        self.set_scale(self.position.scale);
    }

    /// Restore the default position unconditionally, ending any active drag.
    pub fn reset(&mut self) {
        self.end_drag();
        self.position = FramePosition::default();
        debug!("position reset");
    }

    /// Commit the in-flight position: it becomes the value `cancel` restores,
    /// and is returned for the caller to persist.
    pub fn confirm(&mut self) -> FramePosition {
        self.end_drag();
        self.confirmed = self.position;
        self.position
    }

    /// Discard all in-progress changes, restoring the last confirmed
    /// position and tearing down any active drag.
    pub fn cancel(&mut self) {
        self.end_drag();
        self.position = self.confirmed;
    }

    fn begin_drag(&mut self, contact: u64, pos: PointerPos) {
        debug!(contact, x = pos.x, y = pos.y, "drag started");
        self.drag = DragState::Dragging {
            contact,
            origin: pos,
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.drag_started();
        }
    }

    fn drag_to(&mut self, contact: u64, origin: PointerPos, pos: PointerPos) {
        let dx = (pos.x - origin.x) / self.viewport_side * 100.0;
        let dy = (pos.y - origin.y) / self.viewport_side * 100.0;

        // Dragging the image right moves the focal point left.
        let moved = FramePosition {
            x: self.position.x - dx,
            y: self.position.y - dy,
            scale: self.position.scale,
        };
        self.position = self.bounds().clamp(moved);
        self.drag = DragState::Dragging {
            contact,
            origin: pos,
        };
    }

    fn end_drag(&mut self) {
        if self.is_dragging() {
            self.drag = DragState::Idle;
            debug!("drag ended");
            if let Some(observer) = self.observer.as_mut() {
                observer.drag_ended();
            }
        }
    }
}

impl Drop for FramingSession {
    fn drop(&mut self) {
        // Forced teardown releases an in-flight drag like any other exit.
        self.end_drag();
    }
}
