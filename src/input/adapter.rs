use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use super::handler::{InputHandler, KeyAction};
use super::pending::PendingDirection;
use super::swipe::{SwipeTracker, terminal_to_surface};
use crate::game::{Direction, SessionState};

/// Turns raw key presses and mouse drags into at most one pending direction.
///
/// Directional input is dropped unless the session is running. Reversals are
/// passed through untouched; the engine decides whether to apply them.
pub struct InputAdapter {
    handler: InputHandler,
    swipe: SwipeTracker,
    swipe_threshold: f32,
    pending: PendingDirection,
}

impl InputAdapter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            swipe_threshold,
            pending: PendingDirection::new(),
        }
    }

    /// Route a key press. Steering lands in the pending slot; session
    /// controls are handed back to the caller.
    pub fn on_key(&mut self, key: KeyEvent, session: SessionState) -> KeyAction {
        let action = self.handler.handle_key_event(key);
        if let KeyAction::Steer(direction) = action {
            self.steer(direction, session);
        }
        action
    }

    /// Left-button press starts a swipe, release finishes it
    pub fn on_mouse(&mut self, event: MouseEvent, session: SessionState) {
        let (x, y) = terminal_to_surface(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.begin(x, y),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.end(x, y, self.swipe_threshold) {
                    self.steer(direction, session);
                }
            }
            _ => {}
        }
    }

    /// Hand the latest direction to the tick, emptying the slot
    pub fn take_pending(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending.peek()
    }

    /// Forget any unconsumed direction, e.g. when a new session starts
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn steer(&mut self, direction: Direction, session: SessionState) {
        if session != SessionState::Running {
            trace!(?direction, ?session, "steering ignored outside a running session");
            return;
        }
        self.pending.set(direction);
    }
}
