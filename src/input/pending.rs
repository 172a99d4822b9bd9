use crate::game::Direction;

/// Single-slot mailbox between input and the tick.
///
/// Any number of writes may land between two ticks; only the latest survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDirection(Option<Direction>);

impl PendingDirection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, direction: Direction) {
        self.0 = Some(direction);
    }

    /// Consume the slot, leaving it empty
    pub fn take(&mut self) -> Option<Direction> {
        self.0.take()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
