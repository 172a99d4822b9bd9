//! Swipe gesture classification.
//!
//! A swipe is the displacement between a press point and a release point on
//! the drawing surface. The axis with the larger displacement decides the
//! candidate direction, and that displacement has to beat the threshold.

use crate::game::Direction;

/// Surface units covered by one terminal column
pub const COLUMN_UNITS: f32 = 10.0;
/// Surface units covered by one terminal row (cells are roughly twice as tall as wide)
pub const ROW_UNITS: f32 = 20.0;

/// Convert a terminal cell position into surface units
pub fn terminal_to_surface(column: u16, row: u16) -> (f32, f32) {
    (column as f32 * COLUMN_UNITS, row as f32 * ROW_UNITS)
}

/// Classify a displacement. `+dy` points down, as on screen.
///
/// Ties between the axes go to the vertical one.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(Direction::Right)
        } else if dx < -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy > threshold {
        Some(Direction::Down)
    } else if dy < -threshold {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Remembers where the current gesture started
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    origin: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    /// Finish the gesture at `(x, y)`. A release without a press yields nothing.
    pub fn end(&mut self, x: f32, y: f32, threshold: f32) -> Option<Direction> {
        let (start_x, start_y) = self.origin.take()?;
        classify_swipe(x - start_x, y - start_y, threshold)
    }

    pub fn in_progress(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_axis_decides() {
        assert_eq!(classify_swipe(80.0, 30.0, 50.0), Some(Direction::Right));
        assert_eq!(classify_swipe(-80.0, 30.0, 50.0), Some(Direction::Left));
        assert_eq!(classify_swipe(30.0, 80.0, 50.0), Some(Direction::Down));
        assert_eq!(classify_swipe(30.0, -80.0, 50.0), Some(Direction::Up));
    }

    #[test]
    fn test_threshold_must_be_exceeded() {
        assert_eq!(classify_swipe(50.0, 0.0, 50.0), None);
        assert_eq!(classify_swipe(-50.0, 0.0, 50.0), None);
        assert_eq!(classify_swipe(50.5, 0.0, 50.0), Some(Direction::Right));
        assert_eq!(classify_swipe(0.0, 49.0, 50.0), None);
    }

    #[test]
    fn test_short_dominant_axis_is_not_rescued_by_other_axis() {
        // Horizontal dominates but is too short; vertical is never considered
        assert_eq!(classify_swipe(45.0, 40.0, 30.0), Some(Direction::Right));
        assert_eq!(classify_swipe(45.0, 40.0, 50.0), None);
    }

    #[test]
    fn test_tie_goes_vertical() {
        assert_eq!(classify_swipe(60.0, 60.0, 50.0), Some(Direction::Down));
        assert_eq!(classify_swipe(60.0, -60.0, 50.0), Some(Direction::Up));
    }

    #[test]
    fn test_tracker_pairs_press_and_release() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.end(100.0, 0.0, 50.0), None);

        tracker.begin(10.0, 10.0);
        assert!(tracker.in_progress());
        assert_eq!(tracker.end(10.0, 100.0, 50.0), Some(Direction::Down));
        assert!(!tracker.in_progress());
        assert_eq!(tracker.end(10.0, 200.0, 50.0), None);
    }

    #[test]
    fn test_terminal_units() {
        assert_eq!(terminal_to_surface(0, 0), (0.0, 0.0));
        assert_eq!(terminal_to_surface(6, 3), (60.0, 60.0));

        // Six columns to the right is a swipe, two columns is not
        let (x0, y0) = terminal_to_surface(10, 5);
        let (x1, y1) = terminal_to_surface(16, 5);
        assert_eq!(classify_swipe(x1 - x0, y1 - y0, 50.0), Some(Direction::Right));
        let (x2, _) = terminal_to_surface(12, 5);
        assert_eq!(classify_swipe(x2 - x0, 0.0, 50.0), None);
    }
}
