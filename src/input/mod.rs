//! Input adapter: keyboard and mouse-drag gestures to a pending direction

pub mod adapter;
pub mod handler;
pub mod pending;
pub mod swipe;

pub use adapter::InputAdapter;
pub use handler::{InputHandler, KeyAction};
pub use pending::PendingDirection;
pub use swipe::{SwipeTracker, classify_swipe};
