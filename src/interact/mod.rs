//! Pointer interaction: field gestures, undo history and the floating preview.

/// Select / move / resize state machine.
pub mod gesture;
/// Undo/redo port and the default bounded stack.
pub mod history;
/// Long-press peek and drag of the floating preview.
pub mod peek;

pub use gesture::{GestureController, GestureOutcome, GestureState, StyleUpdate};
pub use history::{History, UndoStack};
pub use peek::{PeekController, PeekState};
