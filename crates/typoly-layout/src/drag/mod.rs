//! Pointer-drag resizing of the three pane boundaries.
//!
//! A drag runs `begin` → `pointer_move`* → `end` (or `cancel`). The host
//! view sits behind two traits: [`DragHost`] attaches the window-wide
//! pointer listeners and sets the cursor, [`ContainerMeasure`] reports the
//! container's bounding box. The box is re-measured on every move.

mod controller;
mod types;

pub use controller::DragController;
pub use types::*;
